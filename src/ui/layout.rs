//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{BlogFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            view.shortcut(),
            view.label(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        " GossipYah ",
        Style::default().fg(Color::Yellow),
    )];

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if app.signup_status().is_in_flight() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("sending...", Style::default().fg(Color::Cyan)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Blog => match app.state.blog_focus {
            BlogFocus::Filters => "h/l:filter  Enter:apply  Tab:posts  1-3:views  q:quit",
            BlogFocus::Posts => "j/k:nav  Tab:load more  1-3:views  q:quit",
            BlogFocus::LoadMore => "Enter:load more  Tab:filters  1-3:views  q:quit",
        }
        .to_string(),
        View::Faq => "j/k:nav  Enter/Space:toggle  1-3:views  q:quit".to_string(),
        View::Subscribe => {
            format!("Tab:next  Space:check  {SUBMIT_SHORTCUT}:join  Esc:back")
        }
    }
}
