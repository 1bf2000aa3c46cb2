//! Blog listing view: category filters, cards and the load-more button

use super::components::{render_button, BUTTON_HEIGHT};
use super::render_scrollable_list;
use crate::app::App;
use crate::state::BlogFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn border_color(focused: bool) -> Color {
    if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Draw the blog view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Filters
            Constraint::Min(0),                // Cards
            Constraint::Length(BUTTON_HEIGHT), // Load more / end note
        ])
        .split(area);

    draw_filters(frame, chunks[0], app);
    draw_posts(frame, chunks[1], app);
    draw_load_more(frame, chunks[2], app);
}

fn draw_filters(frame: &mut Frame, area: Rect, app: &App) {
    let blog = &app.state.blog;
    let focused = app.state.blog_focus == BlogFocus::Filters;

    let mut spans = Vec::new();
    for (idx, filter) in blog.filters.iter().enumerate() {
        let mut style = if *filter == blog.active_filter {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        if focused && idx == blog.selected_filter {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_posts(frame: &mut Frame, area: Rect, app: &App) {
    let blog = &app.state.blog;
    let focused = app.state.blog_focus == BlogFocus::Posts;
    let block = Block::default()
        .title(format!(" Latest Gossip - {} ", blog.active_filter.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)));

    let posts = blog.visible_posts();
    if posts.is_empty() {
        let content = Paragraph::new("No posts in this category.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = posts
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            let is_selected = focused && idx == blog.selected_post;
            let prefix = if is_selected { "▸ " } else { "  " };
            let title_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut meta = vec![
                Span::raw("    "),
                Span::styled(&post.category, Style::default().fg(Color::Magenta)),
            ];
            if post.read_minutes > 0 {
                meta.push(Span::styled(
                    format!("  {} min read", post.read_minutes),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(prefix, title_style),
                    Span::styled(&post.title, title_style),
                ]),
                Line::from(meta),
            ];
            if !post.excerpt.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", post.excerpt),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    render_scrollable_list(frame, area, List::new(items).block(block), blog.selected_post);
}

fn draw_load_more(frame: &mut Frame, area: Rect, app: &App) {
    let load_more = &app.state.blog.load_more;
    match load_more.button_label() {
        Some(label) => render_button(
            frame,
            area,
            label,
            app.state.blog_focus == BlogFocus::LoadMore,
            load_more.is_enabled(),
        ),
        None => {
            let note = load_more.end_note().unwrap_or_default();
            let content = Paragraph::new(note)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            frame.render_widget(content, area);
        }
    }
}
