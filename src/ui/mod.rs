//! UI module for rendering the TUI

mod blog;
mod components;
mod faq;
mod forms;
mod layout;
mod widgets;

pub use widgets::render_scrollable_list;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Blog => blog::draw(frame, main_area, app),
        View::Faq => faq::draw(frame, main_area, app),
        View::Subscribe => forms::draw_signup(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
