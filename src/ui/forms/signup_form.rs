//! Newsletter sign-up form

use super::field_renderer::{draw_checkbox, draw_field, draw_help_text, TEXT_FIELD_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::signup::{FieldId, StatusKind};
use crate::state::SignupForm;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::None => Style::default(),
        StatusKind::Loading => Style::default().fg(Color::Cyan),
        StatusKind::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        StatusKind::Error => Style::default().fg(Color::Red),
    }
}

/// Draw the sign-up form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    // Render from a copy so the workflow never waits on the renderer
    let form: SignupForm = app.state.signup.snapshot();

    let block = Block::default()
        .title(" Join the GossipYah Newsletter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT), // Name
            Constraint::Length(TEXT_FIELD_HEIGHT), // Phone
            Constraint::Length(1),                 // Terms
            Constraint::Length(1),                 // Newsletter consent
            Constraint::Length(1),                 // Spacer
            Constraint::Length(BUTTON_HEIGHT),     // Join button
            Constraint::Length(2),                 // Status
            Constraint::Min(0),                    // Padding
            Constraint::Length(1),                 // Help text
        ])
        .margin(1)
        .split(area);

    let active = form.active_field_id();
    let is_active = |id: FieldId| active == Some(id);

    draw_field(
        frame,
        chunks[0],
        &form.name,
        is_active(FieldId::Name),
        form.disabled,
    );
    draw_field(
        frame,
        chunks[1],
        &form.phone,
        is_active(FieldId::Phone),
        form.disabled,
    );
    draw_checkbox(
        frame,
        chunks[2],
        &form.terms,
        is_active(FieldId::TermsAgreement),
        form.disabled,
    );
    draw_checkbox(
        frame,
        chunks[3],
        &form.newsletter,
        is_active(FieldId::NewsletterConsent),
        form.disabled,
    );

    let button_area = Rect {
        width: chunks[5].width.min(24),
        ..chunks[5]
    };
    render_button(
        frame,
        button_area,
        "Join GossipYah",
        form.is_join_button_active(),
        !form.disabled,
    );

    let status = Paragraph::new(form.status_text.as_str())
        .style(status_style(form.status_kind))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[6]);

    draw_help_text(
        frame,
        chunks[8],
        &format!("Tab: next field | Space: tick box | {SUBMIT_SHORTCUT}: join | Esc: back"),
    );
}
