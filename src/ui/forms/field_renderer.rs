//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a text field takes: bordered input plus one line for its error
pub const TEXT_FIELD_HEIGHT: u16 = 4;

fn accent(is_active: bool, disabled: bool) -> Style {
    if is_active && !disabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn error_line(field: &FormField) -> Line<'_> {
    match &field.error {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::default(),
    }
}

/// Draw a text field with its inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    disabled: bool,
) {
    let input_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + input_area.height,
        height: area.height.min(1),
        ..area
    };

    let value_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let cursor = if is_active && !disabled { "▌" } else { "" };

    let mut border_style = accent(is_active, disabled);
    if field.error.is_some() {
        border_style = Style::default().fg(Color::Red);
    }

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(content, input_area);
    frame.render_widget(Paragraph::new(error_line(field)), error_area);
}

/// Draw a checkbox row
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    disabled: bool,
) {
    let mut label_style = accent(is_active, disabled);
    if !is_active && !disabled {
        label_style = Style::default();
    }
    if is_active {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(if is_active { "▸ " } else { "  " }, accent(is_active, disabled)),
        Span::styled(field.display_value(), accent(is_active, disabled)),
        Span::raw(" "),
        Span::styled(&field.label, label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
