//! FAQ accordion view

use super::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the FAQ accordion
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let faq = &app.state.faq;
    let block = Block::default()
        .title(" Frequently Asked Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    if faq.items.is_empty() {
        let content = Paragraph::new("No questions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = faq
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_open = faq.is_open(idx);
            let marker = if is_open { "▾" } else { "▸" };
            let style = if idx == faq.selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(Color::Yellow)),
                Span::styled(&item.question, style),
            ])];
            if is_open {
                lines.extend(item.answer.lines().map(|l| {
                    Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(Color::Gray),
                    ))
                }));
                lines.push(Line::default());
            }
            ListItem::new(lines)
        })
        .collect();

    render_scrollable_list(frame, area, List::new(items).block(block), faq.selected);
}
