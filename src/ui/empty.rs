//! Empty state rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::colors;

/// Draws an empty state with icon, title, and hint inside `block`.
pub fn draw_empty_state(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    title: &str,
    hint: &str,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled("📄", Style::default().fg(colors::ACCENT))),
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(colors::MUTED))),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
