//! Study materials panel.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;

use super::colors;
use super::empty::draw_empty_state;

/// Draws the list of added PDFs.
pub fn draw_materials(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.materials.len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("📚", Style::default()),
            Span::styled(
                " Study Materials ",
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(format!("({count}) "), Style::default().fg(colors::MUTED)),
        ]));

    if app.materials.is_empty() {
        draw_empty_state(
            frame,
            area,
            block,
            "No study materials yet",
            "Press 'o' to add PDF study materials",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .materials
        .names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled("  ", Style::default()),
                Span::styled(name.as_str(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
