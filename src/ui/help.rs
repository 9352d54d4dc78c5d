//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Key bindings grouped by section: (title, [(keys, description)]).
const SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "TIMER",
        &[
            ("j / k", "Move through presets"),
            ("Enter", "Start the selected preset"),
            ("c", "Custom hours / minutes / seconds"),
            ("x", "Stop the running session"),
        ],
    ),
    (
        "SOS MODE",
        &[
            ("s", "Turn SOS on or off (silences focus alerts)"),
            ("Tab", "Switch between presets and apps"),
            ("Space", "Allow or remove the selected app"),
        ],
    ),
    (
        "STUDY MATERIALS",
        &[("o", "Add PDF files by path (space separated)")],
    ),
    (
        "GENERAL",
        &[("? / F1", "Show this help"), ("q / Ctrl+C", "Quit")],
    ),
];

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();

    let mut lines = vec![Line::from("")];
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(title, section_style),
        ]));
        lines.push(Line::from(""));
        for (keys, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(format!("{keys:<12}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Leaving the terminal during a session raises a focus alert.",
        Style::default().fg(colors::MUTED),
    )));

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_section() {
        let text = get_help_text();
        let rendered: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();
        for (title, _) in SECTIONS {
            assert!(rendered.iter().any(|l| l.contains(title)));
        }
    }
}
