//! Dialog rendering (custom duration, study materials, focus alert).

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CUSTOM_FIELDS};
use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

fn dialog_block<'a>(icon: &'a str, title: &'a str, color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(icon, Style::default().fg(color)),
            Span::styled(" ", Style::default()),
            Span::styled(title, Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1))
}

fn cursor() -> Span<'static> {
    Span::styled(
        BLOCK_CURSOR,
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::SLOW_BLINK),
    )
}

fn footer(submit: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(format!(" {submit}  "), Style::default().fg(colors::MUTED)),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" cancel", Style::default().fg(colors::MUTED)),
    ])
}

/// Draws the hours / minutes / seconds dialog.
pub fn draw_custom_duration_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(dialog::INPUT_WIDTH, dialog::INPUT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let mut fields: Vec<Span> = vec![Span::styled("  ", Style::default())];
    for (idx, label) in CUSTOM_FIELDS.iter().enumerate() {
        let focused = idx == app.custom_field;
        let label_style = if focused {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        let value_style = if focused {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
        } else {
            Style::default().fg(Color::White)
        };

        fields.push(Span::styled(format!("{label}: "), label_style));
        let value = &app.custom_fields[idx];
        if focused {
            fields.push(Span::styled(INPUT_INDICATOR, Style::default().fg(colors::MUTED)));
            fields.push(Span::styled(value.as_str(), value_style));
            fields.push(cursor());
        } else if value.is_empty() {
            fields.push(Span::styled("0", value_style));
        } else {
            fields.push(Span::styled(value.as_str(), value_style));
        }
        fields.push(Span::styled("   ", Style::default()));
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "How long do you want to focus?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(fields),
        Line::from(""),
        Line::from(Span::styled(
            "  Empty fields count as 0. Max 23:59:59.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        footer("start"),
    ];

    let input_widget =
        Paragraph::new(content).block(dialog_block("⏱", "Custom Timer", colors::PRIMARY));

    frame.render_widget(input_widget, area);
}

/// Draws the study materials path dialog.
pub fn draw_materials_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(dialog::INPUT_WIDTH, dialog::INPUT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Paths of the files to add (space separated, quote paths with spaces):",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {INPUT_INDICATOR}"),
                Style::default().fg(colors::MUTED),
            ),
            Span::styled(&app.input_buffer, Style::default().fg(Color::White)),
            cursor(),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Only PDF files are kept.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        footer("add"),
    ];

    let input_widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(dialog_block("📚", "Add Study Materials", colors::PRIMARY));

    frame.render_widget(input_widget, area);
}

/// Draws the focus alert raised when the terminal regains focus.
pub fn draw_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(dialog::ALERT_WIDTH, dialog::ALERT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ERROR))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("⚠", Style::default().fg(colors::ERROR)),
            Span::styled(" ", Style::default()),
            Span::styled("Stay Focused", Style::default().fg(colors::ERROR).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(colors::WARNING).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Turn on SOS with 's' if you really need another app.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press any key", Style::default().fg(colors::KEY).bold()),
            Span::styled(" to get back to studying", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let alert = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(alert, area);
}
