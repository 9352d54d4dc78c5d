//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, Panel, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available in the current state.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.alerts.current.is_some() {
        return vec![("any key", "back to studying")];
    }

    match &app.current_view {
        View::Input(InputMode::CustomDuration) => vec![
            ("Tab/←/→", "field"),
            ("Enter", "start"),
            ("Esc", "cancel"),
        ],
        View::Input(InputMode::Materials) => vec![("Enter", "add"), ("Esc", "cancel")],
        View::Timer if app.session.is_running() => vec![
            ("x", "stop"),
            ("s", if app.sos.is_enabled() { "disable SOS" } else { "SOS" }),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Timer if app.panel == Panel::Apps => vec![
            ("j/k", "navigate"),
            ("Space", "allow/remove"),
            ("Tab", "presets"),
            ("s", "disable SOS"),
            ("q", "quit"),
        ],
        View::Timer => vec![
            ("j/k", "navigate"),
            ("Enter", "start"),
            ("c", "custom"),
            ("s", "SOS"),
            ("o", "add PDFs"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
