//! Left column: preset list and SOS allow-list panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Panel};
use crate::duration::preset_label;

use super::colors;

/// Height of the SOS panel: borders, status line, and the app list when enabled.
pub fn sos_panel_height(app: &App) -> u16 {
    let rows = if app.sos.is_enabled() {
        2 + app.settings.allowed_apps.len()
    } else {
        1
    };
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

fn panel_block(icon: &'static str, title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { colors::PRIMARY } else { colors::BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(icon, Style::default().fg(colors::ACCENT)),
            Span::styled(" ", Style::default()),
            Span::styled(title, Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
}

/// Draws the preset list.
pub fn draw_presets(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.panel == Panel::Presets;
    // Presets are locked while a session runs
    let locked = app.session.is_running();

    let items: Vec<ListItem> = app
        .settings
        .presets
        .iter()
        .enumerate()
        .map(|(idx, &minutes)| {
            let is_selected = focused && app.presets_state.selected() == Some(idx);
            let style = if is_selected && !locked {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else if locked {
                Style::default().fg(colors::MUTED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { " ▸ " } else { "   " },
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(preset_label(minutes), style.add_modifier(Modifier::BOLD)),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items)
        .block(panel_block("⏲", "Presets", focused))
        .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut app.presets_state.clone());
}

/// Draws the SOS mode status and, when enabled, the allowed apps.
pub fn draw_sos_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.panel == Panel::Apps;
    let block = panel_block("🆘", "SOS", focused);

    let mut lines = Vec::new();
    if !app.sos.is_enabled() {
        lines.push(Line::from(vec![
            Span::styled(" OFF ", Style::default().fg(colors::MUTED).bold()),
            Span::styled("press 's' for emergencies", Style::default().fg(colors::MUTED)),
        ]));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    lines.push(Line::from(vec![
        Span::styled(" ON ", Style::default().fg(colors::WARNING).bold()),
        Span::styled(
            format!("{} app(s) allowed", app.sos.allowed_count()),
            Style::default().fg(colors::SECONDARY),
        ),
    ]));
    lines.push(Line::from(""));

    let selected = app.apps_state.selected();
    for (idx, name) in app.settings.allowed_apps.iter().enumerate() {
        let is_selected = focused && selected == Some(idx);
        let allowed = app.sos.is_allowed(name);
        let style = if is_selected {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
        } else {
            Style::default()
        };
        lines.push(
            Line::from(vec![
                Span::styled(
                    if allowed { " [✓] " } else { " [ ] " },
                    Style::default().fg(if allowed { colors::SUCCESS } else { colors::MUTED }),
                ),
                Span::styled(name.as_str(), style),
            ])
            .style(style),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::focus::testing::RecordingSource;

    #[test]
    fn test_sos_panel_grows_with_app_list() {
        let (source, _) = RecordingSource::new();
        let mut app = App::new(Settings::default(), Box::new(source));
        assert_eq!(sos_panel_height(&app), 3);

        app.sos.toggle_mode();
        assert_eq!(sos_panel_height(&app), 2 + 3 + 2);
    }
}
