//! Countdown clock and progress bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::duration::format_clock;
use crate::timer::TimerPhase;

use super::colors;

/// Draws the clock, the progress gauge and the session state line.
pub fn draw_timer(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let stage_color = colors::stage(session.stage());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("⏱", Style::default().fg(colors::PRIMARY)),
            Span::styled(" Timer ", Style::default().fg(Color::White).bold()),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // State
        ])
        .split(inner);

    let mut clock_spans = vec![Span::styled(
        format_clock(session.remaining_seconds()),
        Style::default().fg(colors::PRIMARY).bold(),
    )];
    if session.initial_seconds() > 0 {
        clock_spans.push(Span::styled(
            format!(" / {}", format_clock(session.initial_seconds())),
            Style::default().fg(colors::MUTED),
        ));
    }
    let clock = Paragraph::new(Line::from(clock_spans)).alignment(Alignment::Center);
    frame.render_widget(clock, rows[0]);

    let progress = session.progress();
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(stage_color))
        .unfilled_style(Style::default().fg(colors::MUTED))
        .line_set(symbols::line::THICK)
        .label(Span::styled(
            format!("{progress:>5.1}% "),
            Style::default().fg(Color::White),
        ))
        .ratio(progress / 100.0);
    frame.render_widget(gauge, rows[1]);

    let state = match session.phase() {
        TimerPhase::Idle => Span::styled(
            "Pick a preset or press 'c' for a custom timer",
            Style::default().fg(colors::MUTED),
        ),
        TimerPhase::Running => {
            let ends_at = session
                .ends_at()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default();
            Span::styled(
                format!("Growing... ends at {ends_at}"),
                Style::default().fg(colors::SUCCESS),
            )
        }
        TimerPhase::Stopped => Span::styled(
            "Stopped. Pick a preset to start again",
            Style::default().fg(colors::WARNING),
        ),
        TimerPhase::Completed => Span::styled(
            "Session complete!",
            Style::default().fg(colors::SUCCESS).bold(),
        ),
    };
    frame.render_widget(
        Paragraph::new(Line::from(state)).alignment(Alignment::Center),
        rows[2],
    );
}
