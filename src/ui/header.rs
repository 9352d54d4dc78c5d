//! Header rendering with ASCII art logo.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::timer::TimerPhase;

use super::colors;

/// Logo rows, padded to the same width.
const LOGO: [&str; 4] = [
    " █     ▄▀▀▀ ▄▀▀▄ █▀▀▀  ",
    " █     █▀▀  █▀▀█ █▀▀   ",
    " █▄▄▄▄ ▀▄▄▄ █  █ █     ",
    "                       ",
];

/// Returns the session indicator: icon, label and color.
fn session_indicator(app: &App) -> (&'static str, &'static str, Color) {
    if app.session.is_running() && app.sos.is_enabled() {
        (" ✚ ", "SOS", colors::ERROR)
    } else if app.session.is_focus_guarded() {
        (" ◈ ", "FOCUS", colors::WARNING)
    } else if app.session.phase() == TimerPhase::Completed {
        (" ◈ ", "GROWN", colors::SUCCESS)
    } else {
        (" ◈ ", "READY", colors::SECONDARY)
    }
}

/// Draws the header with ASCII art logo and subtitle.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));
    let logo_style = Style::default().fg(colors::PRIMARY).bold();

    // Status indicator
    let (icon, label, color) = session_indicator(app);
    let mut icon_style = Style::default().fg(color);
    if app.session.is_running() {
        icon_style = icon_style.add_modifier(Modifier::SLOW_BLINK);
    }

    // Top border with status indicator
    let line0 = Line::from(vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
        Span::styled("┃", border_style),
        Span::styled(icon, icon_style),
        Span::styled(label, Style::default().fg(color).bold()),
        Span::styled(" ┃", border_style),
        Span::styled("▓▒░", dim_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);

    // Logo line 1 + info panel top
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[0], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭───────────────────────────────╮", border_style),
    ]);

    // Logo line 2 + title
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[1], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" LEAF", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("ME", Style::default().fg(colors::KEY).bold()),
        Span::styled("::", muted_style),
        Span::styled("ALONE", Style::default().fg(colors::SECONDARY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("TUI", Style::default().fg(colors::ACCENT).bold()),
        Span::styled(" ◆  │", border_style),
    ]);

    // Logo line 3 + info tags
    let line3 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[2], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("▪", Style::default().fg(colors::SECONDARY)),
        Span::styled(" FOCUS ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::SUCCESS)),
        Span::styled(" GROW ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::WARNING)),
        Span::styled(format!(" v{}   │", env!("CARGO_PKG_VERSION")), border_style),
    ]);

    // Blank logo line + info panel bottom
    let line4 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(LOGO[3], logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────────╯", border_style),
    ]);

    // Bottom border + current stage
    let stage = app.session.stage();
    let line5 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢  ", Style::default().fg(colors::stage(stage))),
        Span::styled(stage.label(), Style::default().fg(colors::stage(stage)).bold()),
        Span::styled(" ╟╼", border_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4, line5]);
    frame.render_widget(header, area);
}
