//! Tree rendering for each growth stage.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::stage::GrowthStage;

use super::colors;

/// Rows of art per stage. The last row is the ground.
const ART_ROWS: usize = 7;

/// ASCII art for a growth stage.
pub fn stage_art(stage: GrowthStage) -> [&'static str; ART_ROWS] {
    match stage {
        GrowthStage::Seed => [
            "             ",
            "             ",
            "             ",
            "             ",
            "             ",
            "      ●      ",
            "▁▁▁▁▁▁▁▁▁▁▁▁▁",
        ],
        GrowthStage::Sprout => [
            "             ",
            "             ",
            "             ",
            "    \\   /    ",
            "     \\ /     ",
            "      │      ",
            "▁▁▁▁▁▁●▁▁▁▁▁▁",
        ],
        GrowthStage::Sapling => [
            "             ",
            "      ♣      ",
            "   \\ /│\\ /   ",
            "    \\ │ /    ",
            "     \\│/     ",
            "      │      ",
            "▁▁▁▁▁▁┴▁▁▁▁▁▁",
        ],
        GrowthStage::Tree => [
            "     ♣♣♣     ",
            "   ♣♣♣♣♣♣♣   ",
            "  ♣♣♣♣♣♣♣♣♣  ",
            "   ♣♣♣│♣♣♣   ",
            "    \\ │ /    ",
            "      │      ",
            "▁▁▁▁▁▁┴▁▁▁▁▁▁",
        ],
    }
}

/// Draws the tree for the current progress.
pub fn draw_tree(frame: &mut Frame, area: Rect, app: &App) {
    let stage = app.session.stage();
    let foliage = Style::default().fg(colors::stage(stage));
    let soil = Style::default().fg(colors::SOIL);

    let art = stage_art(stage);
    let mut lines: Vec<Line> = art[..ART_ROWS - 1]
        .iter()
        .map(|row| Line::from(Span::styled(*row, foliage)))
        .collect();
    lines.push(Line::from(Span::styled(art[ART_ROWS - 1], soil)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        stage.label(),
        foliage.bold(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("🌱", Style::default()),
            Span::styled(" Growth ", Style::default().fg(Color::White).bold()),
        ]));

    let tree = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(tree, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_art_of_equal_width() {
        for stage in GrowthStage::ALL {
            let art = stage_art(stage);
            let width = art[0].chars().count();
            assert!(art.iter().all(|row| row.chars().count() == width));
        }
    }

    #[test]
    fn test_stages_have_distinct_art() {
        assert_ne!(stage_art(GrowthStage::Seed), stage_art(GrowthStage::Sprout));
        assert_ne!(stage_art(GrowthStage::Sapling), stage_art(GrowthStage::Tree));
    }
}
