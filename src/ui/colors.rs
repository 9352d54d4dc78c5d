//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

use crate::stage::GrowthStage;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(74, 222, 128); // Leaf green
/// Secondary accent color (used for active elements)
pub const SECONDARY: Color = Color::Rgb(56, 189, 248); // Sky blue
/// Background for selected items
pub const SELECTION: Color = Color::Rgb(21, 128, 61); // Deep green
/// Text on selection
pub const SELECTION_TEXT: Color = Color::White;
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Warning color
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(110, 231, 183); // Light emerald
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple
/// Soil under the tree
pub const SOIL: Color = Color::Rgb(161, 98, 7); // Brown

/// Foliage color for a growth stage.
pub fn stage(stage: GrowthStage) -> Color {
    match stage {
        GrowthStage::Seed => SOIL,
        GrowthStage::Sprout => Color::Rgb(163, 230, 53), // Lime
        GrowthStage::Sapling => Color::Rgb(74, 222, 128), // Green
        GrowthStage::Tree => Color::Rgb(22, 163, 74),     // Forest
    }
}
