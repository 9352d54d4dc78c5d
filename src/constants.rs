//! Application-wide constants.
//!
//! Centralizes magic numbers and default settings.

use std::time::Duration;

/// Period of the countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default preset durations, in minutes.
pub const DEFAULT_PRESETS: [u32; 8] = [15, 30, 45, 60, 90, 120, 150, 180];

/// Apps offered in the SOS allow-list by default.
pub const DEFAULT_ALLOWED_APPS: [&str; 3] = ["WhatsApp", "Gmail", "Chrome"];

/// Alert shown when focus returns during a session.
pub const DEFAULT_WARNING: &str = "Focus on your study! App access is restricted.";

/// Longest accepted preset (23h 59m).
pub const MAX_PRESET_MINUTES: u32 = 23 * 60 + 59;

/// MIME types used by the study materials picker.
pub mod mime {
    /// The only type accepted into the materials list.
    pub const PDF: &str = "application/pdf";
    /// Type reported for unknown extensions.
    pub const FALLBACK: &str = "application/octet-stream";
    /// Known lowercase extensions and their types.
    pub const BY_EXTENSION: &[(&str, &str)] = &[
        ("pdf", PDF),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("txt", "text/plain"),
        ("md", "text/markdown"),
        ("epub", "application/epub+zip"),
        ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ];
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Width of the left column (presets, SOS) as a percentage.
    pub const SIDEBAR_WIDTH: u16 = 34;
    /// Height of the tree panel.
    pub const TREE_HEIGHT: u16 = 11;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
    /// Input dialog width percentage.
    pub const INPUT_WIDTH: u16 = 50;
    /// Input dialog height percentage.
    pub const INPUT_HEIGHT: u16 = 35;
    /// Focus alert width percentage.
    pub const ALERT_WIDTH: u16 = 50;
    /// Focus alert height percentage.
    pub const ALERT_HEIGHT: u16 = 30;
}
