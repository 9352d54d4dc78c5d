//! Session durations: presets, custom input and clock formatting.

use crate::error::TimerError;

/// Result of validating a single custom-duration field.
pub type FieldResult = Result<u32, TimerError>;

/// Parses one field of the custom duration dialog.
///
/// Rules:
/// - Empty or non-numeric text counts as 0
/// - A leading minus sign followed by digits is rejected
/// - Values too large for `u32` saturate
pub fn parse_field(label: &str, text: &str) -> FieldResult {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(TimerError::InvalidDuration(format!(
                "{label} cannot be negative"
            )));
        }
    }

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Ok(0);
    }

    Ok(text.parse::<u32>().unwrap_or(u32::MAX))
}

/// Hours, minutes and seconds typed by the user, each clamped to its range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomDurationInput {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CustomDurationInput {
    pub const MAX_HOURS: u32 = 23;
    pub const MAX_MINUTES: u32 = 59;
    pub const MAX_SECONDS: u32 = 59;

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours.min(Self::MAX_HOURS),
            minutes: minutes.min(Self::MAX_MINUTES),
            seconds: seconds.min(Self::MAX_SECONDS),
        }
    }

    /// Builds the input from the three dialog fields.
    pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Result<Self, TimerError> {
        Ok(Self::new(
            parse_field("Hours", hours)?,
            parse_field("Minutes", minutes)?,
            parse_field("Seconds", seconds)?,
        ))
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Duration in seconds of a preset given in minutes.
pub fn preset_seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(60)
}

/// Short label for a preset, e.g. "45 min" or "1.5 hours".
pub fn preset_label(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (1, 0) => "1 hour".to_string(),
        (h, 0) => format!("{h} hours"),
        (h, 30) => format!("{h}.5 hours"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Formats seconds as `HH:MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}
