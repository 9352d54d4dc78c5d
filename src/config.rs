//! Command line arguments and the settings file.
//!
//! Settings are read from `~/.config/leafmealone/config.toml` unless
//! `--config` points elsewhere. Every key is optional:
//!
//! ```toml
//! presets = [15, 30, 45, 60, 90, 120, 150, 180]   # minutes
//! allowed_apps = ["WhatsApp", "Gmail", "Chrome"]
//! warning_message = "Focus on your study! App access is restricted."
//! bell = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::constants::{DEFAULT_ALLOWED_APPS, DEFAULT_PRESETS, DEFAULT_WARNING, MAX_PRESET_MINUTES};
use crate::error::ConfigError;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "leafmealone")]
#[command(about = "A terminal focus timer that grows a tree while you study")]
#[command(version)]
pub struct Cli {
    /// Settings file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(short, long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Get the log level based on the verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// User preferences loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Preset session lengths in minutes
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
    /// Apps that can be exempted in SOS mode
    #[serde(default = "default_allowed_apps")]
    pub allowed_apps: Vec<String>,
    /// Text of the focus alert
    #[serde(default = "default_warning_message")]
    pub warning_message: String,
    /// Ring the terminal bell when the alert fires
    #[serde(default = "default_true")]
    pub bell: bool,
}

fn default_presets() -> Vec<u32> {
    DEFAULT_PRESETS.to_vec()
}

fn default_allowed_apps() -> Vec<String> {
    DEFAULT_ALLOWED_APPS.iter().map(|s| s.to_string()).collect()
}

fn default_warning_message() -> String {
    DEFAULT_WARNING.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            allowed_apps: default_allowed_apps(),
            warning_message: default_warning_message(),
            bell: true,
        }
    }
}

impl Settings {
    /// Default settings path, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("leafmealone").join("config.toml"))
    }

    /// Loads settings from `explicit`, or from the default path if present.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and validates a settings file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(invalid("presets", "at least one preset is required"));
        }
        if let Some(bad) = self
            .presets
            .iter()
            .find(|&&m| m == 0 || m > MAX_PRESET_MINUTES)
        {
            return Err(invalid(
                "presets",
                &format!("{bad} is outside 1..={MAX_PRESET_MINUTES} minutes"),
            ));
        }
        if self.allowed_apps.iter().any(|app| app.trim().is_empty()) {
            return Err(invalid("allowed_apps", "app names cannot be empty"));
        }
        if self.warning_message.trim().is_empty() {
            return Err(invalid("warning_message", "cannot be empty"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
