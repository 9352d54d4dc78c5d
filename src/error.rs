//! Error types for the timer core and configuration.
//!
//! Domain errors use thiserror; the application edge wraps them in anyhow.

use std::path::PathBuf;

use thiserror::Error;

/// Recoverable errors raised when starting a focus session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The requested duration cannot be used (e.g. a negative field).
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// A start was requested while a session is already counting down.
    #[error("A focus session is already running")]
    AlreadyRunning,
}

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`crate::config::Settings`]
    #[error("Failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_error_messages() {
        assert_eq!(
            TimerError::AlreadyRunning.to_string(),
            "A focus session is already running"
        );
        assert_eq!(
            TimerError::InvalidDuration("hours is negative".into()).to_string(),
            "Invalid duration: hours is negative"
        );
    }

    #[test]
    fn test_invalid_value_message_names_key() {
        let err = ConfigError::InvalidValue {
            key: "presets".into(),
            message: "must not be empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'presets': must not be empty"
        );
    }
}
