//! Error types for monctl operations.

use thiserror::Error;

use crate::device::Setting;

/// Primary error type for monitor control operations.
#[derive(Error, Debug)]
pub enum MonitorError {
    // Detection errors
    #[error("Error detecting monitors: {reason}")]
    Detection { reason: String },

    #[error("No monitors detected")]
    NoDevices,

    // Selection errors
    #[error("Invalid monitor index {index}. Available: 0-{}", .count.saturating_sub(1))]
    InvalidIndex { index: i64, count: usize },

    #[error("Monitor {index} is already in use by another operation")]
    DeviceBusy { index: usize },

    // Preset errors
    #[error("Unknown preset '{name}'. Available: {}", .available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<&'static str>,
    },

    // Transport errors
    #[error("Error reading {setting} from monitor {index}: {reason}")]
    Read {
        index: usize,
        setting: Setting,
        reason: String,
    },

    #[error("Error setting {setting} to {value}% on monitor {index}: {reason}")]
    Write {
        index: usize,
        setting: Setting,
        value: u16,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Configuration file already exists: {path}")]
    ConfigExists { path: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl MonitorError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoDevices
                | Self::InvalidIndex { .. }
                | Self::UnknownPreset { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigExists { .. }
        )
    }

    /// Returns true if the error came from the display transport.
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Detection { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Detection { .. } | Self::NoDevices => Some(
                "Ensure DDC/CI is enabled in the monitor menu and that you can access /dev/i2c-*",
            ),
            Self::InvalidIndex { .. } => Some("Run: monctl list"),
            Self::UnknownPreset { .. } => Some("Run: monctl presets"),
            Self::Read { .. } | Self::Write { .. } => {
                Some("Some monitors do not answer DDC/CI on every input; try again or check the cable")
            }
            Self::ConfigNotFound { .. } => Some("Run: monctl init"),
            Self::ConfigExists { .. } => Some("Use --force to overwrite"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using MonitorError.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| MonitorError::Other(format!("{}: {e}", f().into())))
    }
}
