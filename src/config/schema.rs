//! Settings file schema.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MonitorError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml).
    Yaml,
    /// TOML format (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        trace!(extension = %ext, "Detecting config format from extension");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// User settings.
///
/// # Example TOML
///
/// ```toml
/// default_monitor = 1
/// strict_exit = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Monitor index used when a command omits `[monitor]`.
    pub default_monitor: i64,

    /// Exit non-zero when a command fails, not only when detection fails.
    pub strict_exit: bool,
}

impl Config {
    /// Validate field values.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::ConfigInvalid`] for a negative default monitor.
    pub fn validate(&self) -> Result<()> {
        if self.default_monitor < 0 {
            return Err(MonitorError::ConfigInvalid(format!(
                "default_monitor must be 0 or greater, got {}",
                self.default_monitor
            )));
        }
        Ok(())
    }
}
