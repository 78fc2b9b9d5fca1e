//! Config file location helpers.
//!
//! Supports an explicit path (flag or environment), "~" home directory
//! expansion, and the per-user default location.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{MonitorError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MONCTL_CONFIG";

/// File name of the default config.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| MonitorError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }
    trace!(path = %path.display(), "Using path as-is");
    Ok(path.to_path_buf())
}

/// `<config_dir>/monctl/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("monctl").join(CONFIG_FILE_NAME))
}
