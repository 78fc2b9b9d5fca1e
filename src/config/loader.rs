//! Loading and saving the settings file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use super::path::{default_config_path, expand_home};
use super::schema::{Config, ConfigFormat};
use crate::error::{MonitorError, Result};

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// `--config` or `MONCTL_CONFIG`
    Explicit,
    /// The per-user default file
    DefaultFile,
    /// No file; built-in defaults
    BuiltIn,
}

/// Configuration plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Load the effective configuration.
///
/// An explicit path must exist. The default file is optional.
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or if any file found
/// cannot be read, parsed or validated.
#[instrument]
pub fn load_effective(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let path = expand_home(path)?;
        let config = load_config(&path)?;
        return Ok(LoadedConfig {
            config,
            path: Some(path),
            source: ConfigSource::Explicit,
        });
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            let config = load_config(&path)?;
            Ok(LoadedConfig {
                config,
                path: Some(path),
                source: ConfigSource::DefaultFile,
            })
        }
        other => {
            debug!(path = ?other, "No config file, using defaults");
            Ok(LoadedConfig {
                config: Config::default(),
                path: other,
                source: ConfigSource::BuiltIn,
            })
        }
    }
}

/// Load a configuration file, detecting the format from the extension.
///
/// # Errors
///
/// Returns an error if:
/// - The format cannot be detected from the extension
/// - The file cannot be read
/// - The file content cannot be parsed
/// - Validation fails
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    info!("Loading configuration file");

    let format = detect_format(path)?;
    debug!(format = ?format, "Detected config format");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MonitorError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            MonitorError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");

    load_config_from_str(&content, format)
}

/// Parse and validate configuration text.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
#[instrument(skip(content), fields(format = ?format, content_len = content.len()))]
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<Config> {
    trace!("Parsing config content");

    let config: Config = match format {
        ConfigFormat::Yaml if content.trim().is_empty() => Config::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| MonitorError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| MonitorError::ConfigParse(format!("TOML: {e}")))?
        }
    };

    config.validate()?;

    info!(
        default_monitor = config.default_monitor,
        strict_exit = config.strict_exit,
        "Configuration loaded and validated"
    );
    Ok(config)
}

/// Write `config` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`MonitorError::ConfigExists`] if the file exists and `force` is
/// false, or an error if serialization or writing fails.
#[instrument(skip(config), fields(path = %path.display()))]
pub fn save_config(config: &Config, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(MonitorError::ConfigExists {
            path: path.display().to_string(),
        });
    }

    let format = detect_format(path)?;
    let content = match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| MonitorError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| MonitorError::ConfigParse(format!("TOML: {e}")))?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    info!("Configuration saved");
    Ok(())
}

fn detect_format(path: &Path) -> Result<ConfigFormat> {
    ConfigFormat::from_extension(path).ok_or_else(|| {
        MonitorError::ConfigParse(format!(
            "Unknown config format for '{}': expected .yaml, .yml, or .toml",
            path.display()
        ))
    })
}
