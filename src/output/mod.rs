//! Output mode abstraction for robot and human output.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cli::Cli;
use crate::config::LoadedConfig;
use crate::controller::{Adjustment, ListEntry, PresetOutcome, Settings};
use crate::device::Setting;
use crate::error::MonitorError;
use crate::preset::Preset;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human { quiet: bool },
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human { quiet: cli.quiet }
        }
    }

    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { quiet } => Box::new(HumanOutput::new(quiet)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Basic messages
    fn success(&self, message: &str);
    fn error(&self, error: &MonitorError);
    fn warning(&self, message: &str);

    // Monitor operations
    fn monitor_list(&self, entries: &[ListEntry], captured_at: DateTime<Utc>);
    fn settings(&self, index: i64, settings: &Settings);
    fn setting_written(&self, index: i64, setting: Setting, value: u16);
    fn adjusted(&self, index: i64, adjustment: &Adjustment);
    fn preset_applied(&self, outcome: &PresetOutcome);
    fn preset_catalog(&self, presets: &[Preset]);

    // Configuration
    fn config_info(&self, loaded: &LoadedConfig);
    fn config_written(&self, path: &Path);

    // Metadata
    fn version_info(&self, info: &BuildInfo);
}

/// Build information embedded at compile time.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}

impl BuildInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_sha: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
            git_dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
            rustc_version: option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown"),
        }
    }
}
