//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::device::{Backend, Setting};
use crate::dispatch::DeviceCommand;

/// monctl - brightness and contrast control for DDC/CI monitors.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "monctl", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "MONCTL_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress confirmations and non-error logs)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to a config file (TOML or YAML)
    #[arg(long, short = 'c', global = true, env = "MONCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when a command fails
    #[arg(long, global = true)]
    pub strict: bool,

    /// Display transport
    #[arg(
        long,
        global = true,
        hide = true,
        default_value = "ddc",
        env = "MONCTL_BACKEND"
    )]
    pub backend: Backend,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Monitor Discovery ===
    /// List detected monitors with their current settings
    List,

    /// Show brightness and contrast of a monitor
    Get(MonitorArgs),

    // === Monitor Control ===
    /// Set brightness (0-100)
    Brightness(SetArgs),

    /// Set contrast (0-100)
    Contrast(SetArgs),

    /// Apply a named preset
    Preset(PresetArgs),

    /// Change brightness by a relative amount
    AdjustBrightness(AdjustArgs),

    /// Change contrast by a relative amount
    AdjustContrast(AdjustArgs),

    /// List available presets
    Presets,

    // === Configuration ===
    /// Show the effective configuration
    Config(ConfigArgs),

    /// Write a default configuration file
    Init(InitArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// The monitor operation for this command, if it touches monitors.
    #[must_use]
    pub fn device_command(&self) -> Option<DeviceCommand> {
        let command = match self {
            Self::List => DeviceCommand::List,
            Self::Get(args) => DeviceCommand::Get {
                monitor: args.monitor,
            },
            Self::Brightness(args) => DeviceCommand::Set {
                setting: Setting::Brightness,
                value: i64::from(args.value),
                monitor: args.monitor,
            },
            Self::Contrast(args) => DeviceCommand::Set {
                setting: Setting::Contrast,
                value: i64::from(args.value),
                monitor: args.monitor,
            },
            Self::Preset(args) => DeviceCommand::Preset {
                name: args.name.clone(),
                monitor: args.monitor,
            },
            Self::AdjustBrightness(args) => DeviceCommand::Adjust {
                setting: Setting::Brightness,
                delta: args.delta,
                monitor: args.monitor,
            },
            Self::AdjustContrast(args) => DeviceCommand::Adjust {
                setting: Setting::Contrast,
                delta: args.delta,
                monitor: args.monitor,
            },
            Self::Presets
            | Self::Config(_)
            | Self::Init(_)
            | Self::Version
            | Self::Completions(_) => return None,
        };
        Some(command)
    }
}

// === Argument Structs ===

#[derive(Parser, Debug)]
pub struct MonitorArgs {
    /// Monitor index (defaults to the configured default monitor)
    #[arg(allow_negative_numbers = true)]
    pub monitor: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Level in percent (0-100)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub value: u8,

    /// Monitor index (defaults to the configured default monitor)
    #[arg(allow_negative_numbers = true)]
    pub monitor: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Preset name (see `monctl presets`)
    pub name: String,

    /// Monitor index (defaults to the configured default monitor)
    #[arg(allow_negative_numbers = true)]
    pub monitor: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct AdjustArgs {
    /// Amount to add (negative to decrease)
    #[arg(allow_negative_numbers = true)]
    pub delta: i64,

    /// Monitor index (defaults to the configured default monitor)
    #[arg(allow_negative_numbers = true)]
    pub monitor: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Only print the configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
