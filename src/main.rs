//! monctl - brightness and contrast control for DDC/CI monitors.
//!
//! Provides both human-friendly and script-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;

use clap::{CommandFactory, Parser};
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use monctl::cli::{Cli, Commands, ConfigArgs, InitArgs};
use monctl::config::{self, Config};
use monctl::controller::DeviceController;
use monctl::device;
use monctl::dispatch::{DeviceCommand, Dispatcher};
use monctl::error::{MonitorError, Result};
use monctl::logging;
use monctl::output::{BuildInfo, Output, OutputMode};
use monctl::preset::PresetCatalog;
use monctl::registry::DeviceRegistry;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mode = OutputMode::from_cli(&cli);
    logging::init_logging(mode.is_robot(), cli.verbose, cli.quiet);
    let output = mode.into_output();

    match run(&cli, output.as_ref()) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output.error(&e);
            std::process::exit(1);
        }
    }
}

/// Run the selected command and return the process exit code.
///
/// Errors returned here are fatal (detection, configuration); failures of a
/// monitor command are rendered by the dispatcher and mapped to an exit code
/// by the strict-exit policy.
fn run(cli: &Cli, output: &dyn Output) -> Result<i32> {
    let Some(command) = &cli.command else {
        print_quick_start(cli);
        return Ok(0);
    };

    if let Some(device_command) = command.device_command() {
        return run_device_command(cli, &device_command, output);
    }

    match command {
        Commands::Presets => output.preset_catalog(PresetCatalog.all()),
        Commands::Config(args) => cmd_config(cli, args, output)?,
        Commands::Init(args) => cmd_init(cli, args, output)?,
        Commands::Version => output.version_info(&BuildInfo::current()),
        Commands::Completions(args) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "monctl", &mut io::stdout());
        }
        _ => {}
    }
    Ok(0)
}

fn run_device_command(cli: &Cli, command: &DeviceCommand, output: &dyn Output) -> Result<i32> {
    let loaded = config::load_effective(cli.config.as_deref())?;
    let strict = cli.strict || loaded.config.strict_exit;

    let transport = device::transport_for(cli.backend)?;
    let registry = DeviceRegistry::load(transport.as_ref())?;
    let controller = DeviceController::new(&registry);

    let report = Dispatcher::new(&controller, output, loaded.config.default_monitor).run(command);
    debug!(ok = report.ok, strict, "Device command complete");

    Ok(if report.ok || !strict { 0 } else { 1 })
}

fn cmd_config(cli: &Cli, args: &ConfigArgs, output: &dyn Output) -> Result<()> {
    let loaded = config::load_effective(cli.config.as_deref())?;
    if args.path && !cli.use_json() {
        let path = loaded.path.as_ref().ok_or_else(|| {
            MonitorError::Other("Could not determine the configuration directory".to_string())
        })?;
        println!("{}", path.display());
        return Ok(());
    }
    output.config_info(&loaded);
    Ok(())
}

fn cmd_init(cli: &Cli, args: &InitArgs, output: &dyn Output) -> Result<()> {
    let path = match &cli.config {
        Some(path) => config::expand_home(path)?,
        None => config::default_config_path().ok_or_else(|| {
            MonitorError::Other("Could not determine the configuration directory".to_string())
        })?,
    };
    config::save_config(&Config::default(), &path, args.force)?;
    info!(path = %path.display(), "Wrote default configuration");
    output.config_written(&path);
    Ok(())
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: Vec<&'static str>,
    monitor_argument: &'static str,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

fn print_quick_start(cli: &Cli) {
    if cli.use_json() {
        let help = RobotQuickStart {
            tool: "monctl",
            version: env!("CARGO_PKG_VERSION"),
            description: "Brightness and contrast control for DDC/CI monitors",
            commands: vec![
                "monctl list",
                "monctl get [MONITOR]",
                "monctl brightness <0-100> [MONITOR]",
                "monctl contrast <0-100> [MONITOR]",
                "monctl preset <NAME> [MONITOR]",
                "monctl adjust-brightness <DELTA> [MONITOR]",
                "monctl adjust-contrast <DELTA> [MONITOR]",
                "monctl presets",
            ],
            monitor_argument: "0-based index from `monctl list`; defaults to default_monitor in config",
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        };
        let rendered = if cli.use_compact_json() {
            serde_json::to_string(&help)
        } else {
            serde_json::to_string_pretty(&help)
        };
        if let Ok(json) = rendered {
            println!("{json}");
        }
        return;
    }

    println!(
        "{} {} - DDC/CI monitor control\n",
        style("monctl").bold().cyan(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  List monitors", style("monctl list").green());
    println!("  {}  Show settings", style("monctl get 0").green());
    println!("  {}  Set brightness", style("monctl brightness 70").green());
    println!("  {}  Apply a preset", style("monctl preset reading").green());
    println!("  {}  Dim by 10", style("monctl adjust-brightness -10").green());
    println!("  {}  List presets", style("monctl presets").green());
    println!();
    println!("Run {} for full help", style("monctl --help").yellow());
}
