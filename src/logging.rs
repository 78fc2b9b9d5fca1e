//! Structured logging initialization for monctl.
//!
//! Logs always go to stderr so stdout stays reserved for command output.

use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Filter directive for the given verbosity flags.
///
/// Warnings are shown by default so per-monitor read failures during `list`
/// reach the user without any flags.
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "monctl=error";
    }
    match verbose {
        0 => "monctl=warn",
        1 => "monctl=info",
        2 => "monctl=debug",
        _ => "monctl=trace",
    }
}

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Arguments
///
/// * `robot_mode` - If true, output structured JSON logs for machine consumption
/// * `verbose` - Verbosity level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
/// * `quiet` - If true, only errors are logged
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "monctl=debug")
///
/// # Output Behavior
///
/// | Mode | TTY | Output |
/// |------|-----|--------|
/// | Robot | any | JSON lines to stderr |
/// | Human | yes | Pretty colored output to stderr |
/// | Human | no | Compact plain output to stderr |
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // Exactly one of the three layers is active.
    let json_layer = robot_mode.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .with_writer(io::stderr)
    });
    let terminal = !robot_mode && io::stderr().is_terminal();
    let pretty_layer = terminal.then(|| {
        fmt::layer()
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(io::stderr)
    });
    let plain_layer = (!robot_mode && !terminal).then(|| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .with(plain_layer)
        .init();
}
