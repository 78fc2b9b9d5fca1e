//! Exit codes, configuration and environment variable behavior.

use predicates::str::contains;

use crate::common::cli::{CliRunner, parse_json};
use crate::common::init_test_logging;

#[test]
fn command_failure_exits_zero_by_default() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["brightness", "50", "3"]).assert().code(0);
    cli.command(&["get", "-1"])
        .assert()
        .code(0)
        .stderr(contains("Invalid monitor index -1"));
}

#[test]
fn strict_flag_makes_failures_exit_one() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["--strict", "brightness", "50", "3"])
        .assert()
        .code(1);
    cli.command(&["--strict", "brightness", "50", "0"])
        .assert()
        .code(0);
}

#[test]
fn strict_exit_from_config_file() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.write_default_config("strict_exit = true\n");
    cli.command(&["preset", "ultra"])
        .assert()
        .code(1)
        .stderr(contains("Unknown preset 'ultra'"));
}

#[test]
fn default_monitor_from_config_file() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("10/10,20/20");
    cli.write_default_config("default_monitor = 1\n");
    cli.command(&["get"])
        .assert()
        .success()
        .stdout(contains("Monitor 1 brightness: 20%"));
}

#[test]
fn detection_failure_exits_one() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("fail");
    cli.command(&["list"])
        .assert()
        .code(1)
        .stderr(contains("Error detecting monitors"));
}

#[test]
fn no_monitors_is_reported_distinctly() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("");
    cli.command(&["get"])
        .assert()
        .code(0)
        .stderr(contains("No monitors detected"));
}

#[test]
fn out_of_range_level_is_a_usage_error() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["brightness", "101"]).assert().code(2);
    cli.command(&["contrast", "bright"]).assert().code(2);
}

#[test]
fn missing_explicit_config_exits_one() {
    init_test_logging();
    let cli = CliRunner::new();
    let missing = cli.home_path("missing.toml");
    cli.command(&["--config", missing.to_str().unwrap(), "list"])
        .assert()
        .code(1)
        .stderr(contains("Configuration file not found"));
}

#[test]
fn init_writes_default_config_once() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["init"]).assert().success();
    assert!(cli.default_config_path().is_file());

    cli.command(&["init"])
        .assert()
        .code(1)
        .stderr(contains("already exists"));
    cli.command(&["init", "--force"]).assert().success();
}

#[test]
fn config_reports_effective_values() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.write_default_config("default_monitor = 2\n");

    let json = cli.robot_json(&["config"]);
    assert_eq!(json["config"]["default_monitor"], 2);
    assert_eq!(json["config"]["strict_exit"], false);
    assert_eq!(json["source"], "default_file");

    cli.command(&["config", "--path"])
        .assert()
        .success()
        .stdout(contains("config.toml"));
}

#[test]
fn monctl_config_env_selects_file() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("10/10,20/20,30/30");
    let path = cli.home_path("custom.yaml");
    std::fs::write(&path, "default_monitor: 2\n").unwrap();

    let cli = cli.with_env(monctl::config::CONFIG_ENV, path.to_str().unwrap());
    cli.command(&["get"])
        .assert()
        .success()
        .stdout(contains("Monitor 2 brightness: 30%"));
}

#[test]
fn monctl_format_env_sets_json_output() {
    init_test_logging();
    let cli = CliRunner::new().with_env("MONCTL_FORMAT", "json");
    let output = cli.command(&["version"]).output().unwrap();
    let json = parse_json(&String::from_utf8_lossy(&output.stdout));
    assert!(json.get("version").is_some());
}

#[test]
fn format_flag_overrides_env() {
    init_test_logging();
    let cli = CliRunner::new().with_env("MONCTL_FORMAT", "json");
    let output = cli.command(&["version", "--format=text"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(serde_json::from_str::<serde_json::Value>(stdout.trim()).is_err());
    assert!(stdout.starts_with("monctl "));
}

#[test]
fn completions_are_generated() {
    init_test_logging();
    CliRunner::new()
        .command(&["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("monctl"));
}
