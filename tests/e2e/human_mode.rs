//! Human-mode end-to-end tests.

use predicates::prelude::*;
use predicates::str::contains;

use crate::common::cli::CliRunner;
use crate::common::init_test_logging;

#[test]
fn list_shows_values_and_unreadable_monitors() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("80/70,unreadable");
    cli.command(&["list"])
        .assert()
        .success()
        .stdout(contains("Detected 2 monitor(s):"))
        .stdout(contains("[0] Mock Monitor 0"))
        .stdout(contains("Brightness: 80%, Contrast: 70%"))
        .stdout(contains("[1] Mock Monitor 1"))
        .stdout(contains("Error reading settings:"));
}

#[test]
fn list_with_no_monitors() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("");
    cli.command(&["list"])
        .assert()
        .success()
        .stdout(contains("Detected 0 monitor(s):"));
}

#[test]
fn get_prints_both_settings() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("75/40");
    cli.command(&["get"])
        .assert()
        .success()
        .stdout(contains("Monitor 0 brightness: 75%"))
        .stdout(contains("Monitor 0 contrast: 40%"));
}

#[test]
fn brightness_and_contrast_confirm_writes() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("50/50,50/50");
    cli.command(&["brightness", "70", "1"])
        .assert()
        .success()
        .stdout(contains("Set monitor 1 brightness to 70%"));
    cli.command(&["contrast", "0"])
        .assert()
        .success()
        .stdout(contains("Set monitor 0 contrast to 0%"));
}

#[test]
fn preset_reading_writes_both_values() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["preset", "reading"])
        .assert()
        .success()
        .stdout(contains("Set monitor 0 brightness to 40%"))
        .stdout(contains("Set monitor 0 contrast to 60%"))
        .stdout(contains("Applied 'reading' preset to monitor 0"));
}

#[test]
fn adjust_saturates_at_100() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("95/50");
    cli.command(&["adjust-brightness", "20"])
        .assert()
        .success()
        .stdout(contains("95% -> 100%"));
}

#[test]
fn adjust_accepts_negative_delta() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("75/50");
    cli.command(&["adjust-brightness", "-10"])
        .assert()
        .success()
        .stdout(contains("75% -> 65%"));
}

#[test]
fn presets_lists_catalog() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["presets"])
        .assert()
        .success()
        .stdout(contains("reading"))
        .stdout(contains("set-75"));
}

#[test]
fn quiet_suppresses_confirmations() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["-q", "brightness", "70"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn errors_go_to_stderr_with_hint() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["get", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Invalid monitor index 5. Available: 0-0"))
        .stderr(contains("Hint: Run: monctl list"));
}

#[test]
fn unreadable_monitor_get_reports_read_error() {
    init_test_logging();
    let cli = CliRunner::new().with_displays("unreadable");
    cli.command(&["get"])
        .assert()
        .success()
        .stderr(contains("Error reading brightness from monitor 0"));
}

#[test]
fn no_command_prints_quick_start() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&[])
        .assert()
        .success()
        .stdout(contains("QUICK START"))
        .stdout(contains("monctl list"));
}

#[test]
fn output_has_no_ansi_when_piped() {
    init_test_logging();
    let cli = CliRunner::new();
    cli.command(&["list"])
        .assert()
        .success()
        .stdout(contains("\u{1b}[").not());
}
