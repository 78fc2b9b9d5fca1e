//! Integration tests for configuration files and transport selection.

use monctl::config::{self, Config, ConfigSource};
use monctl::device::{self, Backend};
use monctl::error::MonitorError;
use monctl::registry::DeviceRegistry;
use tempfile::TempDir;

use crate::common::env::{with_mock_displays, without_mock_displays};
use crate::common::init_test_logging;

#[test]
fn test_toml_and_yaml_are_equivalent() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let toml_path = dir.path().join("monctl.toml");
    let yaml_path = dir.path().join("monctl.yaml");
    std::fs::write(&toml_path, "default_monitor = 1\nstrict_exit = true\n").unwrap();
    std::fs::write(&yaml_path, "default_monitor: 1\nstrict_exit: true\n").unwrap();

    let from_toml = config::load_config(&toml_path).unwrap();
    let from_yaml = config::load_config(&yaml_path).unwrap();
    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_toml.default_monitor, 1);
    assert!(from_toml.strict_exit);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = config::load_effective(Some(&missing)).unwrap_err();
    assert!(matches!(err, MonitorError::ConfigNotFound { .. }));
    assert!(err.is_user_recoverable());
}

#[test]
fn test_explicit_file_is_reported_as_source() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("monctl.toml");
    std::fs::write(&path, "default_monitor = 3\n").unwrap();

    let loaded = config::load_effective(Some(&path)).unwrap();
    assert_eq!(loaded.source, ConfigSource::Explicit);
    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.config.default_monitor, 3);
    assert!(!loaded.config.strict_exit);
}

#[test]
fn test_saved_default_config_round_trips() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    config::save_config(&Config::default(), &path, false).unwrap();
    assert_eq!(config::load_config(&path).unwrap(), Config::default());

    let err = config::save_config(&Config::default(), &path, false).unwrap_err();
    assert!(matches!(err, MonitorError::ConfigExists { .. }));
    config::save_config(&Config::default(), &path, true).unwrap();
}

#[test]
fn test_mock_backend_reads_display_env() {
    init_test_logging();
    let _guard = with_mock_displays("10/20,unreadable");
    let transport = device::transport_for(Backend::Mock).unwrap();
    let registry = DeviceRegistry::load(transport.as_ref()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.devices()[1].descriptor().id, "mock-1");
}

#[test]
fn test_mock_backend_defaults_to_one_display() {
    init_test_logging();
    let _guard = without_mock_displays();
    let transport = device::transport_for(Backend::Mock).unwrap();
    let registry = DeviceRegistry::load(transport.as_ref()).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_malformed_mock_display_env_is_rejected() {
    init_test_logging();
    let _guard = with_mock_displays("75-50");
    let err = device::transport_for(Backend::Mock).err().unwrap();
    assert!(matches!(err, MonitorError::ConfigInvalid(_)));
}
