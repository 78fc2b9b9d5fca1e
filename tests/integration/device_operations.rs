//! Integration tests for controller operations using MockDisplay.
//!
//! Tests verify that registry, sessions and controller work together,
//! including error handling, session release, and edge cases.

use monctl::controller::{DeviceController, Reading, Settings};
use monctl::device::mock::{MockBehavior, MockDisplay, MockTransport, Operation};
use monctl::device::Setting;
use monctl::error::MonitorError;
use monctl::registry::DeviceRegistry;

use crate::common::init_test_logging;

fn registry(displays: &[MockDisplay]) -> DeviceRegistry {
    DeviceRegistry::load(&MockTransport::new(displays.to_vec())).unwrap()
}

/// Clamping happens before any write reaches the display.
#[test]
fn test_set_clamps_to_percent_range() {
    init_test_logging();
    let probe = MockDisplay::new(0);
    let registry = registry(&[probe.clone()]);
    let controller = DeviceController::new(&registry);

    assert_eq!(controller.set(0, Setting::Brightness, 150).unwrap(), 100);
    assert_eq!(controller.set(0, Setting::Brightness, -20).unwrap(), 0);
    assert_eq!(controller.set(0, Setting::Brightness, 57).unwrap(), 57);
    assert_eq!(probe.value(Setting::Brightness), 57);
}

/// Each device step runs in its own session, released before the next.
#[test]
fn test_sessions_wrap_each_step() {
    init_test_logging();
    let probe = MockDisplay::new(0).with_values(60, 40);
    let registry = registry(&[probe.clone()]);
    let controller = DeviceController::new(&registry);

    controller.adjust(0, Setting::Contrast, 5).unwrap();
    assert_eq!(
        probe.operations(),
        vec![
            Operation::Acquire,
            Operation::Read {
                setting: Setting::Contrast
            },
            Operation::Release,
            Operation::Acquire,
            Operation::Write {
                setting: Setting::Contrast,
                value: 45
            },
            Operation::Release,
        ]
    );

    probe.clear_operations();
    controller.apply_preset(0, "dim").unwrap();
    let ops = probe.operations();
    assert_eq!(ops.first(), Some(&Operation::Acquire));
    assert_eq!(ops.last(), Some(&Operation::Release));
    assert_eq!(probe.unreleased(), 0);
    assert!(!probe.is_acquired());
}

/// A one-shot transport error fails only the operation it hits.
#[test]
fn test_injected_error_is_recovered_per_operation() {
    init_test_logging();
    let probe = MockDisplay::new(0).with_values(30, 30);
    let registry = registry(&[probe.clone()]);
    let controller = DeviceController::new(&registry);

    probe.inject_error("bus timeout");
    let err = controller.get(0).unwrap_err();
    assert!(matches!(err, MonitorError::Read { .. }));
    assert!(err.to_string().contains("bus timeout"));

    assert_eq!(
        controller.get(0).unwrap(),
        Settings {
            brightness: 30,
            contrast: 30
        }
    );
    assert_eq!(probe.unreleased(), 0);
}

/// Indices outside the snapshot never reach a display.
#[test]
fn test_index_validation_across_operations() {
    init_test_logging();
    let a = MockDisplay::new(0);
    let b = MockDisplay::new(1);
    let registry = registry(&[a.clone(), b.clone()]);
    let controller = DeviceController::new(&registry);

    assert!(registry.validate_index(0));
    assert!(registry.validate_index(1));
    assert!(!registry.validate_index(2));
    assert!(!registry.validate_index(-1));

    let err = controller.adjust(2, Setting::Brightness, 10).unwrap_err();
    assert_eq!(err.to_string(), "Invalid monitor index 2. Available: 0-1");
    assert!(matches!(
        controller.get(-1),
        Err(MonitorError::InvalidIndex { index: -1, count: 2 })
    ));
    assert!(a.operations().is_empty());
    assert!(b.operations().is_empty());
}

/// Operations on an empty snapshot report no devices.
#[test]
fn test_empty_registry_reports_no_devices() {
    init_test_logging();
    let registry = registry(&[]);
    let controller = DeviceController::new(&registry);

    assert!(registry.is_empty());
    assert!(matches!(controller.get(0), Err(MonitorError::NoDevices)));
    assert!(matches!(
        controller.apply_preset(0, "normal"),
        Err(MonitorError::NoDevices)
    ));
    assert!(controller.list().is_empty());
}

/// A broken display fails both preset writes but both are attempted.
#[test]
fn test_preset_on_broken_display_attempts_both_writes() {
    init_test_logging();
    let probe = MockDisplay::new(0).with_behavior(MockBehavior::Broken);
    let registry = registry(&[probe.clone()]);
    let outcome = DeviceController::new(&registry)
        .apply_preset(0, "bright")
        .unwrap();

    assert!(!outcome.is_success());
    assert_eq!(outcome.errors().count(), 2);
    assert_eq!(
        probe.writes(),
        vec![(Setting::Brightness, 90), (Setting::Contrast, 75)]
    );
    assert_eq!(probe.unreleased(), 0);
}

/// `list` keeps going past unreadable and broken displays.
#[test]
fn test_list_is_best_effort() {
    init_test_logging();
    let transport = MockTransport::from_spec("80/70,unreadable,broken,20/10").unwrap();
    let registry = DeviceRegistry::load(&transport).unwrap();
    let entries = DeviceController::new(&registry).list();

    assert_eq!(entries.len(), 4);
    let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(
        entries[0].reading,
        Reading::Ok(Settings {
            brightness: 80,
            contrast: 70
        })
    );
    assert!(matches!(entries[1].reading, Reading::Unreadable { .. }));
    assert!(matches!(entries[2].reading, Reading::Unreadable { .. }));
    assert_eq!(
        entries[3].reading,
        Reading::Ok(Settings {
            brightness: 20,
            contrast: 10
        })
    );

    for n in 0..4 {
        assert_eq!(transport.display(n).unwrap().unreleased(), 0);
    }
}

/// Detection failure is fatal and distinct from finding nothing.
#[test]
fn test_detection_failure() {
    init_test_logging();
    let err = DeviceRegistry::load(&MockTransport::failing("no i2c bus")).unwrap_err();
    assert!(matches!(err, MonitorError::Detection { .. }));
    assert_eq!(err.to_string(), "Error detecting monitors: no i2c bus");
}
