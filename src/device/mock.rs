//! Mock display implementation for testing.
//!
//! This module provides mock monitors that record every transport call and
//! can be told to fail, so controller behavior can be asserted without
//! hardware. Clones of a [`MockDisplay`] share state: keep one as a probe and
//! hand the other to the registry.
//!
//! # Example
//!
//! ```rust
//! use monctl::device::mock::{MockDisplay, MockTransport};
//! use monctl::device::Setting;
//!
//! let probe = MockDisplay::new(0).with_values(75, 50);
//! let transport = MockTransport::new(vec![probe.clone()]);
//! # let _ = transport;
//!
//! // ... run controller operations against a registry built from `transport` ...
//!
//! assert_eq!(probe.value(Setting::Brightness), 75);
//! assert!(probe.writes().is_empty());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::bail;
use tracing::{debug, trace};

use super::{BoxedHandle, DisplayDescriptor, DisplayHandle, Setting, Transport};
use crate::error::{MonitorError, Result};

/// Recorded transport call for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Acquire,
    Release,
    Read { setting: Setting },
    Write { setting: Setting, value: u16 },
}

/// How a mock display answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockBehavior {
    /// Reads and writes succeed
    #[default]
    Healthy,
    /// Reads fail, writes succeed
    Unreadable,
    /// Reads and writes fail
    Broken,
}

#[derive(Debug, Default)]
struct MockState {
    brightness: u16,
    contrast: u16,
    behavior: MockBehavior,
    failing_writes: Vec<Setting>,
    injected_error: Option<String>,
    acquired: bool,
    log: Vec<Operation>,
}

/// Mock monitor for testing without real hardware.
#[derive(Debug, Clone)]
pub struct MockDisplay {
    descriptor: DisplayDescriptor,
    state: Arc<Mutex<MockState>>,
}

impl MockDisplay {
    /// Create a healthy mock at 50/50 with an id derived from `n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        debug!(n, "Creating mock display");
        Self {
            descriptor: DisplayDescriptor::new(
                format!("mock-{n}"),
                format!("Mock Monitor {n}"),
                "mock",
            ),
            state: Arc::new(Mutex::new(MockState {
                brightness: 50,
                contrast: 50,
                ..MockState::default()
            })),
        }
    }

    // === Configuration ===

    /// Set the initial brightness and contrast.
    #[must_use]
    pub fn with_values(self, brightness: u16, contrast: u16) -> Self {
        {
            let mut state = self.state();
            state.brightness = brightness;
            state.contrast = contrast;
        }
        self
    }

    /// Set how the display answers.
    #[must_use]
    pub fn with_behavior(self, behavior: MockBehavior) -> Self {
        self.state().behavior = behavior;
        self
    }

    /// Make every write to `setting` fail.
    #[must_use]
    pub fn failing_write(self, setting: Setting) -> Self {
        self.state().failing_writes.push(setting);
        self
    }

    /// Inject an error for the next read or write.
    pub fn inject_error(&self, reason: &str) {
        self.state().injected_error = Some(reason.to_string());
    }

    // === Assertions ===

    /// Current stored value of `setting`.
    #[must_use]
    pub fn value(&self, setting: Setting) -> u16 {
        let state = self.state();
        match setting {
            Setting::Brightness => state.brightness,
            Setting::Contrast => state.contrast,
        }
    }

    /// All recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        self.state().log.clone()
    }

    /// Only the write operations, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(Setting, u16)> {
        self.state()
            .log
            .iter()
            .filter_map(|op| match *op {
                Operation::Write { setting, value } => Some((setting, value)),
                _ => None,
            })
            .collect()
    }

    /// True while a session holds the display.
    #[must_use]
    pub fn is_acquired(&self) -> bool {
        self.state().acquired
    }

    /// Number of acquire calls without a matching release.
    #[must_use]
    pub fn unreleased(&self) -> usize {
        let log = self.operations();
        let acquired = log.iter().filter(|op| **op == Operation::Acquire).count();
        let released = log.iter().filter(|op| **op == Operation::Release).count();
        acquired.saturating_sub(released)
    }

    /// Clear the operation log for fresh assertions.
    pub fn clear_operations(&self) {
        self.state().log.clear();
    }

    // === Internal Helpers ===

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplayHandle for MockDisplay {
    fn descriptor(&self) -> &DisplayDescriptor {
        &self.descriptor
    }

    fn acquire(&mut self) -> anyhow::Result<()> {
        let mut state = self.state();
        state.log.push(Operation::Acquire);
        if state.acquired {
            bail!("mock display {} acquired twice", self.descriptor.id);
        }
        state.acquired = true;
        Ok(())
    }

    fn release(&mut self) {
        let mut state = self.state();
        state.log.push(Operation::Release);
        state.acquired = false;
    }

    fn read(&mut self, setting: Setting) -> anyhow::Result<u16> {
        let mut state = self.state();
        state.log.push(Operation::Read { setting });
        trace!(id = %self.descriptor.id, %setting, "Mock read");
        if let Some(reason) = state.injected_error.take() {
            bail!(reason);
        }
        if state.behavior != MockBehavior::Healthy {
            bail!("mock display {} did not answer", self.descriptor.id);
        }
        Ok(match setting {
            Setting::Brightness => state.brightness,
            Setting::Contrast => state.contrast,
        })
    }

    fn write(&mut self, setting: Setting, value: u16) -> anyhow::Result<()> {
        let mut state = self.state();
        state.log.push(Operation::Write { setting, value });
        trace!(id = %self.descriptor.id, %setting, value, "Mock write");
        if let Some(reason) = state.injected_error.take() {
            bail!(reason);
        }
        if state.behavior == MockBehavior::Broken || state.failing_writes.contains(&setting) {
            bail!("mock display {} rejected {setting} write", self.descriptor.id);
        }
        match setting {
            Setting::Brightness => state.brightness = value,
            Setting::Contrast => state.contrast = value,
        }
        Ok(())
    }
}

/// Transport serving a fixed set of mock displays.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    displays: Vec<MockDisplay>,
    detection_error: Option<String>,
}

impl MockTransport {
    #[must_use]
    pub fn new(displays: Vec<MockDisplay>) -> Self {
        Self {
            displays,
            detection_error: None,
        }
    }

    /// A transport whose enumeration always fails.
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            displays: Vec::new(),
            detection_error: Some(reason.to_string()),
        }
    }

    /// Parse a display list such as `"75/50,unreadable,broken"`.
    ///
    /// Each entry is `B/C` for a healthy display with the given brightness and
    /// contrast, `unreadable`, or `broken`. The whole value `fail` makes
    /// enumeration fail and an empty value means no displays.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::ConfigInvalid`] for a malformed entry.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec == "fail" {
            return Ok(Self::failing("mock enumeration failure"));
        }
        let mut displays = Vec::new();
        for (n, entry) in spec.split(',').map(str::trim).filter(|e| !e.is_empty()).enumerate() {
            let display = MockDisplay::new(n);
            let display = match entry {
                "unreadable" => display.with_behavior(MockBehavior::Unreadable),
                "broken" => display.with_behavior(MockBehavior::Broken),
                values => {
                    let (b, c) = values
                        .split_once('/')
                        .and_then(|(b, c)| Some((b.parse().ok()?, c.parse().ok()?)))
                        .ok_or_else(|| {
                            MonitorError::ConfigInvalid(format!(
                                "Invalid mock display '{entry}': expected B/C, unreadable or broken"
                            ))
                        })?;
                    display.with_values(b, c)
                }
            };
            displays.push(display);
        }
        Ok(Self::new(displays))
    }

    /// Shared-state probe for display `n`.
    #[must_use]
    pub fn display(&self, n: usize) -> Option<MockDisplay> {
        self.displays.get(n).cloned()
    }
}

impl Transport for MockTransport {
    fn enumerate(&self) -> anyhow::Result<Vec<BoxedHandle>> {
        if let Some(reason) = &self.detection_error {
            bail!(reason.clone());
        }
        Ok(self
            .displays
            .iter()
            .cloned()
            .map(|d| Box::new(d) as BoxedHandle)
            .collect())
    }
}
