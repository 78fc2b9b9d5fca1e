//! Brightness and contrast operations against registry devices.
//!
//! Every indexed operation resolves the monitor index before touching a
//! device, and every device interaction is one scoped session. Multi-step
//! operations (`apply_preset`, `list`) collect per-step outcomes instead of
//! stopping at the first failure.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::device::{DisplayDescriptor, DisplayHandle, Setting};
use crate::error::{MonitorError, Result};
use crate::normalize;
use crate::preset::{Preset, PresetCatalog};
use crate::registry::{DeviceRegistry, Session};

/// Brightness and contrast of one monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub brightness: u16,
    pub contrast: u16,
}

impl Settings {
    pub const fn get(&self, setting: Setting) -> u16 {
        match setting {
            Setting::Brightness => self.brightness,
            Setting::Contrast => self.contrast,
        }
    }
}

/// Result of a relative adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub setting: Setting,
    pub previous: u16,
    pub delta: i64,
    pub written: u16,
}

/// One write of a preset application.
#[derive(Debug)]
pub struct PresetStep {
    pub setting: Setting,
    pub value: u16,
    pub result: Result<u16>,
}

impl PresetStep {
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated outcome of applying a preset.
#[derive(Debug)]
pub struct PresetOutcome {
    pub index: i64,
    pub preset: Preset,
    pub steps: Vec<PresetStep>,
}

impl PresetOutcome {
    /// True only if every write succeeded.
    pub fn is_success(&self) -> bool {
        self.steps.iter().all(PresetStep::is_ok)
    }

    /// Errors of the failed steps, in order.
    pub fn errors(&self) -> impl Iterator<Item = &MonitorError> {
        self.steps.iter().filter_map(|s| s.result.as_ref().err())
    }
}

/// What `list` could read from one monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reading {
    Ok(Settings),
    Unreadable { reason: String },
}

/// One row of `list`.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub index: usize,
    pub descriptor: DisplayDescriptor,
    pub reading: Reading,
}

/// Orchestrates get/set/adjust/preset/list over a registry snapshot.
#[derive(Debug, Clone, Copy)]
pub struct DeviceController<'r> {
    registry: &'r DeviceRegistry,
    presets: PresetCatalog,
}

impl<'r> DeviceController<'r> {
    pub const fn new(registry: &'r DeviceRegistry) -> Self {
        Self {
            registry,
            presets: PresetCatalog,
        }
    }

    pub const fn registry(&self) -> &'r DeviceRegistry {
        self.registry
    }

    /// Read brightness and contrast in one session. No partial result.
    #[instrument(skip(self))]
    pub fn get(&self, index: i64) -> Result<Settings> {
        let device = self.registry.device(index)?;
        let settings = device.with_session(|s| {
            Ok(Settings {
                brightness: read_in(s, Setting::Brightness)?,
                contrast: read_in(s, Setting::Contrast)?,
            })
        })?;
        debug!(index, ?settings, "Read settings");
        Ok(settings)
    }

    /// Read a single setting.
    #[instrument(skip(self))]
    pub fn read(&self, index: i64, setting: Setting) -> Result<u16> {
        let device = self.registry.device(index)?;
        device.with_session(|s| read_in(s, setting))
    }

    /// Clamp `value` to 0-100 and write it. Returns the value written.
    #[instrument(skip(self))]
    pub fn set(&self, index: i64, setting: Setting, value: i64) -> Result<u16> {
        let device = self.registry.device(index)?;
        let value = normalize::normalize(value);
        device.with_session(|s| write_in(s, setting, value))?;
        info!(index, %setting, value, "Set monitor {index} {setting} to {value}%");
        Ok(value)
    }

    /// Read `setting`, add `delta` with saturation, write the result.
    ///
    /// A failed read aborts before any write is attempted.
    #[instrument(skip(self))]
    pub fn adjust(&self, index: i64, setting: Setting, delta: i64) -> Result<Adjustment> {
        let previous = self.read(index, setting)?;
        let target = normalize::apply_delta(previous, delta);
        let written = self.set(index, setting, i64::from(target))?;
        Ok(Adjustment {
            setting,
            previous,
            delta,
            written,
        })
    }

    /// Write a preset's brightness, then its contrast.
    ///
    /// An unknown name or invalid index fails before any write. Otherwise
    /// both writes are attempted regardless of each other and the outcome
    /// holds both results.
    #[instrument(skip(self))]
    pub fn apply_preset(&self, index: i64, name: &str) -> Result<PresetOutcome> {
        let preset = self.presets.resolve(name)?;
        self.registry.device(index)?;

        let steps: Vec<PresetStep> = [
            (Setting::Brightness, preset.brightness),
            (Setting::Contrast, preset.contrast),
        ]
        .into_iter()
        .map(|(setting, value)| PresetStep {
            setting,
            value,
            result: self.set(index, setting, i64::from(value)),
        })
        .collect();

        let outcome = PresetOutcome {
            index,
            preset,
            steps,
        };
        if outcome.is_success() {
            info!(index, preset = preset.name, "Applied '{}' preset to monitor {index}", preset.name);
        } else {
            warn!(
                index,
                preset = preset.name,
                failed = outcome.errors().count(),
                "Preset applied partially"
            );
        }
        Ok(outcome)
    }

    /// Every device with its current settings, or why they could not be read.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<ListEntry> {
        self.registry
            .devices()
            .iter()
            .map(|device| {
                let read = device.with_session(|s| {
                    Ok(Settings {
                        brightness: read_in(s, Setting::Brightness)?,
                        contrast: read_in(s, Setting::Contrast)?,
                    })
                });
                let reading = match read {
                    Ok(settings) => Reading::Ok(settings),
                    Err(err) => {
                        warn!(index = device.index(), error = %err, "Error reading settings");
                        Reading::Unreadable {
                            reason: err.to_string(),
                        }
                    }
                };
                ListEntry {
                    index: device.index(),
                    descriptor: device.descriptor().clone(),
                    reading,
                }
            })
            .collect()
    }
}

fn read_in(session: &mut Session<'_>, setting: Setting) -> Result<u16> {
    let index = session.index();
    session
        .handle()
        .read(setting)
        .map_err(|e| MonitorError::Read {
            index,
            setting,
            reason: e.to_string(),
        })
}

fn write_in(session: &mut Session<'_>, setting: Setting, value: u16) -> Result<()> {
    let index = session.index();
    session
        .handle()
        .write(setting, value)
        .map_err(|e| MonitorError::Write {
            index,
            setting,
            value,
            reason: e.to_string(),
        })
}
