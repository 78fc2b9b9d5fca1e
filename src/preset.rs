//! Built-in brightness/contrast presets.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{MonitorError, Result};

/// A named brightness/contrast pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub brightness: u16,
    pub contrast: u16,
}

const fn preset(name: &'static str, brightness: u16, contrast: u16) -> Preset {
    Preset {
        name,
        brightness,
        contrast,
    }
}

/// The fixed catalog, in display order.
pub const PRESETS: [Preset; 9] = [
    preset("bright", 90, 75),
    preset("normal", 50, 50),
    preset("dim", 20, 40),
    preset("night", 15, 30),
    preset("gaming", 70, 80),
    preset("reading", 40, 60),
    preset("set-30", 30, 30),
    preset("set-40", 40, 40),
    preset("set-75", 75, 75),
];

/// Lookup over [`PRESETS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCatalog;

impl PresetCatalog {
    /// All presets in catalog order.
    pub const fn all(self) -> &'static [Preset] {
        &PRESETS
    }

    /// Preset names in catalog order.
    pub fn names(self) -> Vec<&'static str> {
        PRESETS.iter().map(|p| p.name).collect()
    }

    /// Resolve a preset by exact name.
    pub fn resolve(self, name: &str) -> Result<Preset> {
        trace!(name, "Resolving preset");
        let found = PRESETS.iter().find(|p| p.name == name).copied();
        match found {
            Some(p) => {
                debug!(name, brightness = p.brightness, contrast = p.contrast, "Preset resolved");
                Ok(p)
            }
            None => Err(MonitorError::UnknownPreset {
                name: name.to_string(),
                available: self.names(),
            }),
        }
    }
}
