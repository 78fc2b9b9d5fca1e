//! Display information types shared by all transports.

use std::fmt;

use serde::Serialize;

/// A monitor setting controllable over DDC/CI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    /// Luminance, VCP feature 0x10
    Brightness,
    /// Contrast, VCP feature 0x12
    Contrast,
}

impl Setting {
    /// Both settings in the order they are read and written.
    pub const ALL: [Self; 2] = [Self::Brightness, Self::Contrast];

    /// MCCS VCP feature code for this setting.
    #[must_use]
    pub const fn vcp_code(self) -> u8 {
        match self {
            Self::Brightness => 0x10,
            Self::Contrast => 0x12,
        }
    }

    /// Lowercase name used in messages and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable identity of a detected display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDescriptor {
    /// Transport-specific identifier (e.g. the I2C bus)
    pub id: String,
    /// Model name reported by the monitor, if any
    pub name: String,
    /// Transport backend that found the display
    pub backend: String,
}

impl DisplayDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            backend: backend.into(),
        }
    }
}

impl fmt::Display for DisplayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} ({})", self.id, self.backend)
        } else {
            write!(f, "{} [{}:{}]", self.name, self.backend, self.id)
        }
    }
}
