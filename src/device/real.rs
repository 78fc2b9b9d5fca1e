//! Real DDC/CI transport.
//!
//! This module wraps the `ddc-hi` crate to provide the concrete display
//! implementation.

use ddc_hi::{Ddc, Display};
use tracing::{debug, trace, warn};

use super::{BoxedHandle, DisplayDescriptor, DisplayHandle, Setting, Transport};

/// Transport that enumerates monitors through `ddc-hi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdcTransport;

impl Transport for DdcTransport {
    fn enumerate(&self) -> anyhow::Result<Vec<BoxedHandle>> {
        debug!("Enumerating DDC/CI displays");
        let displays: Vec<BoxedHandle> = Display::enumerate()
            .into_iter()
            .map(|display| Box::new(DdcDisplay::new(display)) as BoxedHandle)
            .collect();
        debug!(count = displays.len(), "DDC/CI enumeration finished");
        Ok(displays)
    }
}

/// A monitor reachable over DDC/CI.
pub struct DdcDisplay {
    display: Display,
    descriptor: DisplayDescriptor,
}

impl DdcDisplay {
    fn new(display: Display) -> Self {
        let info = &display.info;
        let name = info
            .model_name
            .clone()
            .or_else(|| {
                info.manufacturer_id
                    .as_ref()
                    .map(|m| format!("{m} {:04x}", info.model_id.unwrap_or_default()))
            })
            .unwrap_or_default();
        if name.is_empty() {
            warn!(id = %info.id, "Display did not report a model name");
        }
        let descriptor =
            DisplayDescriptor::new(info.id.clone(), name, format!("{:?}", info.backend));
        Self {
            display,
            descriptor,
        }
    }
}

impl DisplayHandle for DdcDisplay {
    fn descriptor(&self) -> &DisplayDescriptor {
        &self.descriptor
    }

    fn read(&mut self, setting: Setting) -> anyhow::Result<u16> {
        let value = self.display.handle.get_vcp_feature(setting.vcp_code())?;
        trace!(
            id = %self.descriptor.id,
            %setting,
            value = value.value(),
            maximum = value.maximum(),
            "VCP read"
        );
        Ok(value.value())
    }

    fn write(&mut self, setting: Setting, value: u16) -> anyhow::Result<()> {
        trace!(id = %self.descriptor.id, %setting, value, "VCP write");
        self.display
            .handle
            .set_vcp_feature(setting.vcp_code(), value)?;
        Ok(())
    }
}

impl std::fmt::Debug for DdcDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DdcDisplay({})", self.descriptor)
    }
}
