//! Startup snapshot of detected displays.
//!
//! The registry is built once from a [`Transport`] and never refreshed. Every
//! device interaction goes through [`Device::with_session`], which acquires
//! the handle, runs one action and releases the handle on every exit path.

use std::cell::{RefCell, RefMut};

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::device::{BoxedHandle, DisplayDescriptor, DisplayHandle, Transport};
use crate::error::{MonitorError, Result, ResultExt};

/// A detected display and its ordinal position in the snapshot.
pub struct Device {
    index: usize,
    descriptor: DisplayDescriptor,
    handle: RefCell<BoxedHandle>,
}

impl Device {
    /// Zero-based position in the registry.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn descriptor(&self) -> &DisplayDescriptor {
        &self.descriptor
    }

    /// Run `action` with exclusive access to the display handle.
    ///
    /// The handle is released when the session is dropped, whether `action`
    /// succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::DeviceBusy`] if a session is already open on
    /// this device, the transport error if the handle cannot be acquired, or
    /// whatever `action` returns.
    pub fn with_session<T>(
        &self,
        action: impl FnOnce(&mut Session<'_>) -> Result<T>,
    ) -> Result<T> {
        let mut session = self.open_session()?;
        action(&mut session)
    }

    fn open_session(&self) -> Result<Session<'_>> {
        let mut handle = self
            .handle
            .try_borrow_mut()
            .map_err(|_| MonitorError::DeviceBusy { index: self.index })?;
        handle
            .acquire()
            .with_context(|| format!("Failed to open monitor {}", self.index))?;
        debug!(index = self.index, "Session acquired");
        Ok(Session {
            index: self.index,
            handle,
        })
    }
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("index", &self.index)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Exclusive, scoped access to one display handle.
pub struct Session<'a> {
    index: usize,
    handle: RefMut<'a, BoxedHandle>,
}

impl Session<'_> {
    /// Index of the device this session belongs to.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The underlying transport handle.
    pub fn handle(&mut self) -> &mut BoxedHandle {
        &mut self.handle
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.handle.release();
        debug!(index = self.index, "Session released");
    }
}

/// Immutable ordered snapshot of the displays found at startup.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
    captured_at: DateTime<Utc>,
}

impl DeviceRegistry {
    /// Enumerate displays once through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Detection`] if enumeration fails. Zero displays
    /// is a valid registry.
    #[instrument(skip(transport))]
    pub fn load(transport: &dyn Transport) -> Result<Self> {
        let handles = transport
            .enumerate()
            .map_err(|e| MonitorError::Detection {
                reason: e.to_string(),
            })?;
        let registry = Self::from_handles(handles);
        info!(count = registry.len(), "Found {} monitor(s)", registry.len());
        for device in &registry.devices {
            info!(index = device.index, "Monitor {}: {}", device.index, device.descriptor);
        }
        Ok(registry)
    }

    /// Build a registry directly from handles, in the given order.
    pub fn from_handles(handles: Vec<BoxedHandle>) -> Self {
        let devices = handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| Device {
                index,
                descriptor: handle.descriptor().clone(),
                handle: RefCell::new(handle),
            })
            .collect();
        Self {
            devices,
            captured_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// When the snapshot was taken.
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// All devices in index order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// True iff `index` names a device. Logs why when it does not.
    pub fn validate_index(&self, index: i64) -> bool {
        match self.check(index) {
            Ok(_) => true,
            Err(err) => {
                warn!(index, count = self.len(), "{err}");
                false
            }
        }
    }

    /// Resolve `index` to a device.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::NoDevices`] for an empty registry and
    /// [`MonitorError::InvalidIndex`] for an out-of-range index.
    pub fn device(&self, index: i64) -> Result<&Device> {
        self.check(index).inspect_err(|err| {
            debug!(index, count = self.len(), error = %err, "Rejected monitor index");
        })
    }

    fn check(&self, index: i64) -> Result<&Device> {
        if self.devices.is_empty() {
            return Err(MonitorError::NoDevices);
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| self.devices.get(i))
            .ok_or(MonitorError::InvalidIndex {
                index,
                count: self.devices.len(),
            })
    }
}
