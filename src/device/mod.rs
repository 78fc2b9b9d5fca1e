//! Transport abstraction over DDC/CI displays.
//!
//! This module provides a trait-based boundary between the control core and
//! the library that actually talks to monitors, with a real `ddc-hi`
//! implementation and a recording mock for tests and hardware-free runs.

mod info;
pub mod mock;
mod real;

pub use info::{DisplayDescriptor, Setting};
pub use real::DdcTransport;

use clap::ValueEnum;

/// One display handle owned by the transport library.
///
/// Handles are only ever driven from inside a registry session, which calls
/// [`acquire`](Self::acquire) before and [`release`](Self::release) after
/// every action.
pub trait DisplayHandle {
    /// Identity captured at enumeration time.
    fn descriptor(&self) -> &DisplayDescriptor;

    /// Prepare the handle for an action.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be opened.
    fn acquire(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Give the handle back after an action. Must not fail.
    fn release(&mut self) {}

    /// Read the current value of `setting`.
    ///
    /// # Errors
    ///
    /// Returns an error on any DDC/CI communication failure.
    fn read(&mut self, setting: Setting) -> anyhow::Result<u16>;

    /// Write `value` to `setting`.
    ///
    /// # Errors
    ///
    /// Returns an error on any DDC/CI communication failure.
    fn write(&mut self, setting: Setting, value: u16) -> anyhow::Result<()>;
}

/// Type alias for boxed trait object.
pub type BoxedHandle = Box<dyn DisplayHandle>;

/// Source of display handles, queried once at startup.
pub trait Transport {
    /// Enumerate every display currently reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration itself fails. Finding zero displays is
    /// not an error.
    fn enumerate(&self) -> anyhow::Result<Vec<BoxedHandle>>;
}

/// Transport selection for the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Real monitors via DDC/CI
    #[default]
    Ddc,
    /// Simulated monitors described by MONCTL_MOCK_DISPLAYS
    Mock,
}

/// Environment variable describing mock displays.
pub const MOCK_DISPLAYS_ENV: &str = "MONCTL_MOCK_DISPLAYS";

/// Build the transport for `backend`.
///
/// # Errors
///
/// Returns an error if the mock description cannot be parsed.
pub fn transport_for(backend: Backend) -> crate::error::Result<Box<dyn Transport>> {
    match backend {
        Backend::Ddc => Ok(Box::new(DdcTransport)),
        Backend::Mock => {
            let spec = std::env::var(MOCK_DISPLAYS_ENV).unwrap_or_else(|_| "50/50".to_string());
            Ok(Box::new(mock::MockTransport::from_spec(&spec)?))
        }
    }
}
