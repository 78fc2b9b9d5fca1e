//! Process environment overrides for in-process tests.
//!
//! `env-lock` serializes every override, so hold at most one guard per test.

use env_lock::{EnvGuard, lock_env};
use monctl::device::MOCK_DISPLAYS_ENV;
use tracing::trace;

/// Set `MONCTL_MOCK_DISPLAYS` until the guard drops.
#[must_use]
pub fn with_mock_displays(spec: &str) -> EnvGuard<'static> {
    trace!(spec, "Overriding mock displays");
    lock_env([(MOCK_DISPLAYS_ENV, Some(spec))])
}

/// Unset `MONCTL_MOCK_DISPLAYS` until the guard drops.
#[must_use]
pub fn without_mock_displays() -> EnvGuard<'static> {
    trace!("Clearing mock displays");
    lock_env([(MOCK_DISPLAYS_ENV, None::<&str>)])
}
