//! monctl library - brightness and contrast control for DDC/CI monitors.
//!
//! This library exposes the core functionality of the `monctl` CLI for use in
//! tests and other front ends.
//!
//! # Modules
//!
//! - `device`: Transport abstraction (DDC/CI via `ddc-hi`, plus a mock)
//! - `registry`: Startup snapshot of detected monitors and scoped sessions
//! - `controller`: get/set/adjust/preset/list operations
//! - `dispatch`: Command to operation mapping
//! - `normalize`, `preset`: Value clamping and the preset catalog
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
//! - `config`: Configuration file handling
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod preset;
pub mod registry;
pub mod theme;
