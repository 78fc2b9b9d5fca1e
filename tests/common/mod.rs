//! Common test utilities for monctl.
//!
//! - `cli`: runs the `monctl` binary against the mock backend
//! - `env`: serialized environment variable overrides
#![allow(dead_code)]

pub mod env;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
