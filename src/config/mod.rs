//! Configuration module for monctl settings.
//!
//! Handles locating, loading, and writing the optional settings file.
//! Both TOML and YAML are accepted, chosen by file extension.

mod loader;
mod path;
mod schema;

pub use loader::{ConfigSource, LoadedConfig, load_config, load_config_from_str, load_effective, save_config};
pub use path::{CONFIG_ENV, default_config_path, expand_home, home_dir};
pub use schema::{Config, ConfigFormat};
