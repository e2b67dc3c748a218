//! Configuration module - Application settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.keytime64/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! The configuration only tunes the UI and the key capture; entries are never
//! stored here.
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, TableConfig, CaptureConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{BUILTIN_WINDOW_DENYLIST, DEFAULT_CONFIG_PATH};

pub use types::{CaptureConfig, Config, TableConfig};

pub use loader::{load_config, load_config_from};

#[cfg(test)]
pub use defaults::{
    DEFAULT_CAPTURE_POLL_INTERVAL_MS, DEFAULT_COLUMN_WIDTH, DEFAULT_HEADER_HEIGHT,
    DEFAULT_ROW_HEIGHT,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
