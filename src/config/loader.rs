//! Configuration loading from file system

use anyhow::Context as _;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::{Config, TableConfig};
use crate::error::KeytimeError;

/// Load configuration from ~/.keytime64/config.json
///
/// Returns Config::default() if the file is missing or cannot be parsed.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref());

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = ?e, path = %config_path.display(), "Failed to load config, using defaults");
            Config::default()
        }
    }
}

/// Read and parse a config file, reporting which step failed.
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str::<Config>(contents.trim())
        .with_context(|| format!("parsing {}", path.display()))?;
    validate_table(&config.table).with_context(|| format!("validating {}", path.display()))?;
    Ok(config)
}

/// Table geometry must be positive and finite or rows cannot be hit-tested.
fn validate_table(table: &TableConfig) -> Result<(), KeytimeError> {
    let fields = [
        ("columnWidth", table.column_width),
        ("rowHeight", table.row_height),
        ("headerHeight", table.header_height),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(KeytimeError::Config(format!(
                "table.{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}
