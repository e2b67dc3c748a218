//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults::*;

// ============================================
// TABLE CONFIG
// ============================================

/// Geometry of the entry table in the main window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Width of each of the five columns (default: 100)
    #[serde(default = "default_column_width")]
    pub column_width: f32,
    /// Height of one row (default: 24)
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    /// Height of the column header band (default: 28)
    #[serde(default = "default_header_height")]
    pub header_height: f32,
}

fn default_column_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}
fn default_row_height() -> f32 {
    DEFAULT_ROW_HEIGHT
}
fn default_header_height() -> f32 {
    DEFAULT_HEADER_HEIGHT
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

// ============================================
// CAPTURE CONFIG
// ============================================

/// Settings for the key capture driven from the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// Milliseconds between keyboard samples (default: 10)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Give up after this many milliseconds (None = wait for Escape forever)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_CAPTURE_POLL_INTERVAL_MS
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            poll_interval_ms: DEFAULT_CAPTURE_POLL_INTERVAL_MS,
            timeout_ms: None,
        }
    }
}

impl CaptureConfig {
    /// Poll interval, clamped to at least one millisecond
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Extra window titles to hide from the window selector.
    /// The built-in denylist always applies on top of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub window_denylist: Vec<String>,
}

impl Config {
    /// Built-in denylist followed by user additions, without duplicates
    pub fn window_denylist(&self) -> Vec<String> {
        let mut titles: Vec<String> = BUILTIN_WINDOW_DENYLIST
            .iter()
            .map(|t| t.to_string())
            .collect();
        for extra in &self.window_denylist {
            if !titles.contains(extra) {
                titles.push(extra.clone());
            }
        }
        titles
    }
}
