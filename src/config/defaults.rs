//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Where the optional configuration file lives (tilde-expanded)
pub const DEFAULT_CONFIG_PATH: &str = "~/.keytime64/config.json";

/// Table geometry, in logical pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;
pub const DEFAULT_ROW_HEIGHT: f32 = 24.0;
pub const DEFAULT_HEADER_HEIGHT: f32 = 28.0;

/// How often a running key capture samples the keyboard
pub const DEFAULT_CAPTURE_POLL_INTERVAL_MS: u64 = 10;

/// Window titles that never show up in the window selector.
/// The first entry is our own window title.
pub const BUILTIN_WINDOW_DENYLIST: &[&str] = &[
    crate::APP_TITLE,
    "Microsoft Text Input Application",
    "Program Manager",
    "Settings",
];
