//! Theme module - Color schemes and styling
//!
//! This module provides functionality for:
//! - Loading an optional theme from ~/.keytime64/theme.json
//! - Dark (default) and light color schemes, picked by `appearance`
//! - Hex color parsing and serialization
//!
//! Components never read the theme directly; they take pre-computed color
//! structs built with `from_theme()`.

pub mod hex_color;
mod types;

pub use types::{
    load_theme, load_theme_from, parse_theme, AccentColors, Appearance, BackgroundColors, ColorScheme, TextColors, Theme,
    UIColors, DEFAULT_THEME_PATH,
};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
