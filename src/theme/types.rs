//! Theme type definitions and loading

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::hex_color::{hex_color_serde, HexColor};

/// Optional theme override, next to the config file
pub const DEFAULT_THEME_PATH: &str = "~/.keytime64/theme.json";

/// Background color definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundColors {
    /// Window background (#1E1E1E)
    #[serde(with = "hex_color_serde")]
    pub main: HexColor,
    /// Table header band and editor panels (#2D2D30)
    #[serde(with = "hex_color_serde")]
    pub panel: HexColor,
    /// Input field background (#3C3C3C)
    #[serde(with = "hex_color_serde")]
    pub input: HexColor,
}

/// Text color definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextColors {
    /// Cell and field text (#FFFFFF)
    #[serde(with = "hex_color_serde")]
    pub primary: HexColor,
    /// Column headers and field labels (#CCCCCC)
    #[serde(with = "hex_color_serde")]
    pub secondary: HexColor,
    /// Placeholders (#808080)
    #[serde(with = "hex_color_serde")]
    pub muted: HexColor,
}

/// Accent and highlight colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccentColors {
    /// Button text, focus rings, checked boxes (#FBBF24)
    #[serde(with = "hex_color_serde")]
    pub selected: HexColor,
    /// Row hover and button fill (#2A2A2A)
    #[serde(with = "hex_color_serde")]
    pub selected_subtle: HexColor,
}

/// Border and status colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UIColors {
    /// Grid lines and field borders (#464647)
    #[serde(with = "hex_color_serde")]
    pub border: HexColor,
    /// Destructive actions such as Delete (#EF4444)
    #[serde(with = "hex_color_serde")]
    pub error: HexColor,
}

/// Complete color scheme definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub ui: UIColors,
}

/// Which built-in scheme a theme starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    pub const fn scheme(self) -> ColorScheme {
        match self {
            Appearance::Dark => ColorScheme::dark_default(),
            Appearance::Light => ColorScheme::light_default(),
        }
    }
}

/// Complete theme definition
///
/// In `theme.json`, `colors` only overrides the scheme picked by
/// `appearance`; see [`parse_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub appearance: Appearance,
    pub colors: ColorScheme,
}

impl Theme {
    pub const fn for_appearance(appearance: Appearance) -> Self {
        Theme {
            appearance,
            colors: appearance.scheme(),
        }
    }
}

impl Default for BackgroundColors {
    fn default() -> Self {
        ColorScheme::dark_default().background
    }
}

impl Default for TextColors {
    fn default() -> Self {
        ColorScheme::dark_default().text
    }
}

impl Default for AccentColors {
    fn default() -> Self {
        ColorScheme::dark_default().accent
    }
}

impl Default for UIColors {
    fn default() -> Self {
        ColorScheme::dark_default().ui
    }
}

impl ColorScheme {
    /// Dark mode color scheme (the default)
    pub const fn dark_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0x1e1e1e,
                panel: 0x2d2d30,
                input: 0x3c3c3c,
            },
            text: TextColors {
                primary: 0xffffff,
                secondary: 0xcccccc,
                muted: 0x808080,
            },
            accent: AccentColors {
                selected: 0xfbbf24,
                selected_subtle: 0x2a2a2a,
            },
            ui: UIColors {
                border: 0x464647,
                error: 0xef4444, // red-500
            },
        }
    }

    /// Light mode color scheme
    pub const fn light_default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0xffffff,
                panel: 0xf3f3f3,
                input: 0xececec,
            },
            text: TextColors {
                primary: 0x000000,
                secondary: 0x333333,
                muted: 0x999999,
            },
            accent: AccentColors {
                selected: 0x0078d4,
                selected_subtle: 0xe8e8e8,
            },
            ui: UIColors {
                border: 0xd0d0d0,
                error: 0xdc2626, // red-600
            },
        }
    }
}

/// Load the theme from ~/.keytime64/theme.json
///
/// Missing file means the dark defaults. A file that cannot be read or parsed
/// is logged and also falls back to the dark defaults.
pub fn load_theme() -> Theme {
    let theme_path = PathBuf::from(shellexpand::tilde(DEFAULT_THEME_PATH).as_ref());

    if !theme_path.exists() {
        debug!(path = %theme_path.display(), "Theme file not found, using dark defaults");
        return Theme::default();
    }

    match load_theme_from(&theme_path) {
        Ok(theme) => {
            info!(path = %theme_path.display(), "Successfully loaded theme");
            log_theme_config(&theme);
            theme
        }
        Err(e) => {
            warn!(error = ?e, path = %theme_path.display(), "Failed to load theme, using defaults");
            Theme::default()
        }
    }
}

pub fn load_theme_from(path: &Path) -> anyhow::Result<Theme> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_theme(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Parse theme JSON. Colors missing from the file come from the scheme named
/// by `appearance` (dark when absent).
pub fn parse_theme(contents: &str) -> serde_json::Result<Theme> {
    let file: Value = serde_json::from_str(contents)?;
    let appearance = match file.get("appearance") {
        Some(value) => Appearance::deserialize(value)?,
        None => Appearance::default(),
    };

    let mut merged = serde_json::to_value(Theme::for_appearance(appearance))?;
    overlay(&mut merged, file);
    serde_json::from_value(merged)
}

/// Recursively replace entries of `base` with those present in `top`
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (Value::Object(base), Value::Object(top)) => {
            for (key, value) in top {
                overlay(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, top) => *base = top,
    }
}

fn log_theme_config(theme: &Theme) {
    debug!(
        appearance = ?theme.appearance,
        main = format!("#{:06x}", theme.colors.background.main),
        selected = format!("#{:06x}", theme.colors.accent.selected),
        border = format!("#{:06x}", theme.colors.ui.border),
        "Theme colors"
    );
}
