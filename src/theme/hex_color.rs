//! Hex color values for theme files
//!
//! Colors are stored as `0xRRGGBB` and written to JSON as `"#rrggbb"`. When
//! reading, `"#RRGGBB"`, `"0xRRGGBB"`, bare `"RRGGBB"` and plain integers are
//! all accepted.

/// A 24-bit RGB color
pub type HexColor = u32;

pub mod hex_color_serde {
    use super::HexColor;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("#{:06x}", color & 0xffffff))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawColor {
        Number(u32),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HexColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawColor::deserialize(deserializer)? {
            RawColor::Number(value) if value <= 0xffffff => Ok(value),
            RawColor::Number(value) => Err(de::Error::custom(format!(
                "color {value:#x} does not fit in 24 bits"
            ))),
            RawColor::Text(text) => parse_color_string(&text).map_err(de::Error::custom),
        }
    }

    /// Parse `#RRGGBB`, `0xRRGGBB` or `RRGGBB`.
    pub fn parse_color_string(text: &str) -> Result<HexColor, String> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid color {text:?}, expected #RRGGBB"));
        }
        u32::from_str_radix(digits, 16).map_err(|e| format!("invalid color {text:?}: {e}"))
    }
}
