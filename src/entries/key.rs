use std::fmt;

/// Name given to rows created with "Add Key"
pub const NO_NAME: &str = "<no name>";

/// One hotkey entry as shown in a table row.
///
/// `time` and `active` are `None` only for a freshly inserted blank row; every
/// entry saved from the editor carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub name: String,
    /// `+`-joined decimal key codes produced by a capture
    pub keys: String,
    pub time: Option<u64>,
    pub window: String,
    pub active: Option<bool>,
}

impl Key {
    /// Placeholder values for a row that has never been edited
    pub fn blank() -> Self {
        Self {
            name: NO_NAME.to_string(),
            keys: String::new(),
            time: None,
            window: String::new(),
            active: None,
        }
    }

    pub fn time_label(&self) -> String {
        self.time.map(|t| t.to_string()).unwrap_or_default()
    }

    pub fn active_label(&self) -> String {
        match self.active {
            Some(true) => "True".to_string(),
            Some(false) => "False".to_string(),
            None => String::new(),
        }
    }

    /// Cell texts in column order: Name, Keys, Time, Window, Active
    pub fn display_values(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.keys.clone(),
            self.time_label(),
            self.window.clone(),
            self.active_label(),
        ]
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [name, keys, time, window, active] = self.display_values();
        write!(f, "({name:?}, {keys:?}, {time:?}, {window:?}, {active:?})")
    }
}

/// Whether a displayed active value means "checked".
pub fn parse_active_flag(value: &str) -> bool {
    value.to_lowercase() == "true"
}

/// Input-time filter for the Time field: empty, or ASCII digits that fit in a `u64`.
pub fn is_valid_time_input(candidate: &str) -> bool {
    candidate.is_empty()
        || (candidate.bytes().all(|b| b.is_ascii_digit()) && candidate.parse::<u64>().is_ok())
}

/// Value submitted for the Time field. Empty means zero.
///
/// Only ever sees text that passed [`is_valid_time_input`]; anything else is
/// treated as zero rather than failing the save.
pub fn parse_time_field(text: &str) -> u64 {
    if text.is_empty() {
        0
    } else {
        text.parse().unwrap_or(0)
    }
}
