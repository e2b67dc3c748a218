//! Edit buffer behind one editor window.
//!
//! Seeded once from a [`Key`]; the view copies widget values back into it and
//! [`EditorForm::submit`] builds the record handed to the session.

use tracing::debug;

use crate::entries::{is_valid_time_input, parse_active_flag, parse_time_field, Key};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    pub name: String,
    keys_label: String,
    time_text: String,
    window: String,
    window_choices: Vec<String>,
    pub active: bool,
}

impl EditorForm {
    /// Seed from `key`, with `enumerated` as the current window snapshot.
    ///
    /// A non-empty window value missing from the snapshot is listed first so
    /// it stays selectable.
    pub fn from_key(key: &Key, enumerated: Vec<String>) -> Self {
        let mut window_choices = enumerated;
        if !key.window.is_empty() && !window_choices.contains(&key.window) {
            debug!(window = %key.window, "Seeded window not currently open, listing it first");
            window_choices.insert(0, key.window.clone());
        }

        Self {
            name: key.name.clone(),
            keys_label: key.keys.clone(),
            time_text: key.time_label(),
            window: key.window.clone(),
            window_choices,
            active: parse_active_flag(&key.active_label()),
        }
    }

    /// Text shown on the Keys button
    pub fn keys_label(&self) -> &str {
        &self.keys_label
    }

    pub fn set_keys_label(&mut self, label: impl Into<String>) {
        self.keys_label = label.into();
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    /// Accept `text` only if it is empty or a `u64` in plain digits.
    pub fn set_time_text(&mut self, text: &str) -> bool {
        if !is_valid_time_input(text) {
            return false;
        }
        self.time_text = text.to_string();
        true
    }

    pub fn window(&self) -> &str {
        &self.window
    }

    /// Any value is accepted, listed or not
    pub fn set_window(&mut self, window: impl Into<String>) {
        self.window = window.into();
    }

    pub fn window_choices(&self) -> &[String] {
        &self.window_choices
    }

    /// Position of the current window value in the choice list
    pub fn selected_window_index(&self) -> Option<usize> {
        self.window_choices.iter().position(|w| *w == self.window)
    }

    /// The record Save hands back. Captured keys are not carried over.
    pub fn submit(&self) -> Key {
        Key {
            name: self.name.clone(),
            keys: String::new(),
            time: Some(parse_time_field(&self.time_text)),
            window: self.window.clone(),
            active: Some(self.active),
        }
    }
}
