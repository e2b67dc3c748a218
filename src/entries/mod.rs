//! Hotkey entries and the table that owns them.
//!
//! - [`Key`] - one entry (name, captured keys, time, target window, active flag)
//! - [`RowId`] - opaque, never-reused identifier handed out by the table
//! - [`EntryTable`] - ordered `RowId -> Key` mapping with hit testing

mod key;
mod table;

pub use key::{is_valid_time_input, parse_active_flag, parse_time_field, Key, NO_NAME};
pub use table::{EntryTable, RowId, TableLayout, COLUMN_TITLES};
