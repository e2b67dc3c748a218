use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use super::key::Key;
use crate::config::TableConfig;
use crate::error::{KeytimeError, Result};
use crate::session::SessionOutcome;

/// Column headers, in display order
pub const COLUMN_TITLES: [&str; 5] = ["Name", "Keys", "Time", "Window", "Active"];

/// Opaque row identifier assigned by [`EntryTable::insert_blank`].
///
/// Identifiers increase monotonically and are never handed out twice, so
/// insertion order and identifier order coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

impl RowId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{:03X}", self.0)
    }
}

/// Pixel geometry used to map pointer positions to rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub column_width: f32,
    pub row_height: f32,
    pub header_height: f32,
}

impl TableLayout {
    pub fn width(&self) -> f32 {
        self.column_width * COLUMN_TITLES.len() as f32
    }

    /// Convert a pointer `y` inside the visible table to content coordinates
    /// when the row body is scrolled down by `scroll_top` pixels. The header
    /// band stays put.
    pub fn content_y(&self, y: f32, scroll_top: f32) -> f32 {
        if y < self.header_height {
            y
        } else {
            y + scroll_top.max(0.0)
        }
    }

    /// Index of the row band containing `(x, y)`, if the point is inside the
    /// body area. The band may not hold a row.
    fn row_index_at(&self, x: f32, y: f32) -> Option<usize> {
        if !(0.0..self.width()).contains(&x) || y < self.header_height || self.row_height <= 0.0
        {
            return None;
        }
        Some(((y - self.header_height) / self.row_height) as usize)
    }
}

impl From<TableConfig> for TableLayout {
    fn from(config: TableConfig) -> Self {
        Self {
            column_width: config.column_width,
            row_height: config.row_height,
            header_height: config.header_height,
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        TableConfig::default().into()
    }
}

/// The single source of truth for the rows shown in the main window.
#[derive(Debug, Default)]
pub struct EntryTable {
    rows: BTreeMap<RowId, Key>,
    next_id: u64,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank row and return its fresh identifier.
    pub fn insert_blank(&mut self) -> RowId {
        self.next_id += 1;
        let id = RowId(self.next_id);
        self.rows.insert(id, Key::blank());
        info!(event_type = "table", action = "insert", row = %id, "Inserted blank row");
        id
    }

    pub fn get(&self, id: RowId) -> Result<&Key> {
        self.rows.get(&id).ok_or(KeytimeError::NotFound(id))
    }

    /// Replace every field of a live row.
    pub fn update(&mut self, id: RowId, key: Key) -> Result<()> {
        let slot = self.rows.get_mut(&id).ok_or(KeytimeError::NotFound(id))?;
        debug!(row = %id, values = %key, "Updating row");
        *slot = key;
        info!(event_type = "table", action = "update", row = %id, "Updated row");
        Ok(())
    }

    pub fn delete(&mut self, id: RowId) -> Result<Key> {
        let removed = self.rows.remove(&id).ok_or(KeytimeError::NotFound(id))?;
        info!(event_type = "table", action = "delete", row = %id, "Deleted row");
        Ok(removed)
    }

    /// Row under a pointer position relative to the table's top-left corner.
    pub fn hit_test(&self, layout: &TableLayout, x: f32, y: f32) -> Option<RowId> {
        let index = layout.row_index_at(x, y)?;
        self.rows.keys().nth(index).copied()
    }

    /// Apply the resolution of an editor session to the row it was opened for.
    pub fn apply(&mut self, id: RowId, outcome: SessionOutcome) -> Result<()> {
        match outcome {
            SessionOutcome::Saved(key) => self.update(id, key),
            SessionOutcome::Deleted => self.delete(id).map(|_| ()),
            SessionOutcome::Cancelled => {
                debug!(row = %id, "Edit cancelled, row unchanged");
                Ok(())
            }
        }
    }

    /// Rows in insertion order
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Key)> + '_ {
        self.rows.iter().map(|(id, key)| (*id, key))
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
