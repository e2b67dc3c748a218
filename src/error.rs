use std::panic::Location;

use thiserror::Error;
use tracing::{error, warn, Level};

use crate::entries::RowId;

/// Domain-specific errors for keytime64
#[derive(Error, Debug)]
pub enum KeytimeError {
    #[error("Row {0} is not in the table")]
    NotFound(RowId),

    #[error("Window enumeration failed: {0}")]
    WindowEnumeration(String),

    #[error("Keyboard state unavailable: {0}")]
    KeyState(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KeytimeError>;

/// Turns a failed `Result` into a log line plus `None`, recording where it
/// was called from.
///
/// ```ignore
/// use keytime64::error::ResultExt;
///
/// // Fall back to an empty selector if the OS query fails
/// let titles = enumerator.list_windows().warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// For failures that should not happen, logged at ERROR.
    fn log_err(self) -> Option<T>;
    /// For failures the app routinely recovers from, logged at WARN.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        let caller = Location::caller();
        self.map_err(|e| report(Level::ERROR, &e, caller)).ok()
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        let caller = Location::caller();
        self.map_err(|e| report(Level::WARN, &e, caller)).ok()
    }
}

fn report(level: Level, error: &dyn std::fmt::Debug, caller: &Location<'_>) {
    let at = format!("{}:{}", caller.file(), caller.line());
    if level == Level::ERROR {
        error!(error = ?error, at = %at, "Operation failed");
    } else {
        warn!(error = ?error, at = %at, "Recovered from failure");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_row() {
        let err = KeytimeError::NotFound(RowId::from_raw(7));
        assert_eq!(err.to_string(), "Row I007 is not in the table");
    }

    #[test]
    fn test_result_ext_passes_values_through() {
        let ok: std::result::Result<u8, KeytimeError> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));

        let err: std::result::Result<u8, KeytimeError> =
            Err(KeytimeError::Config("bad".to_string()));
        assert_eq!(err.warn_on_err(), None);
    }
}
