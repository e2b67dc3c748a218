//! Editor sessions.
//!
//! Opening an editor for a row produces a pair: an [`EditSession`] kept by the
//! main window and a [`SessionHandle`] moved into the editor. The editor
//! resolves the handle exactly once (Save, Delete or Cancel); the main window
//! awaits the outcome and applies it to the table.
//!
//! ```rust,ignore
//! let (session, handle) = EditSession::open(row);
//! open_editor_window(handle, ...);
//! cx.spawn(async move |this, cx| {
//!     let outcome = session.outcome().await;
//!     this.update(cx, |app, cx| app.apply_outcome(row, outcome, cx))
//! }).detach();
//! ```

use async_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::entries::{Key, RowId};

/// How an editor session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Replace the row with this value
    Saved(Key),
    /// Remove the row
    Deleted,
    /// Leave the row untouched
    Cancelled,
}

impl SessionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saved(_) => "saved",
            Self::Deleted => "deleted",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Main-window side of an editor session
#[derive(Debug)]
pub struct EditSession {
    rx: Receiver<SessionOutcome>,
}

impl EditSession {
    /// Create a session for `row` and the handle the editor resolves it with.
    pub fn open(row: RowId) -> (EditSession, SessionHandle) {
        let (tx, rx) = async_channel::bounded(1);
        debug!(row = %row, "Edit session opened");
        (
            EditSession { rx },
            SessionHandle { row, tx: Some(tx) },
        )
    }

    /// Wait for the editor to resolve. An editor that goes away without
    /// resolving counts as Cancelled.
    pub async fn outcome(self) -> SessionOutcome {
        self.rx.recv().await.unwrap_or(SessionOutcome::Cancelled)
    }

    /// Non-blocking check: `None` while the editor is still open.
    #[cfg(test)]
    pub fn try_outcome(&self) -> Option<SessionOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(async_channel::TryRecvError::Closed) => Some(SessionOutcome::Cancelled),
            Err(async_channel::TryRecvError::Empty) => None,
        }
    }
}

/// Editor side of a session; resolves at most once.
#[derive(Debug)]
pub struct SessionHandle {
    row: RowId,
    tx: Option<Sender<SessionOutcome>>,
}

impl SessionHandle {
    pub fn row(&self) -> RowId {
        self.row
    }

    #[cfg(test)]
    pub fn is_resolved(&self) -> bool {
        self.tx.is_none()
    }

    /// Deliver the outcome. Returns false if the session was already resolved
    /// or nobody is waiting for it any more.
    pub fn resolve(&mut self, outcome: SessionOutcome) -> bool {
        let Some(tx) = self.tx.take() else {
            warn!(row = %self.row, outcome = outcome.label(), "Session already resolved");
            return false;
        };
        let label = outcome.label();
        match tx.try_send(outcome) {
            Ok(()) => {
                debug!(row = %self.row, outcome = label, "Edit session resolved");
                true
            }
            Err(_) => {
                debug!(row = %self.row, outcome = label, "Nobody listening for session outcome");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RowId {
        RowId::from_raw(1)
    }

    #[test]
    fn test_pending_until_resolved() {
        let (session, mut handle) = EditSession::open(row());
        assert_eq!(session.try_outcome(), None);
        assert_eq!(handle.row(), row());

        assert!(handle.resolve(SessionOutcome::Deleted));
        assert!(handle.is_resolved());
        assert_eq!(session.try_outcome(), Some(SessionOutcome::Deleted));
    }

    #[test]
    fn test_resolves_only_once() {
        let (session, mut handle) = EditSession::open(row());
        assert!(handle.resolve(SessionOutcome::Saved(Key::blank())));
        assert!(!handle.resolve(SessionOutcome::Deleted));

        assert_eq!(
            session.try_outcome(),
            Some(SessionOutcome::Saved(Key::blank()))
        );
    }

    #[test]
    fn test_dropped_handle_counts_as_cancelled() {
        let (session, handle) = EditSession::open(row());
        drop(handle);
        assert_eq!(session.try_outcome(), Some(SessionOutcome::Cancelled));
    }

    #[test]
    fn test_resolve_without_listener_is_noop() {
        let (session, mut handle) = EditSession::open(row());
        drop(session);
        assert!(!handle.resolve(SessionOutcome::Cancelled));
        assert!(handle.is_resolved());
    }
}
