//! Entry Editor
//!
//! One window per edited row. [`EditorForm`] is the plain edit buffer;
//! [`KeyEditor`] is the gpui view that drives it, runs key captures and
//! resolves the row's edit session.

mod form;
mod view;

pub use form::EditorForm;
pub use view::{open_editor_window, KeyEditor};
