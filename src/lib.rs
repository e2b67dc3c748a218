//! keytime64 - named hotkey entries tied to application windows
//!
//! A main window lists entries (name, captured keys, time, target window,
//! active flag) in a table; clicking a row or "Add Key" opens an editor
//! window for that entry. Nothing is persisted and no hotkeys are registered
//! with the OS.

pub mod app;
pub mod components;
pub mod config;
pub mod editor;
pub mod entries;
pub mod error;
pub mod key_capture;
pub mod logging;
pub mod session;
pub mod theme;
pub mod window_list;

/// Title of every window this application opens. Also hidden from the
/// window selector.
pub const APP_TITLE: &str = "keytime64";
