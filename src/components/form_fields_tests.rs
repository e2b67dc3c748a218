//! Unit tests for the plain editing state behind the form components.
//!
//! Kept out of the component files so they build without pulling in gpui
//! element macros.

use super::form_fields::TextBuffer;
use super::select::SelectState;

fn digits_only(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}

#[test]
fn test_new_buffer_puts_cursor_at_end() {
    let buffer = TextBuffer::new("héllo");
    assert_eq!(buffer.value(), "héllo");
    assert_eq!(buffer.cursor(), 5);
    assert_eq!(buffer.selection_range(), None);
}

#[test]
fn test_insert_and_backspace_are_char_indexed() {
    let mut buffer = TextBuffer::new("a😀b");
    buffer.move_left(false);
    assert!(buffer.insert("•"));
    assert_eq!(buffer.value(), "a😀•b");
    assert_eq!(buffer.cursor(), 3);

    assert!(buffer.backspace());
    assert!(buffer.backspace());
    assert_eq!(buffer.value(), "ab");
    assert_eq!(buffer.cursor(), 1);
}

#[test]
fn test_backspace_and_delete_at_edges_do_nothing() {
    let mut buffer = TextBuffer::new("ab");
    assert!(!buffer.delete_forward());
    buffer.move_home(false);
    assert!(!buffer.backspace());
    assert!(buffer.delete_forward());
    assert_eq!(buffer.value(), "b");
}

#[test]
fn test_selection_replace_and_delete() {
    let mut buffer = TextBuffer::new("hello world");
    buffer.move_home(false);
    for _ in 0..5 {
        buffer.move_right(true);
    }
    assert_eq!(buffer.selected_text(), "hello");

    assert!(buffer.insert("bye"));
    assert_eq!(buffer.value(), "bye world");
    assert_eq!(buffer.cursor(), 3);

    buffer.select_all();
    assert_eq!(buffer.selected_text(), "bye world");
    assert!(buffer.backspace());
    assert_eq!(buffer.value(), "");
}

#[test]
fn test_move_without_shift_collapses_selection() {
    let mut buffer = TextBuffer::new("abcd");
    buffer.select_all();
    buffer.move_left(false);
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.selection_range(), None);

    buffer.select_all();
    buffer.move_right(false);
    assert_eq!(buffer.cursor(), 4);
    assert_eq!(buffer.selection_range(), None);
}

#[test]
fn test_filter_rejects_edits_without_changing_anything() {
    let mut buffer = TextBuffer::new("12").with_filter(digits_only);
    buffer.move_left(false);

    assert!(!buffer.insert("x"));
    assert_eq!(buffer.value(), "12");
    assert_eq!(buffer.cursor(), 1);

    assert!(buffer.insert("9"));
    assert_eq!(buffer.value(), "192");
}

#[test]
fn test_filter_applies_to_whole_candidate_value() {
    // Pasting "3a" is rejected as a whole, not partially applied
    let mut buffer = TextBuffer::new("").with_filter(digits_only);
    assert!(!buffer.insert("3a"));
    assert_eq!(buffer.value(), "");

    assert!(buffer.set_value("42"));
    assert!(!buffer.set_value("4 2"));
    assert_eq!(buffer.value(), "42");
}

#[test]
fn test_deleting_to_empty_passes_filter_that_allows_empty() {
    let mut buffer = TextBuffer::new("7").with_filter(digits_only);
    assert!(buffer.backspace());
    assert_eq!(buffer.value(), "");
}

#[test]
fn test_select_state_clamps_initial_selection() {
    let state = SelectState::new(vec!["A".to_string()], Some(3));
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.selected_value(), "");
}

#[test]
fn test_select_state_navigation() {
    let mut state = SelectState::new(
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        None,
    );
    state.select_previous();
    assert_eq!(state.selected_index(), None);

    state.select_next();
    assert_eq!(state.selected_value(), "A");
    state.select_next();
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_value(), "C");
    state.select_previous();
    assert_eq!(state.selected_value(), "B");

    assert!(!state.select(3));
    assert!(state.select(0));
    assert_eq!(state.selected_value(), "A");
}

#[test]
fn test_empty_select_state() {
    let mut state = SelectState::default();
    state.select_next();
    assert_eq!(state.selected_index(), None);
    assert!(state.choices().is_empty());
}
