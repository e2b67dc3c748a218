//! Form field components for the entry editor
//!
//! - [`FormTextField`] - single-line text input, optionally filtered at input time
//! - [`FormCheckbox`] - checkbox with label
//!
//! Text editing state lives in [`TextBuffer`], which has no gpui dependency so
//! the cursor and filter rules can be tested on their own.

use gpui::*;
use tracing::trace;

// --- Text indexing helpers (char-indexed cursor/selection) --------------------

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character index (0..=char_len) into a byte index (0..=s.len()).
fn byte_idx_from_char_idx(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

/// Slice a &str by char indices [start_char, end_char).
fn slice_by_char_range(s: &str, start_char: usize, end_char: usize) -> &str {
    let start_b = byte_idx_from_char_idx(s, start_char);
    let end_b = byte_idx_from_char_idx(s, end_char);
    &s[start_b..end_b]
}

/// Decides whether a whole candidate value may replace the current one
pub type InputFilter = fn(&str) -> bool;

/// Single-line text with a char-indexed cursor and selection.
///
/// Every edit is computed as a candidate value first; if an [`InputFilter`]
/// rejects the candidate the buffer is left exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    value: String,
    /// CHAR index, not bytes
    cursor: usize,
    /// CHAR index. None = no selection.
    anchor: Option<usize>,
    filter: Option<InputFilter>,
}

impl TextBuffer {
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        Self {
            cursor: char_len(&value),
            value,
            anchor: None,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: InputFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole value, cursor at the end. Goes through the filter.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let cursor = char_len(&value);
        self.commit(value, cursor)
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.anchor
            .filter(|anchor| *anchor != self.cursor)
            .map(|anchor| (anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn selected_text(&self) -> &str {
        match self.selection_range() {
            Some((start, end)) => slice_by_char_range(&self.value, start, end),
            None => "",
        }
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = char_len(&self.value);
    }

    /// Insert at the cursor, replacing any selection.
    pub fn insert(&mut self, text: &str) -> bool {
        let (start, end) = self.selection_range().unwrap_or((self.cursor, self.cursor));
        let mut candidate = self.value.clone();
        candidate.replace_range(
            byte_idx_from_char_idx(&self.value, start)..byte_idx_from_char_idx(&self.value, end),
            text,
        );
        self.commit(candidate, start + char_len(text))
    }

    pub fn backspace(&mut self) -> bool {
        match self.selection_range() {
            Some(_) => self.insert(""),
            None if self.cursor == 0 => false,
            None => self.remove_chars(self.cursor - 1, self.cursor),
        }
    }

    pub fn delete_forward(&mut self) -> bool {
        match self.selection_range() {
            Some(_) => self.insert(""),
            None if self.cursor >= char_len(&self.value) => false,
            None => self.remove_chars(self.cursor, self.cursor + 1),
        }
    }

    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection {
            if let Some((start, _)) = self.selection_range() {
                self.cursor = start;
                self.anchor = None;
                return;
            }
        }
        self.move_to(self.cursor.saturating_sub(1), extend_selection);
    }

    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection {
            if let Some((_, end)) = self.selection_range() {
                self.cursor = end;
                self.anchor = None;
                return;
            }
        }
        let target = (self.cursor + 1).min(char_len(&self.value));
        self.move_to(target, extend_selection);
    }

    pub fn move_home(&mut self, extend_selection: bool) {
        self.move_to(0, extend_selection);
    }

    pub fn move_end(&mut self, extend_selection: bool) {
        self.move_to(char_len(&self.value), extend_selection);
    }

    fn move_to(&mut self, target: usize, extend_selection: bool) {
        if extend_selection {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = target;
    }

    fn remove_chars(&mut self, start: usize, end: usize) -> bool {
        let mut candidate = self.value.clone();
        candidate.replace_range(
            byte_idx_from_char_idx(&self.value, start)..byte_idx_from_char_idx(&self.value, end),
            "",
        );
        self.commit(candidate, start)
    }

    fn commit(&mut self, candidate: String, cursor: usize) -> bool {
        if let Some(filter) = self.filter {
            if !filter(&candidate) {
                trace!(candidate = %candidate, "Input rejected by filter");
                return false;
            }
        }
        self.value = candidate;
        self.cursor = cursor.min(char_len(&self.value));
        self.anchor = None;
        true
    }
}

/// Pre-computed colors for form field rendering
#[derive(Clone, Copy, Debug)]
pub struct FormFieldColors {
    pub background: u32,
    pub background_focused: u32,
    pub text: u32,
    pub placeholder: u32,
    pub label: u32,
    pub border: u32,
    pub border_focused: u32,
    pub cursor: u32,
    pub checkbox_checked: u32,
    pub checkbox_mark: u32,
}

impl FormFieldColors {
    pub fn from_theme(theme: &crate::theme::Theme) -> Self {
        Self {
            background: theme.colors.background.input,
            background_focused: theme.colors.background.main,
            text: theme.colors.text.primary,
            placeholder: theme.colors.text.muted,
            label: theme.colors.text.secondary,
            border: theme.colors.ui.border,
            border_focused: theme.colors.accent.selected,
            cursor: 0x00ffff,
            checkbox_checked: theme.colors.accent.selected,
            checkbox_mark: theme.colors.background.main,
        }
    }
}

impl Default for FormFieldColors {
    fn default() -> Self {
        Self::from_theme(&crate::theme::Theme::default())
    }
}

/// Fixed label column so fields line up
const LABEL_WIDTH_REMS: f32 = 5.0;

fn field_label(text: SharedString, color: u32) -> Div {
    div()
        .w(rems(LABEL_WIDTH_REMS))
        .flex_shrink_0()
        .text_sm()
        .text_color(rgb(color))
        .font_weight(FontWeight::MEDIUM)
        .child(text)
}

/// A labelled single-line text input.
///
/// Supports selection (Shift+Arrow, Cmd/Ctrl+A) and clipboard (Cmd/Ctrl+C/X/V).
pub struct FormTextField {
    id: SharedString,
    label: SharedString,
    placeholder: SharedString,
    colors: FormFieldColors,
    buffer: TextBuffer,
    focus_handle: FocusHandle,
}

impl FormTextField {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        buffer: TextBuffer,
        colors: FormFieldColors,
        cx: &mut App,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: SharedString::default(),
            colors,
            buffer,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        self.buffer.value()
    }

    fn copy(&self, cx: &mut Context<Self>) {
        let text = self.buffer.selected_text();
        if !text.is_empty() {
            cx.write_to_clipboard(ClipboardItem::new_string(text.to_string()));
        }
    }

    fn cut(&mut self, cx: &mut Context<Self>) {
        self.copy(cx);
        if self.buffer.selection_range().is_some() {
            self.buffer.insert("");
        }
    }

    fn paste(&mut self, cx: &mut Context<Self>) {
        if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
            self.buffer.insert(&text);
        }
    }

    pub fn handle_key_event(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        crate::logging::log_debug(
            "FIELD",
            &format!(
                "TextField[{}] key: '{}' (key_char: {:?})",
                self.id, event.keystroke.key, event.keystroke.key_char
            ),
        );
        let key = event.keystroke.key.to_lowercase();
        let cmd = event.keystroke.modifiers.platform || event.keystroke.modifiers.control;
        let shift = event.keystroke.modifiers.shift;

        match (key.as_str(), cmd, shift) {
            ("a", true, false) => self.buffer.select_all(),
            ("c", true, false) => {
                self.copy(cx);
                return;
            }
            ("x", true, false) => self.cut(cx),
            ("v", true, false) => self.paste(cx),
            ("left" | "arrowleft", false, s) => self.buffer.move_left(s),
            ("right" | "arrowright", false, s) => self.buffer.move_right(s),
            ("home", false, s) => self.buffer.move_home(s),
            ("end", false, s) => self.buffer.move_end(s),
            ("backspace", false, _) => {
                self.buffer.backspace();
            }
            ("delete", false, _) => {
                self.buffer.delete_forward();
            }
            _ => {
                // Printable character input (ignore when cmd/ctrl held)
                if cmd {
                    return;
                }
                let Some(text) = event.keystroke.key_char.as_ref() else {
                    return;
                };
                if text.is_empty() || text.chars().all(|c| c.is_control()) {
                    return;
                }
                self.buffer.insert(text);
            }
        }
        cx.notify();
    }
}

impl Focusable for FormTextField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FormTextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.colors;
        let is_focused = self.focus_handle.is_focused(window);
        let value = self.buffer.value();
        let cursor = self.buffer.cursor().min(char_len(value));

        let border_color = if is_focused {
            rgb(colors.border_focused)
        } else {
            rgb(colors.border)
        };
        let bg_color = if is_focused {
            rgba((colors.background_focused << 8) | 0xff)
        } else {
            rgba((colors.background << 8) | 0x80)
        };

        let cursor_element = div().w(px(2.)).h(rems(1.)).bg(rgb(colors.cursor));

        let mut text_content = div().flex().flex_row().items_center();
        if value.is_empty() && !is_focused {
            text_content = text_content.child(
                div()
                    .text_color(rgb(colors.placeholder))
                    .child(self.placeholder.clone()),
            );
        } else {
            text_content = text_content.child(
                div()
                    .text_color(rgb(colors.text))
                    .child(slice_by_char_range(value, 0, cursor).to_string()),
            );
            if is_focused {
                text_content = text_content.child(cursor_element);
            }
            text_content = text_content.child(
                div()
                    .text_color(rgb(colors.text))
                    .child(slice_by_char_range(value, cursor, char_len(value)).to_string()),
            );
        }

        let focus_handle = self.focus_handle.clone();
        let input_id = self.id.clone();

        div()
            .id(ElementId::Name(format!("form-field-{}", self.id).into()))
            .flex()
            .flex_row()
            .items_center()
            .gap(rems(0.75))
            .w_full()
            .child(field_label(self.label.clone(), colors.label))
            .child(
                div()
                    .id(ElementId::Name(format!("input-{}", input_id).into()))
                    .track_focus(&self.focus_handle)
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                        this.handle_key_event(event, cx);
                    }))
                    .on_click(move |_event, window, cx| {
                        trace!(field = %input_id, "Text field clicked");
                        focus_handle.focus(window, cx);
                    })
                    .flex()
                    .flex_row()
                    .items_center()
                    .flex_1()
                    .h(rems(2.))
                    .px(rems(0.5))
                    .bg(bg_color)
                    .border_1()
                    .border_color(border_color)
                    .rounded(px(6.))
                    .text_sm()
                    .cursor_text()
                    .overflow_hidden()
                    .child(text_content),
            )
    }
}

/// A checkbox with label, toggled by click or Space
pub struct FormCheckbox {
    id: SharedString,
    label: SharedString,
    colors: FormFieldColors,
    checked: bool,
    focus_handle: FocusHandle,
}

impl FormCheckbox {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        checked: bool,
        colors: FormFieldColors,
        cx: &mut App,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors,
            checked,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn toggle(&mut self, cx: &mut Context<Self>) {
        self.checked = !self.checked;
        cx.notify();
    }
}

impl Focusable for FormCheckbox {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FormCheckbox {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.colors;
        let is_focused = self.focus_handle.is_focused(window);
        let checked = self.checked;

        let border_color = if is_focused {
            rgb(colors.border_focused)
        } else {
            rgb(colors.border)
        };
        let box_bg = if checked {
            rgb(colors.checkbox_checked)
        } else {
            rgba((colors.background << 8) | 0x80)
        };

        let mut checkbox_box = div()
            .flex()
            .items_center()
            .justify_center()
            .w(rems(1.125))
            .h(rems(1.125))
            .bg(box_bg)
            .border_1()
            .border_color(border_color)
            .rounded(px(4.));

        if checked {
            checkbox_box = checkbox_box.child(
                div()
                    .text_sm()
                    .text_color(rgb(colors.checkbox_mark))
                    .font_weight(FontWeight::BOLD)
                    .child("✓"),
            );
        }

        div()
            .id(ElementId::Name(format!("form-checkbox-{}", self.id).into()))
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                let key = event.keystroke.key.as_str();
                if key == "space" || key == " " {
                    this.toggle(cx);
                }
            }))
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.toggle(cx);
            }))
            .flex()
            .flex_row()
            .items_center()
            .gap(rems(0.75))
            .w_full()
            .cursor_pointer()
            .child(field_label(self.label.clone(), colors.label))
            .child(checkbox_box)
    }
}
