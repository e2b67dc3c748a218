//! Single-choice dropdown
//!
//! Used for the editor's window selector. [`SelectState`] holds the choices
//! and the current selection; [`FormSelect`] renders it as a collapsed row
//! that expands into a list.

use gpui::*;
use tracing::debug;

use super::form_fields::FormFieldColors;

/// Rows shown before the list scrolls
const MAX_VISIBLE_CHOICES: f32 = 8.0;
const CHOICE_ROW_HEIGHT: f32 = 26.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    choices: Vec<String>,
    selected: Option<usize>,
}

impl SelectState {
    /// Out-of-range `selected` means nothing is selected.
    pub fn new(choices: Vec<String>, selected: Option<usize>) -> Self {
        let selected = selected.filter(|index| *index < choices.len());
        Self { choices, selected }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected choice, or "" when nothing is selected
    pub fn selected_value(&self) -> &str {
        self.selected
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.choices.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(self.choices.len() - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }
}

pub struct FormSelect {
    id: SharedString,
    label: SharedString,
    colors: FormFieldColors,
    state: SelectState,
    expanded: bool,
    focus_handle: FocusHandle,
}

impl FormSelect {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        state: SelectState,
        colors: FormFieldColors,
        cx: &mut App,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors,
            state,
            expanded: false,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn selected_value(&self) -> &str {
        self.state.selected_value()
    }

    fn choose(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.state.select(index) {
            debug!(select = %self.id, value = %self.state.selected_value(), "Choice selected");
        }
        self.expanded = false;
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        match event.keystroke.key.as_str() {
            "down" | "arrowdown" => self.state.select_next(),
            "up" | "arrowup" => self.state.select_previous(),
            "enter" | "space" | " " => self.expanded = !self.expanded,
            "escape" if self.expanded => self.expanded = false,
            _ => return,
        }
        cx.stop_propagation();
        cx.notify();
    }
}

impl Focusable for FormSelect {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FormSelect {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.colors;
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            rgb(colors.border_focused)
        } else {
            rgb(colors.border)
        };

        let current = self.state.selected_value().to_string();
        let caret = if self.expanded { "▴" } else { "▾" };

        let collapsed = div()
            .id(ElementId::Name(format!("select-{}", self.id).into()))
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                this.focus_handle.focus(window, cx);
                this.expanded = !this.expanded;
                cx.notify();
            }))
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .h(rems(2.))
            .px(rems(0.5))
            .bg(rgba((colors.background << 8) | 0x80))
            .border_1()
            .border_color(border_color)
            .rounded(px(6.))
            .text_sm()
            .text_color(rgb(colors.text))
            .cursor_pointer()
            .child(div().overflow_hidden().child(current))
            .child(div().text_color(rgb(colors.placeholder)).child(caret));

        let mut control = div().flex().flex_col().flex_1().gap(px(2.)).child(collapsed);

        if self.expanded {
            let selected = self.state.selected_index();
            let mut list = div()
                .id(ElementId::Name(format!("select-{}-list", self.id).into()))
                .overflow_y_scroll()
                .max_h(px(MAX_VISIBLE_CHOICES * CHOICE_ROW_HEIGHT))
                .flex()
                .flex_col()
                .bg(rgb(colors.background))
                .border_1()
                .border_color(rgb(colors.border))
                .rounded(px(6.))
                .py(px(2.));

            if self.state.choices().is_empty() {
                list = list.child(
                    div()
                        .px(rems(0.5))
                        .py(px(4.))
                        .text_sm()
                        .text_color(rgb(colors.placeholder))
                        .child("No windows"),
                );
            }

            for (index, choice) in self.state.choices().iter().enumerate() {
                let is_selected = selected == Some(index);
                list = list.child(
                    div()
                        .id(ElementId::Name(format!("select-{}-{}", self.id, index).into()))
                        .h(px(CHOICE_ROW_HEIGHT))
                        .flex()
                        .items_center()
                        .px(rems(0.5))
                        .text_sm()
                        .text_color(if is_selected {
                            rgb(colors.border_focused)
                        } else {
                            rgb(colors.text)
                        })
                        .cursor_pointer()
                        .hover(|s| s.bg(rgba(0xffffff1a)))
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.choose(index, cx);
                        }))
                        .child(choice.clone()),
                );
            }
            control = control.child(list);
        }

        div()
            .flex()
            .flex_row()
            .items_start()
            .gap(rems(0.75))
            .w_full()
            .child(
                div()
                    .w(rems(5.))
                    .h(rems(2.))
                    .flex()
                    .items_center()
                    .flex_shrink_0()
                    .text_sm()
                    .text_color(rgb(colors.label))
                    .font_weight(FontWeight::MEDIUM)
                    .child(self.label.clone()),
            )
            .child(control)
    }
}
