use std::time::{Duration, Instant};

use gpui::*;
use tracing::{debug, info};

use super::form::EditorForm;
use crate::components::{
    Button, ButtonColors, ButtonVariant, FormCheckbox, FormFieldColors, FormSelect,
    FormTextField, SelectState, TextBuffer,
};
use crate::config::Config;
use crate::entries::{is_valid_time_input, Key};
use crate::error::ResultExt;
use crate::key_capture::{
    join_codes, system_key_state, CapturePhase, CaptureResult, KeyCapture, KeyStateSource,
};
use crate::logging;
use crate::session::{SessionHandle, SessionOutcome};
use crate::theme::Theme;
use crate::window_list::WindowEnumerator;

const EDITOR_WIDTH: f32 = 420.;
const EDITOR_HEIGHT: f32 = 360.;

/// Modal-style editor for one entry.
///
/// Owns the [`SessionHandle`] for its row and resolves it exactly once from
/// Save, Delete or Cancel before closing its window. If the window is closed
/// any other way the handle is dropped, which the waiting side reads as
/// Cancelled.
pub struct KeyEditor {
    form: EditorForm,
    session: SessionHandle,
    name_field: Entity<FormTextField>,
    time_field: Entity<FormTextField>,
    window_select: Entity<FormSelect>,
    active_checkbox: Entity<FormCheckbox>,
    capture: KeyCapture,
    capture_task: Option<Task<()>>,
    poll_interval: Duration,
    theme: Theme,
    focus_handle: FocusHandle,
}

impl KeyEditor {
    pub fn new(
        key: &Key,
        session: SessionHandle,
        config: &Config,
        theme: Theme,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // Snapshot taken once; an OS failure leaves only the seeded value
        let enumerated = WindowEnumerator::from_config(config)
            .list_windows()
            .warn_on_err()
            .unwrap_or_default();
        let form = EditorForm::from_key(key, enumerated);
        let field_colors = FormFieldColors::from_theme(&theme);

        let name_field = cx.new(|cx| {
            FormTextField::new("name", "Name", TextBuffer::new(form.name.clone()), field_colors, cx)
        });
        let time_field = cx.new(|cx| {
            FormTextField::new(
                "time",
                "Time",
                TextBuffer::new(form.time_text()).with_filter(is_valid_time_input),
                field_colors,
                cx,
            )
            .placeholder("0")
        });
        let window_select = cx.new(|cx| {
            FormSelect::new(
                "window",
                "Window",
                SelectState::new(form.window_choices().to_vec(), form.selected_window_index()),
                field_colors,
                cx,
            )
        });
        let active_checkbox =
            cx.new(|cx| FormCheckbox::new("active", "Active", form.active, field_colors, cx));

        let name_focus = name_field.read(cx).focus_handle(cx);
        name_focus.focus(window, cx);

        info!(
            event_type = "editor",
            action = "opened",
            row = %session.row(),
            windows = form.window_choices().len(),
            "Editor opened"
        );

        Self {
            form,
            session,
            name_field,
            time_field,
            window_select,
            active_checkbox,
            capture: KeyCapture::new(config.capture.timeout()),
            capture_task: None,
            poll_interval: config.capture.poll_interval(),
            theme,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Copy widget values into the form
    fn sync_form(&mut self, cx: &App) {
        self.form.name = self.name_field.read(cx).value().to_string();
        let time_text = self.time_field.read(cx).value().to_string();
        if !self.form.set_time_text(&time_text) {
            debug!(time = %time_text, "Ignoring invalid time text");
        }
        self.form.set_window(self.window_select.read(cx).selected_value());
        self.form.active = self.active_checkbox.read(cx).is_checked();
    }

    fn save(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.sync_form(cx);
        let key = self.form.submit();
        self.finish(SessionOutcome::Saved(key), window, cx);
    }

    fn finish(&mut self, outcome: SessionOutcome, window: &mut Window, cx: &mut Context<Self>) {
        self.stop_capture();
        logging::log_ui_event(
            "editor",
            outcome.label(),
            Some(&self.session.row().to_string()),
        );
        self.session.resolve(outcome);
        cx.notify();
        window.remove_window();
    }

    fn start_capture(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.capture.is_capturing() {
            return;
        }
        let Some(source) = self.capture.start_with(system_key_state, Instant::now()) else {
            return;
        };
        // Keep key presses out of the text fields while recording
        self.focus_handle.focus(window, cx);

        let interval = self.poll_interval;

        self.capture_task = Some(cx.spawn(async move |this, cx| loop {
            Timer::after(interval).await;

            let should_stop = cx
                .update(|cx| {
                    this.update(cx, |editor, cx| editor.tick_capture(source.as_ref(), cx))
                        .unwrap_or(true)
                })
                .unwrap_or(true);
            if should_stop {
                break;
            }
        }));
        cx.notify();
    }

    /// One sampling pass. Returns true once the capture is over.
    fn tick_capture(&mut self, source: &dyn KeyStateSource, cx: &mut Context<Self>) -> bool {
        let before = self.capture.codes().len();
        let phase = self.capture.tick(source, Instant::now()).clone();
        match phase {
            CapturePhase::Capturing => {
                if self.capture.codes().len() != before {
                    cx.notify();
                }
                false
            }
            CapturePhase::Done(_) => {
                match self.capture.take_result() {
                    Some(CaptureResult::Captured(keys)) => self.form.set_keys_label(keys),
                    Some(other) => debug!(result = ?other, "Capture ended without keys"),
                    None => {}
                }
                cx.notify();
                true
            }
            CapturePhase::Idle => true,
        }
    }

    fn stop_capture(&mut self) {
        self.capture.cancel();
        let _ = self.capture.take_result();
        self.capture_task = None;
    }

    fn keys_button_label(&self) -> String {
        if self.capture.is_capturing() {
            let so_far = join_codes(self.capture.codes());
            if so_far.is_empty() {
                "Press keys, Esc to finish".to_string()
            } else {
                format!("{so_far} (Esc to finish)")
            }
        } else if self.form.keys_label().is_empty() {
            "Record keys".to_string()
        } else {
            self.form.keys_label().to_string()
        }
    }
}

impl Drop for KeyEditor {
    fn drop(&mut self) {
        if self.capture.is_capturing() {
            debug!(row = %self.session.row(), "Editor closed during capture");
            self.stop_capture();
        }
    }
}

impl Focusable for KeyEditor {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for KeyEditor {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let button_colors = ButtonColors::from_theme(&self.theme);
        let is_capturing = self.capture.is_capturing();
        let entity = cx.entity().downgrade();

        let keys_button = {
            let entity = entity.clone();
            Button::new("keys", self.keys_button_label(), button_colors)
                .variant(ButtonVariant::Ghost)
                .disabled(is_capturing)
                .on_click(Box::new(move |_, window, cx| {
                    let _ = entity.update(cx, |editor, cx| editor.start_capture(window, cx));
                }))
        };

        type Action = fn(&mut KeyEditor, &mut Window, &mut Context<KeyEditor>);
        let action = |id: &'static str, label: &'static str, variant: ButtonVariant, run: Action| {
            let entity = entity.clone();
            Button::new(id, label, button_colors)
                .variant(variant)
                .on_click(Box::new(move |_, window, cx| {
                    let _ = entity.update(cx, |editor, cx| run(editor, window, cx));
                }))
        };

        div()
            .id("key-editor")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .gap(rems(0.625))
            .p(rems(1.))
            .bg(rgb(colors.background.main))
            .text_color(rgb(colors.text.primary))
            .child(self.name_field.clone())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(rems(0.75))
                    .child(
                        div()
                            .w(rems(5.))
                            .flex_shrink_0()
                            .text_sm()
                            .text_color(rgb(colors.text.secondary))
                            .font_weight(FontWeight::MEDIUM)
                            .child("Keys"),
                    )
                    .child(keys_button),
            )
            .child(self.time_field.clone())
            .child(self.window_select.clone())
            .child(self.active_checkbox.clone())
            .child(div().flex_1())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .justify_end()
                    .gap(rems(0.5))
                    .child(action("delete", "Delete", ButtonVariant::Danger, |editor, window, cx| {
                        editor.finish(SessionOutcome::Deleted, window, cx)
                    }))
                    .child(action("cancel", "Cancel", ButtonVariant::Ghost, |editor, window, cx| {
                        editor.finish(SessionOutcome::Cancelled, window, cx)
                    }))
                    .child(action("save", "Save", ButtonVariant::Primary, |editor, window, cx| {
                        editor.save(window, cx)
                    })),
            )
    }
}

/// Open an editor window for `key`, titled like the main window.
pub fn open_editor_window(
    key: Key,
    session: SessionHandle,
    config: &Config,
    theme: Theme,
    cx: &mut App,
) -> anyhow::Result<WindowHandle<KeyEditor>> {
    let row = session.row();
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            size(px(EDITOR_WIDTH), px(EDITOR_HEIGHT)),
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(crate::APP_TITLE.into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        kind: WindowKind::Normal,
        ..Default::default()
    };

    let config = config.clone();
    let handle = cx.open_window(window_options, move |window, cx| {
        cx.new(|cx| KeyEditor::new(&key, session, &config, theme, window, cx))
    })?;
    debug!(row = %row, "Editor window created");
    Ok(handle)
}
