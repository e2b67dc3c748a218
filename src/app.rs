//! Application Shell
//!
//! The main window: the entry table, an "Add Key" button, and the glue that
//! opens an editor per row and applies what the editor decided.

use gpui::*;
use tracing::{debug, info};

use crate::components::{Button, ButtonColors, ButtonVariant};
use crate::config::Config;
use crate::editor::open_editor_window;
use crate::entries::{EntryTable, RowId, TableLayout, COLUMN_TITLES};
use crate::error::ResultExt;
use crate::logging;
use crate::session::{EditSession, SessionOutcome};
use crate::theme::Theme;

/// Space under the table for the "Add Key" button
const FOOTER_HEIGHT: f32 = 56.;
/// Rows visible in a fresh main window before the row body scrolls
const INITIAL_VISIBLE_ROWS: f32 = 12.;

pub struct KeyTimeApp {
    table: EntryTable,
    layout: TableLayout,
    config: Config,
    theme: Theme,
    rows_scroll: ScrollHandle,
    focus_handle: FocusHandle,
}

impl KeyTimeApp {
    /// The program runs until this view's window is closed.
    pub fn new(config: Config, theme: Theme, cx: &mut Context<Self>) -> Self {
        cx.on_release(|app, cx| {
            info!(rows = app.table.len(), "Main window closed, quitting");
            cx.quit();
        })
        .detach();

        Self {
            table: EntryTable::new(),
            layout: TableLayout::from(config.table),
            config,
            theme,
            rows_scroll: ScrollHandle::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Initial main window size for a table laid out with `layout`
    pub fn window_size(layout: &TableLayout) -> Size<Pixels> {
        size(
            px(layout.width()),
            px(layout.header_height + layout.row_height * INITIAL_VISIBLE_ROWS + FOOTER_HEIGHT),
        )
    }

    fn add_key(&mut self, cx: &mut Context<Self>) {
        let id = self.table.insert_blank();
        logging::log_ui_event("table", "add_key", Some(&id.to_string()));
        cx.notify();
        self.open_editor(id, cx);
    }

    /// `x`/`y` relative to the visible table's top-left corner
    fn click_table(&mut self, x: f32, y: f32, cx: &mut Context<Self>) {
        let scroll_top = -f32::from(self.rows_scroll.offset().y);
        let y = self.layout.content_y(y, scroll_top);
        match self.table.hit_test(&self.layout, x, y) {
            Some(id) => self.open_editor(id, cx),
            None => debug!(x = x, y = y, "Table click outside any row"),
        }
    }

    fn open_editor(&mut self, id: RowId, cx: &mut Context<Self>) {
        let Some(key) = self.table.get(id).log_err().cloned() else {
            return;
        };

        let (session, handle) = EditSession::open(id);
        if open_editor_window(key, handle, &self.config, self.theme, cx)
            .log_err()
            .is_none()
        {
            return;
        }

        cx.spawn(async move |this, cx| {
            let outcome = session.outcome().await;
            let _ = cx.update(|cx| {
                this.update(cx, |app, cx| app.apply_outcome(id, outcome, cx))
            });
        })
        .detach();
    }

    fn apply_outcome(&mut self, id: RowId, outcome: SessionOutcome, cx: &mut Context<Self>) {
        info!(
            event_type = "table",
            action = "apply",
            row = %id,
            outcome = outcome.label(),
            "Applying editor outcome"
        );
        // A row deleted by another editor in the meantime is logged and skipped
        self.table.apply(id, outcome).log_err();
        cx.notify();
    }

    fn render_header(&self) -> Div {
        let colors = self.theme.colors;
        let layout = self.layout;
        COLUMN_TITLES.iter().fold(
            div()
                .flex()
                .flex_row()
                .flex_shrink_0()
                .h(px(layout.header_height))
                .bg(rgb(colors.background.panel))
                .border_b_1()
                .border_color(rgb(colors.ui.border)),
            |header, title| {
                header.child(
                    div()
                        .w(px(layout.column_width))
                        .h_full()
                        .flex()
                        .items_center()
                        .px(px(4.))
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(rgb(colors.text.secondary))
                        .child(*title),
                )
            },
        )
    }

    fn render_rows(&self) -> Vec<Stateful<Div>> {
        let colors = self.theme.colors;
        let layout = self.layout;
        self.table
            .rows()
            .map(|(id, key)| {
                key.display_values().into_iter().fold(
                    div()
                        .id(ElementId::Name(id.to_string().into()))
                        .flex()
                        .flex_row()
                        .flex_shrink_0()
                        .h(px(layout.row_height))
                        .cursor_pointer()
                        .hover(move |s| s.bg(rgb(colors.accent.selected_subtle))),
                    |row, value| {
                        row.child(
                            div()
                                .w(px(layout.column_width))
                                .h_full()
                                .flex()
                                .items_center()
                                .px(px(4.))
                                .overflow_hidden()
                                .whitespace_nowrap()
                                .text_sm()
                                .child(value),
                        )
                    },
                )
            })
            .collect()
    }
}

impl Focusable for KeyTimeApp {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for KeyTimeApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let button_colors = ButtonColors::from_theme(&self.theme);
        let entity = cx.entity().downgrade();

        // The table sits at the window origin, so window coordinates are
        // table coordinates. Header and rows must keep their configured heights
        // (no flex shrink) or they drift from the bands hit_test maps.
        let table = div()
            .id("entry-table")
            .flex()
            .flex_col()
            .w(px(self.layout.width()))
            .flex_1()
            .min_h(px(0.))
            .overflow_hidden()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, _window, cx| {
                    let x: f32 = event.position.x.into();
                    let y: f32 = event.position.y.into();
                    this.click_table(x, y, cx);
                }),
            )
            .child(self.render_header())
            .child(
                div()
                    .id("entry-rows")
                    .flex()
                    .flex_col()
                    .flex_1()
                    .min_h(px(0.))
                    .overflow_y_scroll()
                    .track_scroll(&self.rows_scroll)
                    .children(self.render_rows()),
            );

        div()
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.background.main))
            .text_color(rgb(colors.text.primary))
            .child(table)
            .child(
                div()
                    .h(px(FOOTER_HEIGHT))
                    .flex()
                    .flex_row()
                    .items_center()
                    .px(px(8.))
                    .border_t_1()
                    .border_color(rgb(colors.ui.border))
                    .child(
                        Button::new("add-key", "Add Key", button_colors)
                            .variant(ButtonVariant::Primary)
                            .on_click(Box::new(move |_, _window, cx| {
                                let _ = entity.update(cx, |app, cx| app.add_key(cx));
                            })),
                    ),
            )
    }
}
