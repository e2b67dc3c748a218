//! Reusable Button component
//!
//! A theme-aware button with a few variants, hover states and a click handler.

use gpui::*;
use std::rc::Rc;

/// Button variant determines the visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled background, accent text
    #[default]
    Primary,
    /// Text only
    Ghost,
    /// Text only, in the error color (Delete)
    Danger,
}

/// Pre-computed colors for Button rendering
#[derive(Clone, Copy, Debug)]
pub struct ButtonColors {
    /// Label color for Primary and Ghost
    pub accent: u32,
    /// Label color for Danger
    pub danger: u32,
    /// Fill for Primary
    pub background: u32,
    pub background_hover: u32,
    pub border: u32,
}

impl ButtonColors {
    pub fn from_theme(theme: &crate::theme::Theme) -> Self {
        Self {
            accent: theme.colors.accent.selected,
            danger: theme.colors.ui.error,
            background: theme.colors.accent.selected_subtle,
            background_hover: theme.colors.accent.selected_subtle,
            border: theme.colors.ui.border,
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_theme(&crate::theme::Theme::default())
    }
}

/// Callback type for button click events
pub type OnClickCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// # Example
/// ```ignore
/// let colors = ButtonColors::from_theme(&theme);
/// Button::new("save", "Save", colors)
///     .on_click(Box::new(|_, _, _| info!("Saved")))
/// ```
#[derive(IntoElement)]
pub struct Button {
    id: SharedString,
    label: SharedString,
    colors: ButtonColors,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Rc<OnClickCallback>>,
}

impl Button {
    /// `id` must be unique within the window; labels may repeat or change.
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        colors: ButtonColors,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors,
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, callback: OnClickCallback) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let disabled = self.disabled;

        // White at ~15% alpha as a hover lift on any dark background
        let hover_overlay = rgba(0xffffff26);

        let (text_color, bg_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                rgb(colors.accent),
                rgba((colors.background << 8) | 0x80),
                rgba((colors.background_hover << 8) | 0xB0),
            ),
            ButtonVariant::Ghost => (rgb(colors.accent), rgba(0x00000000), hover_overlay),
            ButtonVariant::Danger => (rgb(colors.danger), rgba(0x00000000), hover_overlay),
        };

        let (px_val, py_val) = match self.variant {
            ButtonVariant::Primary => (px(12.), px(6.)),
            ButtonVariant::Ghost | ButtonVariant::Danger => (px(8.), px(4.)),
        };

        let mut button = div()
            .id(ElementId::Name(self.id))
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .px(px_val)
            .py(py_val)
            .rounded(px(6.))
            .border_1()
            .border_color(rgb(colors.border))
            .bg(bg_color)
            .text_color(text_color)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .child(self.label);

        if disabled {
            button = button.opacity(0.5).cursor_default();
        } else {
            button = button.cursor_pointer().hover(move |s| s.bg(hover_bg));
            if let Some(callback) = self.on_click {
                button = button.on_click(move |event, window, cx| {
                    callback(event, window, cx);
                });
            }
        }

        button
    }
}
