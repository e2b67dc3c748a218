//! Reusable UI Components
//!
//! # Components
//!
//! - [`Button`] - Interactive button with variants (Primary, Ghost, Danger)
//! - [`FormTextField`] - Labelled single-line text input with an optional input filter
//! - [`FormCheckbox`] - Checkbox with label
//! - [`FormSelect`] - Single-choice dropdown
//!
//! # Design Patterns
//!
//! All components follow these patterns:
//! - **Colors struct**: Pre-computed colors (Copy/Clone) for efficient closure use
//! - **Builder pattern**: Fluent API with `.method()` chaining
//! - **Theme integration**: Use `from_theme()` for colors
//! - **Plain state**: editing/selection state ([`TextBuffer`], [`SelectState`])
//!   is kept apart from rendering so it can be tested without a window

pub mod button;
pub mod form_fields;
#[cfg(test)]
mod form_fields_tests;
pub mod select;

pub use button::{Button, ButtonColors, ButtonVariant};
pub use form_fields::{FormCheckbox, FormFieldColors, FormTextField, InputFilter, TextBuffer};
pub use select::{FormSelect, SelectState};
