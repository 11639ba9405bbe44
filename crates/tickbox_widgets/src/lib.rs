//! Tickbox Widget Library
//!
//! A custom-drawn checkbox control and a labeled composite built on it.
//!
//! # Architecture
//!
//! 1. **Immediate drawing**: widgets paint vector paths into any
//!    [`tickbox_core::DrawContext`] on demand and raise a redraw flag
//!    (`needs_display`) when their state or frame changes.
//!
//! 2. **Touch routing**: hosts feed window-space [`tickbox_platform::TouchEvent`]s
//!    to `handle_touch`; a completed tap inside the enlarged hit area toggles
//!    the box.
//!
//! 3. **Constraint layout**: composites pin their children with
//!    [`Anchors`] on a Taffy-backed [`LayoutTree`].
//!
//! # Example
//!
//! ```
//! use tickbox_core::{Rect, RecordingContext, Size};
//! use tickbox_widgets::prelude::*;
//!
//! let mut view = CheckboxWithLabel::new(Rect::new(0.0, 0.0, 210.0, 190.0));
//! view.configure_view("Accept the terms", None);
//! view.check_box.set_checked(true);
//!
//! let mut ctx = RecordingContext::new(Size::new(375.0, 667.0));
//! view.paint(&mut ctx);
//! assert!(ctx.fills().count() >= 2);
//! ```

pub mod checkbox;
pub mod control;
pub mod glyph;
pub mod label;
pub mod labeled;
pub mod layout;
pub mod text_measure;

pub use checkbox::{BorderStyle, Checkbox, CheckboxConfig, CheckboxDelegate};
pub use control::{ValueChangedHandler, ValueChangedTargets};
pub use glyph::CheckboxStyle;
pub use label::{FontSpec, Label};
pub use labeled::CheckboxWithLabel;
pub use layout::{
    centered_style, container_style, Anchors, LayoutError, LayoutNodeId, LayoutTree,
    TextMeasureContext,
};
pub use text_measure::{
    EstimatedTextMeasurer, SharedTextMeasurer, TextLayoutOptions, TextMeasurer, TextMetrics,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::checkbox::{BorderStyle, Checkbox, CheckboxConfig, CheckboxDelegate};
    pub use crate::glyph::CheckboxStyle;
    pub use crate::label::{FontSpec, Label};
    pub use crate::labeled::CheckboxWithLabel;
}
