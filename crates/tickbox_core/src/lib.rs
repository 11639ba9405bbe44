//! Tickbox Core
//!
//! Foundational types shared by every Tickbox crate:
//!
//! - **Geometry**: points, sizes, rectangles, edge insets and affine transforms
//! - **Color**: RGBA colors, brushes and corner radii
//! - **Draw Context**: the canvas trait widgets paint into, vector paths, and
//!   a recording implementation used for tests and deferred rendering
//!
//! # Example
//!
//! ```
//! use tickbox_core::{Color, DrawContextExt, Path, Rect, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(30.0, 30.0));
//! ctx.fill(&Path::oval(Rect::new(0.0, 0.0, 30.0, 30.0)), Color::from_hex(0x287FEE));
//! assert_eq!(ctx.fills().count(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Brush, Color, CornerRadius};
pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, FontWeight, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, Stroke, TextStyle, TransformGuard,
};
pub use geometry::{EdgeInsets, Point, Rect, Size, Transform};
