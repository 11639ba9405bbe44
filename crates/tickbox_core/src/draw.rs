//! Draw Context - Canvas API
//!
//! The `DrawContext` trait is the canvas every widget paints into. It keeps a
//! transform stack and exposes path filling and stroking, which is all the
//! vector drawing a control needs.
//!
//! # Example
//!
//! ```
//! use tickbox_core::{Color, DrawContext, DrawContextExt, Path, Rect, RecordingContext, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
//! {
//!     let mut scoped = ctx.scoped_transform(Transform::translate(10.0, 20.0));
//!     scoped.fill(&Path::rect(Rect::new(0.0, 0.0, 3.0, 26.0)), Color::WHITE);
//! }
//! // push + fill + pop
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use std::ops::{Deref, DerefMut};

use smallvec::{smallvec, SmallVec};

use crate::color::{Brush, Color, CornerRadius};
use crate::geometry::{Point, Rect, Size, Transform};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit (for Miter joins)
    pub miter_limit: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 10.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Black,
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in points
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Text color
    pub color: Color,
    /// Line height multiplier
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "system-ui".to_string(),
            size: 17.0,
            weight: FontWeight::Regular,
            color: Color::BLACK,
            line_height: 1.2,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font family
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Cubic Bézier circle approximation constant
const KAPPA: f32 = 0.552_284_8;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.min_x(), rect.min_y())
            .line_to(rect.max_x(), rect.min_y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.min_x(), rect.max_y())
            .close()
    }

    /// Create an ellipse path inscribed in `rect`
    pub fn oval(rect: Rect) -> Self {
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let Point { x: cx, y: cy } = rect.center();
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        Self::new()
            .move_to(cx + rx, cy)
            .cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry)
            .cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy)
            .cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry)
            .cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy)
            .close()
    }

    /// Create a rounded rectangle path
    ///
    /// Radii are clamped to half the smaller side. Negative radii are passed
    /// through and simply skip the corner curve.
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        let r = corner_radius.into();
        let x = rect.x();
        let y = rect.y();
        let w = rect.width();
        let h = rect.height();

        let max_r = (w.min(h) / 2.0).max(0.0);
        let tl = r.top_left.min(max_r);
        let tr = r.top_right.min(max_r);
        let br = r.bottom_right.min(max_r);
        let bl = r.bottom_left.min(max_r);

        let k = KAPPA;

        let mut path = Self::new().move_to(x + tl.max(0.0), y);

        // Top edge
        path = path.line_to(x + w - tr.max(0.0), y);
        if tr > 0.0 {
            path = path.cubic_to(
                x + w - tr * (1.0 - k),
                y,
                x + w,
                y + tr * (1.0 - k),
                x + w,
                y + tr,
            );
        }

        // Right edge
        path = path.line_to(x + w, y + h - br.max(0.0));
        if br > 0.0 {
            path = path.cubic_to(
                x + w,
                y + h - br * (1.0 - k),
                x + w - br * (1.0 - k),
                y + h,
                x + w - br,
                y + h,
            );
        }

        // Bottom edge
        path = path.line_to(x + bl.max(0.0), y + h);
        if bl > 0.0 {
            path = path.cubic_to(
                x + bl * (1.0 - k),
                y + h,
                x,
                y + h - bl * (1.0 - k),
                x,
                y + h - bl,
            );
        }

        // Left edge
        path = path.line_to(x, y + tl.max(0.0));
        if tl > 0.0 {
            path = path.cubic_to(x, y + tl * (1.0 - k), x + tl * (1.0 - k), y, x + tl, y);
        }

        path.close()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Control-point bounding box of this path
    pub fn bounds(&self) -> Rect {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The canvas interface all widgets paint into
pub trait DrawContext {
    /// Push a transform onto the stack (concatenated with the current one)
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Transform;

    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.fill_path(&Path::rounded_rect(rect, corner_radius), brush);
    }

    /// Draw a single line of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Size of the drawing surface
    fn viewport_size(&self) -> Size;
}

/// Convenience methods over [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Fill a path with a color or brush
    fn fill<B: Into<Brush>>(&mut self, path: &Path, brush: B) {
        self.fill_path(path, brush.into());
    }

    /// Stroke a path with a color or brush
    fn stroke<B: Into<Brush>>(&mut self, path: &Path, stroke: &Stroke, brush: B) {
        self.stroke_path(path, stroke, brush.into());
    }

    /// Push `transform` and return a guard that pops it when dropped
    ///
    /// The guard derefs to the context, so drawing goes through it while the
    /// transform is active.
    fn scoped_transform(&mut self, transform: Transform) -> TransformGuard<'_, Self> {
        self.push_transform(transform);
        TransformGuard { ctx: self }
    }
}

impl<T: DrawContext + ?Sized> DrawContextExt for T {}

/// Saved transform state; restores the previous transform on drop
pub struct TransformGuard<'a, C: DrawContext + ?Sized> {
    ctx: &'a mut C,
}

impl<C: DrawContext + ?Sized> Deref for TransformGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> DerefMut for TransformGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> Drop for TransformGuard<'_, C> {
    fn drop(&mut self) {
        self.ctx.pop_transform();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: SmallVec<[Transform; 4]>,
    viewport: Size,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: smallvec![Transform::identity()],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack = smallvec![Transform::identity()];
    }

    /// Depth of the transform stack, excluding the root
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len() - 1
    }

    /// Recorded fills, in order
    pub fn fills(&self) -> impl Iterator<Item = (&Path, &Brush)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillPath { path, brush } => Some((path, brush)),
            _ => None,
        })
    }

    /// Recorded strokes, in order
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &Stroke, &Brush)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::StrokePath {
                path,
                stroke,
                brush,
            } => Some((path, stroke, brush)),
            _ => None,
        })
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        } else {
            tracing::warn!("pop_transform called without a matching push");
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
