//! Checkmark glyph geometry
//!
//! Each glyph is laid out against the checkbox's drawing rect (its bounds
//! inset by half the border width). The numbers below define the look of the
//! glyphs and are kept exactly as designed.

use std::f32::consts::PI;

use tickbox_core::{Color, DrawContext, DrawContextExt, Path, Point, Rect, Transform};

/// Glyph drawn inside the box when checked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckboxStyle {
    /// Rounded square inset from the border
    Square,
    /// Filled ellipse
    Circle,
    /// Two crossed bars
    Cross,
    /// Classic checkmark
    #[default]
    Tick,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tick
// ─────────────────────────────────────────────────────────────────────────────

/// Tick outline as (x, y) fractions of the drawing rect
const TICK_START: (f32, f32) = (0.26, 0.50);
const TICK_INNER_CURVE: [(f32, f32); 3] = [(0.38, 0.60), (0.42, 0.62), (0.42, 0.62)];
const TICK_LONG_ARM_TOP: (f32, f32) = (0.70, 0.24);
const TICK_LONG_ARM_EDGE: (f32, f32) = (0.78, 0.30);
const TICK_VERTEX: (f32, f32) = (0.44, 0.76);
const TICK_OUTER_CURVE: [(f32, f32); 3] = [(0.44, 0.76), (0.26, 0.62), (0.20, 0.58)];

fn at(frame: Rect, (fx, fy): (f32, f32)) -> Point {
    Point::new(
        frame.min_x() + fx * frame.width(),
        frame.min_y() + fy * frame.height(),
    )
}

/// Filled tick shape: two cubic segments joined by three straight edges
pub fn tick_path(frame: Rect) -> Path {
    let start = at(frame, TICK_START);
    let [c1, c2, inner] = TICK_INNER_CURVE.map(|p| at(frame, p));
    let top = at(frame, TICK_LONG_ARM_TOP);
    let edge = at(frame, TICK_LONG_ARM_EDGE);
    let vertex = at(frame, TICK_VERTEX);
    let [d1, d2, end] = TICK_OUTER_CURVE.map(|p| at(frame, p));

    Path::new()
        .move_to(start.x, start.y)
        .cubic_to(c1.x, c1.y, c2.x, c2.y, inner.x, inner.y)
        .line_to(top.x, top.y)
        .line_to(edge.x, edge.y)
        .line_to(vertex.x, vertex.y)
        .cubic_to(d1.x, d1.y, d2.x, d2.y, end.x, end.y)
}

// ─────────────────────────────────────────────────────────────────────────────
// Circle
// ─────────────────────────────────────────────────────────────────────────────

const CIRCLE_MIN: f32 = 0.22;
const CIRCLE_MAX_X: f32 = 0.76;
const CIRCLE_MAX_Y: f32 = 0.78;

/// Round to the nearest whole point, halves rounding up
fn pixel_round(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Rect the circle glyph is inscribed in
pub fn circle_rect(frame: Rect) -> Rect {
    let left = pixel_round(frame.width() * CIRCLE_MIN);
    let top = pixel_round(frame.height() * CIRCLE_MIN);
    let right = pixel_round(frame.width() * CIRCLE_MAX_X);
    let bottom = pixel_round(frame.height() * CIRCLE_MAX_Y);
    Rect::new(
        frame.min_x() + left,
        frame.min_y() + top,
        right - left,
        bottom - top,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Inner square
// ─────────────────────────────────────────────────────────────────────────────

/// Inset as a fraction of the checkbox's own width, not the drawing rect
const INNER_SQUARE_PADDING: f32 = 0.3;
const INNER_SQUARE_RADIUS: f32 = 3.0;

/// Rect of the inner square glyph
pub fn inner_square_rect(frame: Rect, widget_width: f32) -> Rect {
    let padding = widget_width * INNER_SQUARE_PADDING;
    frame.inset(padding, padding)
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross
// ─────────────────────────────────────────────────────────────────────────────

/// Logical size of the two-bar group
const CROSS_GROUP_WIDTH: f32 = 17.37;
const CROSS_GROUP_HEIGHT: f32 = 23.02;
/// Centering factors for the group inside the drawing rect
const CROSS_CENTER_X: f32 = 0.49035;
const CROSS_CENTER_Y: f32 = 0.51819;
/// Pivot offsets of each bar within the group
const CROSS_FIRST_PIVOT: (f32, f32) = (14.91, 0.0);
const CROSS_SECOND_PIVOT: (f32, f32) = (0.0, 1.72);
const CROSS_ANGLE_DEGREES: f32 = 35.0;

/// A single bar before rotation
pub const CROSS_BAR: Rect = Rect::new(0.0, 0.0, 3.0, 26.0);

/// Placement of the two-bar group inside the drawing rect
pub fn cross_group(frame: Rect) -> Rect {
    let x = frame.min_x() + pixel_round((frame.width() - CROSS_GROUP_WIDTH) * CROSS_CENTER_X);
    let y = frame.min_y()
        + ((frame.height() - CROSS_GROUP_HEIGHT) * CROSS_CENTER_Y - 0.48).floor()
        + 0.98;
    Rect::new(x, y, CROSS_GROUP_WIDTH, CROSS_GROUP_HEIGHT)
}

/// Transforms placing [`CROSS_BAR`] for each stroke of the cross
pub fn cross_transforms(frame: Rect) -> [Transform; 2] {
    let group = cross_group(frame);
    let angle = CROSS_ANGLE_DEGREES * PI / 180.0;
    [
        Transform::translate(
            group.min_x() + CROSS_FIRST_PIVOT.0,
            group.min_y() + CROSS_FIRST_PIVOT.1,
        )
        .then(&Transform::rotate(angle)),
        Transform::translate(
            group.min_x() + CROSS_SECOND_PIVOT.0,
            group.min_y() + CROSS_SECOND_PIVOT.1,
        )
        .then(&Transform::rotate(-angle)),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Drawing
// ─────────────────────────────────────────────────────────────────────────────

/// Fill the glyph for `style` into `ctx`
pub fn draw_glyph(
    ctx: &mut dyn DrawContext,
    style: CheckboxStyle,
    frame: Rect,
    widget_width: f32,
    color: Color,
) {
    match style {
        CheckboxStyle::Tick => ctx.fill(&tick_path(frame), color),
        CheckboxStyle::Circle => ctx.fill(&Path::oval(circle_rect(frame)), color),
        CheckboxStyle::Square => ctx.fill(
            &Path::rounded_rect(inner_square_rect(frame, widget_width), INNER_SQUARE_RADIUS),
            color,
        ),
        CheckboxStyle::Cross => {
            for transform in cross_transforms(frame) {
                let mut bar = ctx.scoped_transform(transform);
                bar.fill(&Path::rect(CROSS_BAR), color);
            }
        }
    }
}
