//! Custom-drawn checkbox control
//!
//! The Checkbox widget provides:
//! - A boolean checked state flipped once per completed tap
//! - Square, rounded-square or circular border drawn as a vector path
//! - Four checkmark glyphs (see [`CheckboxStyle`])
//! - An enlarged touch target around the visible box
//! - Optional haptic feedback on release
//! - A weakly held [`CheckboxDelegate`] notified of user toggles
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickbox_core::Rect;
//! use tickbox_platform::TouchEvent;
//! use tickbox_widgets::{Checkbox, CheckboxDelegate};
//!
//! struct Listener(Cell<Option<bool>>);
//!
//! impl CheckboxDelegate for Listener {
//!     fn selected(&self, state: bool) {
//!         self.0.set(Some(state));
//!     }
//! }
//!
//! let listener = Rc::new(Listener(Cell::new(None)));
//! let mut checkbox = Checkbox::new(Rect::new(90.0, 90.0, 30.0, 30.0));
//! checkbox.set_delegate(&listener);
//!
//! checkbox.handle_touch(&TouchEvent::Started { id: 1, x: 100.0, y: 100.0, pressure: 1.0 });
//! checkbox.handle_touch(&TouchEvent::Ended { id: 1, x: 100.0, y: 100.0 });
//!
//! assert!(checkbox.is_checked());
//! assert_eq!(listener.0.get(), Some(true));
//! ```

use std::fmt;
use std::rc::{Rc, Weak};

use tickbox_core::{Color, DrawContext, DrawContextExt, Path, Point, Rect, Stroke, Transform};
use tickbox_platform::{
    HapticEngine, HapticFeedback, ImpactStyle, InputEvent, NoopHaptics, TouchEvent,
};

use crate::control::ValueChangedTargets;
use crate::glyph::{draw_glyph, CheckboxStyle};

/// Receives the new state after a user toggle
pub trait CheckboxDelegate {
    fn selected(&self, state: bool);
}

/// Shape of the checkbox border
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderStyle {
    /// Sharp-cornered square
    Square,
    /// Square with rounded corners
    RoundedSquare { radius: f32 },
    /// Ellipse inscribed in the box
    Rounded,
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::RoundedSquare { radius: 2.75 }
    }
}

impl BorderStyle {
    /// Border outline for `rect`
    pub fn path(&self, rect: Rect) -> Path {
        match *self {
            BorderStyle::Square => Path::rect(rect),
            BorderStyle::RoundedSquare { radius } => Path::rounded_rect(rect, radius),
            BorderStyle::Rounded => Path::oval(rect),
        }
    }
}

/// Checkbox appearance and behavior
#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxConfig {
    /// Border shape
    pub border_style: BorderStyle,
    /// Border stroke width
    pub border_width: f32,
    /// Fill of the box when checked
    pub checked_background_color: Color,
    /// Border color when checked
    ///
    /// Never painted: a checked box is filled, not stroked.
    pub checked_border_color: Color,
    /// Glyph color
    pub checkmark_color: Color,
    /// Relative glyph size
    pub checkmark_size: f32,
    /// Extra touch area outside every edge
    pub increased_touch_radius: f32,
    /// Glyph drawn when checked
    pub style: CheckboxStyle,
    pub unchecked_background_color: Color,
    /// Border color when unchecked
    pub unchecked_border_color: Color,
    /// Pulse on release and notify the delegate
    pub use_haptic_feedback: bool,
    /// Strength of the release pulse
    pub haptic_style: ImpactStyle,
}

/// Accent blue used for the checked box
pub const ACCENT_BLUE: u32 = 0x287FEE;
/// Gray used for the unchecked border
pub const BORDER_GRAY: u32 = 0x808080;

impl Default for CheckboxConfig {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::default(),
            border_width: 3.15,
            checked_background_color: Color::from_hex(ACCENT_BLUE),
            checked_border_color: Color::from_hex(ACCENT_BLUE),
            checkmark_color: Color::WHITE,
            checkmark_size: 0.5,
            increased_touch_radius: 3.0,
            style: CheckboxStyle::Tick,
            unchecked_background_color: Color::WHITE,
            unchecked_border_color: Color::from_hex(BORDER_GRAY),
            use_haptic_feedback: true,
            haptic_style: ImpactStyle::Light,
        }
    }
}

impl CheckboxConfig {
    /// Create a new checkbox config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the checked fill color
    pub fn checked_background_color(mut self, color: Color) -> Self {
        self.checked_background_color = color;
        self
    }

    pub fn checked_border_color(mut self, color: Color) -> Self {
        self.checked_border_color = color;
        self
    }

    pub fn checkmark_color(mut self, color: Color) -> Self {
        self.checkmark_color = color;
        self
    }

    pub fn checkmark_size(mut self, size: f32) -> Self {
        self.checkmark_size = size;
        self
    }

    pub fn unchecked_background_color(mut self, color: Color) -> Self {
        self.unchecked_background_color = color;
        self
    }

    pub fn unchecked_border_color(mut self, color: Color) -> Self {
        self.unchecked_border_color = color;
        self
    }

    /// Set the extra touch area around the box
    pub fn increased_touch_radius(mut self, radius: f32) -> Self {
        self.increased_touch_radius = radius;
        self
    }

    /// Enable or disable haptic feedback
    pub fn haptic_feedback(mut self, enabled: bool) -> Self {
        self.use_haptic_feedback = enabled;
        self
    }

    pub fn haptic_style(mut self, style: ImpactStyle) -> Self {
        self.haptic_style = style;
        self
    }
}

/// A tappable checkbox
pub struct Checkbox {
    /// Frame in the parent's coordinate space
    frame: Rect,
    config: CheckboxConfig,
    is_checked: bool,
    /// View background behind the box, painted over the whole frame
    background_color: Option<Color>,
    delegate: Option<Weak<dyn CheckboxDelegate>>,
    haptics: Rc<dyn HapticEngine>,
    /// Generator acquired on tap-begin, consumed on tap-end
    feedback_generator: Option<Box<dyn HapticFeedback>>,
    /// Touch currently pressing the box
    tracked_touch: Option<u64>,
    value_changed: ValueChangedTargets,
    needs_display: bool,
}

impl Checkbox {
    /// Create an unchecked checkbox with the default appearance and a clear
    /// background
    pub fn new(frame: Rect) -> Self {
        let mut checkbox = Self::with_config(frame, CheckboxConfig::default());
        checkbox.background_color = Some(Color::TRANSPARENT);
        checkbox
    }

    /// Create an unchecked checkbox with an explicit glyph and border shape
    pub fn with_style(frame: Rect, style: CheckboxStyle, border_style: BorderStyle) -> Self {
        Self::with_config(
            frame,
            CheckboxConfig::default()
                .style(style)
                .border_style(border_style),
        )
    }

    /// Create an unchecked checkbox from a full config
    pub fn with_config(frame: Rect, config: CheckboxConfig) -> Self {
        Self {
            frame,
            config,
            is_checked: false,
            background_color: None,
            delegate: None,
            haptics: Rc::new(NoopHaptics),
            feedback_generator: None,
            tracked_touch: None,
            value_changed: ValueChangedTargets::new(),
            needs_display: true,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Set the state without notifying anyone
    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
        self.set_needs_display();
    }

    pub fn config(&self) -> &CheckboxConfig {
        &self.config
    }

    /// Mutable access to the appearance; schedules a redraw
    pub fn config_mut(&mut self) -> &mut CheckboxConfig {
        self.set_needs_display();
        &mut self.config
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
        self.set_needs_display();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Local bounds: the frame's size at the origin
    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    /// Move or resize the checkbox; schedules a redraw when the frame changes
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            self.frame = frame;
            self.set_needs_display();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind the delegate without taking ownership of it
    pub fn set_delegate<D: CheckboxDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Bind an already type-erased delegate
    pub fn set_delegate_weak(&mut self, delegate: Weak<dyn CheckboxDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if one is bound and still alive
    pub fn delegate(&self) -> Option<Rc<dyn CheckboxDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Register a target fired on every user toggle, haptics or not
    pub fn on_value_changed<F>(&mut self, handler: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.value_changed.add(handler);
    }

    /// Replace the haptic engine (defaults to [`NoopHaptics`])
    pub fn set_haptic_engine(&mut self, engine: Rc<dyn HapticEngine>) {
        self.haptics = engine;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────────

    /// A touch went down on the box: acquire and pre-warm a generator
    pub fn tap_begin(&mut self) {
        let mut generator = self.haptics.generator(self.config.haptic_style);
        generator.prepare();
        self.feedback_generator = Some(generator);
    }

    /// A touch lifted: flip the state and notify
    ///
    /// The delegate is only told about the change when haptic feedback is
    /// enabled. Value-changed targets always fire.
    pub fn tap_end(&mut self) {
        self.is_checked = !self.is_checked;
        self.set_needs_display();
        tracing::debug!(checked = self.is_checked, "checkbox toggled");

        self.value_changed.send(self.is_checked);

        let generator = self.feedback_generator.take();
        if self.config.use_haptic_feedback {
            if let Some(mut generator) = generator {
                generator.impact_occurred();
            }
            if let Some(delegate) = self.delegate() {
                delegate.selected(self.is_checked);
            }
        }
    }

    /// Drop the pending generator without toggling
    pub fn tap_cancel(&mut self) {
        self.feedback_generator = None;
        self.tracked_touch = None;
    }

    /// Whether `point` (in local coordinates) hits the enlarged touch area
    pub fn hit_test(&self, point: Point) -> bool {
        let radius = self.config.increased_touch_radius;
        self.bounds().inset(-radius, -radius).contains(point)
    }

    /// Route a touch given in the parent's coordinate space
    ///
    /// Returns `true` when the event was consumed.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        match *event {
            TouchEvent::Started { id, x, y, .. } => {
                if self.tracked_touch.is_some() || !self.hit_test(self.to_local(x, y)) {
                    return false;
                }
                self.tracked_touch = Some(id);
                self.tap_begin();
                true
            }
            TouchEvent::Moved { id, .. } => self.tracked_touch == Some(id),
            TouchEvent::Ended { id, .. } => {
                if self.tracked_touch != Some(id) {
                    return false;
                }
                self.tracked_touch = None;
                self.tap_end();
                true
            }
            TouchEvent::Cancelled { id } => {
                if self.tracked_touch != Some(id) {
                    return false;
                }
                self.tap_cancel();
                true
            }
        }
    }

    /// Route a mouse or touch event given in the parent's coordinate space
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event.as_touch() {
            Some(touch) => self.handle_touch(&touch),
            None => false,
        }
    }

    fn to_local(&self, x: f32, y: f32) -> Point {
        Point::new(x - self.frame.x(), y - self.frame.y())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Read and clear the redraw request
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    pub fn set_needs_display(&mut self) {
        if !self.needs_display {
            tracing::trace!(frame = ?self.frame, "checkbox needs display");
        }
        self.needs_display = true;
    }

    /// Draw in local coordinates; a missing canvas draws nothing
    pub fn draw(&self, ctx: Option<&mut dyn DrawContext>) {
        let Some(ctx) = ctx else {
            return;
        };
        let bounds = self.bounds();

        if let Some(background) = self.background_color.filter(|c| !c.is_transparent()) {
            ctx.fill(&Path::rect(bounds), background);
        }

        let half_border = self.config.border_width / 2.0;
        let rect = bounds.inset(half_border, half_border);
        let shape = self.config.border_style.path(rect);

        if self.is_checked {
            ctx.fill(&shape, self.config.checked_background_color);
            draw_glyph(
                ctx,
                self.config.style,
                rect,
                bounds.width(),
                self.config.checkmark_color,
            );
        } else {
            ctx.stroke(
                &shape,
                &Stroke::new(self.config.border_width),
                self.config.unchecked_border_color,
            );
        }
    }

    /// Draw at the checkbox's frame in the parent's coordinate space
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let mut local = ctx.scoped_transform(Transform::translate(self.frame.x(), self.frame.y()));
        self.draw(Some(&mut *local));
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("frame", &self.frame)
            .field("is_checked", &self.is_checked)
            .field("config", &self.config)
            .field("has_delegate", &self.delegate().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tickbox_core::{DrawCommand, RecordingContext, Size};
    use tickbox_platform::{MouseButton, MouseEvent};

    #[derive(Default)]
    struct RecordingDelegate {
        calls: RefCell<Vec<bool>>,
    }

    impl CheckboxDelegate for RecordingDelegate {
        fn selected(&self, state: bool) {
            self.calls.borrow_mut().push(state);
        }
    }

    #[derive(Default)]
    struct RecordingHaptics {
        events: Rc<RefCell<Vec<String>>>,
    }

    struct RecordingGenerator {
        style: ImpactStyle,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl HapticEngine for RecordingHaptics {
        fn generator(&self, style: ImpactStyle) -> Box<dyn HapticFeedback> {
            Box::new(RecordingGenerator {
                style,
                events: self.events.clone(),
            })
        }
    }

    impl HapticFeedback for RecordingGenerator {
        fn prepare(&mut self) {
            self.events.borrow_mut().push(format!("prepare:{}", self.style));
        }

        fn impact_occurred(&mut self) {
            self.events.borrow_mut().push(format!("impact:{}", self.style));
        }
    }

    fn tap(checkbox: &mut Checkbox) {
        checkbox.tap_begin();
        checkbox.tap_end();
    }

    fn canvas() -> RecordingContext {
        RecordingContext::new(Size::new(30.0, 30.0))
    }

    #[test]
    fn test_new_checkbox_defaults() {
        let checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert!(!checkbox.is_checked());
        assert_eq!(checkbox.config(), &CheckboxConfig::default());
        assert_eq!(checkbox.background_color(), Some(Color::TRANSPARENT));
        assert_eq!(
            checkbox.config().border_style,
            BorderStyle::RoundedSquare { radius: 2.75 }
        );
    }

    #[test]
    fn test_with_style_skips_clear_background() {
        let checkbox = Checkbox::with_style(
            Rect::new(0.0, 0.0, 30.0, 30.0),
            CheckboxStyle::Cross,
            BorderStyle::Rounded,
        );
        assert_eq!(checkbox.background_color(), None);
        assert_eq!(checkbox.config().style, CheckboxStyle::Cross);
        assert_eq!(checkbox.config().border_width, 3.15);
    }

    #[test]
    fn test_taps_toggle_parity() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        for n in 1..=5 {
            tap(&mut checkbox);
            assert_eq!(checkbox.is_checked(), n % 2 == 1);
        }
    }

    #[test]
    fn test_set_checked_never_notifies() {
        let delegate = Rc::new(RecordingDelegate::default());
        let fired = Rc::new(RefCell::new(0));
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.set_delegate(&delegate);
        let counter = fired.clone();
        checkbox.on_value_changed(move |_| *counter.borrow_mut() += 1);

        checkbox.set_checked(true);

        assert!(checkbox.is_checked());
        assert!(delegate.calls.borrow().is_empty());
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_two_taps_notify_delegate_in_order() {
        let delegate = Rc::new(RecordingDelegate::default());
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.set_delegate(&delegate);

        tap(&mut checkbox);
        tap(&mut checkbox);

        assert_eq!(*delegate.calls.borrow(), [true, false]);
    }

    #[test]
    fn test_haptics_off_skips_delegate_but_fires_targets() {
        let delegate = Rc::new(RecordingDelegate::default());
        let haptics = RecordingHaptics::default();
        let events = haptics.events.clone();
        let values = Rc::new(RefCell::new(Vec::new()));

        let mut checkbox = Checkbox::with_config(
            Rect::new(0.0, 0.0, 30.0, 30.0),
            CheckboxConfig::new().haptic_feedback(false),
        );
        checkbox.set_delegate(&delegate);
        checkbox.set_haptic_engine(Rc::new(haptics));
        let sink = values.clone();
        checkbox.on_value_changed(move |v| sink.borrow_mut().push(v));

        tap(&mut checkbox);
        tap(&mut checkbox);

        assert!(!checkbox.is_checked());
        assert!(delegate.calls.borrow().is_empty());
        assert_eq!(*values.borrow(), [true, false]);
        // Generators are still prepared but never fired
        assert_eq!(*events.borrow(), ["prepare:light", "prepare:light"]);
    }

    #[test]
    fn test_haptic_pulse_on_release() {
        let haptics = RecordingHaptics::default();
        let events = haptics.events.clone();
        let mut checkbox = Checkbox::with_config(
            Rect::new(0.0, 0.0, 30.0, 30.0),
            CheckboxConfig::new().haptic_style(ImpactStyle::Medium),
        );
        checkbox.set_haptic_engine(Rc::new(haptics));

        checkbox.tap_begin();
        assert_eq!(*events.borrow(), ["prepare:medium"]);
        checkbox.tap_end();
        assert_eq!(*events.borrow(), ["prepare:medium", "impact:medium"]);

        // Generator is released after use
        checkbox.tap_end();
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_set_delegate_accepts_any_delegate_type() {
        struct Counter(std::cell::Cell<usize>);

        impl CheckboxDelegate for Counter {
            fn selected(&self, _state: bool) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        let recording = Rc::new(RecordingDelegate::default());
        checkbox.set_delegate(&recording);
        tap(&mut checkbox);

        let counter = Rc::new(Counter(std::cell::Cell::new(0)));
        checkbox.set_delegate(&counter);
        tap(&mut checkbox);

        checkbox.clear_delegate();
        tap(&mut checkbox);

        assert_eq!(*recording.calls.borrow(), vec![true]);
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn test_dropped_delegate_is_not_called() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        {
            let delegate = Rc::new(RecordingDelegate::default());
            checkbox.set_delegate(&delegate);
            assert!(checkbox.delegate().is_some());
        }
        assert!(checkbox.delegate().is_none());
        tap(&mut checkbox);
        assert!(checkbox.is_checked());
    }

    #[test]
    fn test_delegate_is_not_retained() {
        let delegate = Rc::new(RecordingDelegate::default());
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.set_delegate(&delegate);
        assert_eq!(Rc::strong_count(&delegate), 1);
    }

    #[test]
    fn test_hit_test_expands_by_touch_radius() {
        let checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert!(checkbox.hit_test(Point::new(-2.0, 15.0)));
        assert!(!checkbox.hit_test(Point::new(-4.0, 15.0)));

        for (x, y) in [(-3.0, 15.0), (33.0, 15.0), (15.0, -3.0), (15.0, 33.0)] {
            assert!(checkbox.hit_test(Point::new(x, y)), "({}, {})", x, y);
        }
        for (x, y) in [(-4.0, 15.0), (34.0, 15.0), (15.0, -4.0), (15.0, 34.0)] {
            assert!(!checkbox.hit_test(Point::new(x, y)), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_handle_touch_uses_frame_coordinates() {
        let mut checkbox = Checkbox::new(Rect::new(90.0, 90.0, 30.0, 30.0));

        // Outside the enlarged area
        assert!(!checkbox.handle_touch(&TouchEvent::Started {
            id: 1,
            x: 10.0,
            y: 10.0,
            pressure: 1.0
        }));
        assert!(!checkbox.handle_touch(&TouchEvent::Ended {
            id: 1,
            x: 10.0,
            y: 10.0
        }));
        assert!(!checkbox.is_checked());

        // Just outside the left edge but inside the touch radius
        assert!(checkbox.handle_touch(&TouchEvent::Started {
            id: 2,
            x: 88.0,
            y: 100.0,
            pressure: 1.0
        }));
        assert!(checkbox.handle_touch(&TouchEvent::Ended {
            id: 2,
            x: 200.0,
            y: 200.0
        }));
        assert!(checkbox.is_checked());
    }

    #[test]
    fn test_cancelled_touch_does_not_toggle() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.handle_touch(&TouchEvent::Started {
            id: 7,
            x: 15.0,
            y: 15.0,
            pressure: 1.0,
        });
        assert!(checkbox.handle_touch(&TouchEvent::Cancelled { id: 7 }));
        assert!(!checkbox.handle_touch(&TouchEvent::Ended {
            id: 7,
            x: 15.0,
            y: 15.0
        }));
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn test_mouse_click_toggles() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.handle_input(&InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: 15.0,
            y: 15.0,
        }));
        checkbox.handle_input(&InputEvent::Mouse(MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: 15.0,
            y: 15.0,
        }));
        assert!(checkbox.is_checked());
    }

    #[test]
    fn test_unchecked_render_strokes_only() {
        let checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        let mut ctx = canvas();
        checkbox.draw(Some(&mut ctx));

        assert_eq!(ctx.fills().count(), 0);
        let strokes: Vec<_> = ctx.strokes().collect();
        assert_eq!(strokes.len(), 1);
        let (path, stroke, brush) = strokes[0];
        assert_eq!(stroke.width, 3.15);
        assert_eq!(brush.color(), Color::from_hex(BORDER_GRAY));
        // Border drawn on the half-width inset
        let bounds = path.bounds();
        assert!((bounds.x() - 1.575).abs() < 1e-4);
        assert!((bounds.width() - 26.85).abs() < 1e-4);
    }

    #[test]
    fn test_checked_render_fills_and_draws_one_glyph() {
        for style in [
            CheckboxStyle::Tick,
            CheckboxStyle::Circle,
            CheckboxStyle::Square,
        ] {
            let mut checkbox = Checkbox::with_style(
                Rect::new(0.0, 0.0, 30.0, 30.0),
                style,
                BorderStyle::Square,
            );
            checkbox.set_checked(true);
            let mut ctx = canvas();
            checkbox.draw(Some(&mut ctx));

            assert_eq!(ctx.strokes().count(), 0);
            let fills: Vec<_> = ctx.fills().collect();
            assert_eq!(fills.len(), 2, "{:?}", style);
            assert_eq!(fills[0].1.color(), Color::from_hex(ACCENT_BLUE));
            assert_eq!(fills[1].1.color(), Color::WHITE);
        }
    }

    #[test]
    fn test_checked_cross_draws_two_scoped_bars() {
        let mut checkbox = Checkbox::with_style(
            Rect::new(0.0, 0.0, 30.0, 30.0),
            CheckboxStyle::Cross,
            BorderStyle::Rounded,
        );
        checkbox.set_checked(true);
        let mut ctx = canvas();
        checkbox.draw(Some(&mut ctx));

        let pushes = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::PushTransform(_)))
            .count();
        assert_eq!(pushes, 2);
        assert_eq!(ctx.fills().count(), 3);
        assert_eq!(ctx.transform_depth(), 0);
    }

    #[test]
    fn test_visible_background_is_painted_first() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.set_background_color(Some(Color::YELLOW));
        let mut ctx = canvas();
        checkbox.draw(Some(&mut ctx));

        let fills: Vec<_> = ctx.fills().collect();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].1.color(), Color::YELLOW);
        assert_eq!(ctx.strokes().count(), 1);
    }

    #[test]
    fn test_draw_without_canvas_is_noop() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        checkbox.set_checked(true);
        checkbox.draw(None);
    }

    #[test]
    fn test_paint_translates_to_frame() {
        let checkbox = Checkbox::new(Rect::new(90.0, 90.0, 30.0, 30.0));
        let mut ctx = RecordingContext::new(Size::new(375.0, 667.0));
        checkbox.paint(&mut ctx);

        let commands = ctx.commands();
        assert!(matches!(
            commands.first(),
            Some(DrawCommand::PushTransform(t)) if *t == Transform::translate(90.0, 90.0)
        ));
        assert!(matches!(commands.last(), Some(DrawCommand::PopTransform)));
        assert_eq!(ctx.transform_depth(), 0);
    }

    #[test]
    fn test_redraw_requests() {
        let mut checkbox = Checkbox::new(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert!(checkbox.take_needs_display());
        assert!(!checkbox.needs_display());

        checkbox.set_frame(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert!(!checkbox.needs_display());

        checkbox.set_frame(Rect::new(10.0, 0.0, 30.0, 30.0));
        assert!(checkbox.take_needs_display());

        tap(&mut checkbox);
        assert!(checkbox.take_needs_display());

        checkbox.set_checked(false);
        assert!(checkbox.take_needs_display());
    }
}
