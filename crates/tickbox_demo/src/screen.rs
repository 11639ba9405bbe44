//! Demo screen: two standalone checkboxes and a labeled checkbox

use std::cell::Cell;
use std::rc::Rc;

use tickbox_core::{Color, DrawContext, DrawContextExt, Path, Point, Rect, Size};
use tickbox_platform::{HapticEngine, TouchEvent};
use tickbox_widgets::layout::{self, Anchors, LayoutNodeId, LayoutTree};
use tickbox_widgets::{Checkbox, CheckboxConfig, CheckboxDelegate, CheckboxWithLabel, FontSpec};
use tracing::info;

use crate::config::{ConfigError, DemoConfig};

/// Frame of the first checkbox, placed without layout
pub const CHECKBOX1_FRAME: Rect = Rect::new(90.0, 90.0, 30.0, 30.0);
/// Size of the labeled composite, centered on screen
pub const LABELED_SIZE: Size = Size::new(210.0, 190.0);

/// Logs every state change it is told about
#[derive(Debug, Default)]
pub struct LogDelegate {
    notifications: Cell<usize>,
}

impl LogDelegate {
    pub fn notifications(&self) -> usize {
        self.notifications.get()
    }
}

impl CheckboxDelegate for LogDelegate {
    fn selected(&self, state: bool) {
        self.notifications.set(self.notifications.get() + 1);
        info!("STATE: {}", state);
    }
}

/// Errors raised while building the screen
#[derive(thiserror::Error, Debug)]
pub enum ScreenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] layout::LayoutError),
}

/// Which widget a tap is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Checkbox1,
    Checkbox2,
    Labeled,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Checkbox1, Target::Checkbox2, Target::Labeled];

    pub fn name(&self) -> &'static str {
        match self {
            Target::Checkbox1 => "checkbox1",
            Target::Checkbox2 => "checkbox2",
            Target::Labeled => "labeled",
        }
    }
}

pub struct Screen {
    viewport: Size,
    layout: LayoutTree,
    root: LayoutNodeId,
    checkbox2_node: LayoutNodeId,
    labeled_node: LayoutNodeId,
    pub checkbox1: Checkbox,
    pub checkbox2: Checkbox,
    pub labeled: CheckboxWithLabel,
    delegate: Rc<LogDelegate>,
    next_touch_id: u64,
}

impl Screen {
    pub fn new(config: &DemoConfig, haptics: Rc<dyn HapticEngine>) -> Result<Self, ScreenError> {
        let viewport = Size::new(config.viewport.width, config.viewport.height);
        let delegate = Rc::new(LogDelegate::default());

        let mut checkbox1 = Checkbox::new(CHECKBOX1_FRAME);
        *checkbox1.config_mut() = config.checkbox1.apply(CheckboxConfig::default())?;

        let mut checkbox2 = Checkbox::new(Rect::ZERO);
        *checkbox2.config_mut() = config.checkbox2.apply(CheckboxConfig::default())?;

        let mut labeled = CheckboxWithLabel::new(LABELED_SIZE.to_rect());
        *labeled.check_box.config_mut() = config
            .labeled
            .appearance
            .apply(CheckboxConfig::default())?;
        labeled.set_background_color(Some(Color::YELLOW));
        labeled.label.set_background_color(Some(Color::CYAN));
        labeled.configure_view(
            config.labeled.text.clone(),
            config.labeled.font_size.map(FontSpec::system),
        );

        for checkbox in [&mut checkbox1, &mut checkbox2, &mut labeled.check_box] {
            checkbox.set_delegate(&delegate);
            checkbox.set_haptic_engine(haptics.clone());
        }

        let mut tree = LayoutTree::new();
        let root = tree.create_node(layout::container_style(viewport.width, viewport.height))?;
        let checkbox2_node = tree.create_node(
            Anchors::new()
                .top(180.0)
                .leading(30.0)
                .size(110.0, 60.0)
                .to_style(),
        )?;
        let labeled_node =
            tree.create_node(layout::centered_style(LABELED_SIZE.width, LABELED_SIZE.height))?;
        tree.add_child(root, checkbox2_node)?;
        tree.add_child(root, labeled_node)?;

        let mut screen = Self {
            viewport,
            layout: tree,
            root,
            checkbox2_node,
            labeled_node,
            checkbox1,
            checkbox2,
            labeled,
            delegate,
            next_touch_id: 0,
        };
        screen.layout_subviews()?;
        Ok(screen)
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn delegate(&self) -> &LogDelegate {
        &self.delegate
    }

    /// Resolve constraint-placed frames
    pub fn layout_subviews(&mut self) -> Result<(), layout::LayoutError> {
        self.layout
            .compute_layout_in(self.root, self.viewport.width, self.viewport.height)?;

        if let Some(frame) = self.layout.frame(self.checkbox2_node, (0.0, 0.0)) {
            self.checkbox2.set_frame(frame);
        }
        if let Some(frame) = self.layout.frame(self.labeled_node, (0.0, 0.0)) {
            self.labeled.set_frame(frame);
        }
        Ok(())
    }

    /// Offer a touch to the widgets, topmost first
    pub fn dispatch(&mut self, event: &TouchEvent) -> bool {
        self.labeled.handle_touch(event)
            || self.checkbox2.handle_touch(event)
            || self.checkbox1.handle_touch(event)
    }

    /// A complete tap (down then up) at `point`
    pub fn tap(&mut self, point: Point) -> bool {
        self.next_touch_id += 1;
        let id = self.next_touch_id;
        let began = self.dispatch(&TouchEvent::Started {
            id,
            x: point.x,
            y: point.y,
            pressure: 1.0,
        });
        let ended = self.dispatch(&TouchEvent::Ended {
            id,
            x: point.x,
            y: point.y,
        });
        began && ended
    }

    /// Window-space center of a target's checkbox
    pub fn target_center(&self, target: Target) -> Point {
        match target {
            Target::Checkbox1 => self.checkbox1.frame().center(),
            Target::Checkbox2 => self.checkbox2.frame().center(),
            Target::Labeled => {
                let origin = self.labeled.frame();
                self.labeled
                    .check_box
                    .frame()
                    .offset(origin.x(), origin.y())
                    .center()
            }
        }
    }

    pub fn is_checked(&self, target: Target) -> bool {
        match target {
            Target::Checkbox1 => self.checkbox1.is_checked(),
            Target::Checkbox2 => self.checkbox2.is_checked(),
            Target::Labeled => self.labeled.check_box.is_checked(),
        }
    }

    /// Draw the whole screen in window space
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.fill(&Path::rect(self.viewport.to_rect()), Color::WHITE);
        self.checkbox1.paint(ctx);
        self.checkbox2.paint(ctx);
        self.labeled.paint(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickbox_core::RecordingContext;
    use tickbox_platform::NoopHaptics;

    fn screen() -> Screen {
        Screen::new(&DemoConfig::default(), Rc::new(NoopHaptics)).unwrap()
    }

    #[test]
    fn test_default_frames() {
        let screen = screen();
        assert_eq!(screen.checkbox1.frame(), CHECKBOX1_FRAME);
        assert_eq!(
            screen.checkbox2.frame(),
            Rect::new(30.0, 180.0, 110.0, 60.0)
        );

        let labeled = screen.labeled.frame();
        assert!((labeled.x() - 82.5).abs() < 1e-3);
        assert!((labeled.y() - 238.5).abs() < 1e-3);
        assert_eq!(labeled.size(), LABELED_SIZE);
        assert_eq!(
            screen.labeled.label.text(),
            "Este es un mensaje de prueba para el checkBox"
        );
    }

    #[test]
    fn test_taps_reach_each_widget() {
        let mut screen = screen();
        for target in Target::ALL {
            let center = screen.target_center(target);
            assert!(screen.tap(center), "{}", target.name());
            assert!(screen.is_checked(target), "{}", target.name());
        }
        assert_eq!(screen.delegate().notifications(), 3);
    }

    #[test]
    fn test_tap_on_empty_space_is_ignored() {
        let mut screen = screen();
        assert!(!screen.tap(Point::new(350.0, 20.0)));
        assert!(Target::ALL.iter().all(|t| !screen.is_checked(*t)));
    }

    #[test]
    fn test_disabled_haptics_silence_delegate() {
        let config = DemoConfig::parse("[checkbox1]\nhaptics = false").unwrap();
        let mut screen = Screen::new(&config, Rc::new(NoopHaptics)).unwrap();
        let center = screen.target_center(Target::Checkbox1);
        screen.tap(center);
        assert!(screen.is_checked(Target::Checkbox1));
        assert_eq!(screen.delegate().notifications(), 0);
    }

    #[test]
    fn test_render() {
        let screen = screen();
        let mut ctx = RecordingContext::new(screen.viewport());
        screen.render(&mut ctx);

        // Three unchecked boxes are stroked
        assert_eq!(ctx.strokes().count(), 3);
        assert_eq!(ctx.transform_depth(), 0);
    }

    #[test]
    fn test_invalid_color_fails_construction() {
        let config = DemoConfig::parse("[checkbox2]\ncheckmark_color = \"blue\"").unwrap();
        assert!(matches!(
            Screen::new(&config, Rc::new(NoopHaptics)),
            Err(ScreenError::Config(ConfigError::InvalidColor { .. }))
        ));
    }
}
