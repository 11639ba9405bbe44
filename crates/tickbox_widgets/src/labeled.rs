//! Checkbox with a wrapping text label beside it
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ 8                                    │
//! │ ┌──┐ 4 ┌───────────────────────┐  8  │
//! │8│☑ │   │ label, wraps, grows   │     │
//! │ └──┘   │ down to bottom - 8    │     │
//! │        └───────────────────────┘     │
//! └──────────────────────────────────────┘
//! ```

use std::rc::{Rc, Weak};

use tickbox_core::{Color, DrawContext, DrawContextExt, Path, Rect, Transform};
use tickbox_platform::{InputEvent, TouchEvent};

use crate::checkbox::{Checkbox, CheckboxDelegate};
use crate::label::{FontSpec, Label};
use crate::layout::{self, Anchors, LayoutNodeId, LayoutTree};

/// Fixed size of the embedded checkbox
pub const CHECKBOX_SIZE: f32 = 30.0;
/// Margin between the content and the container edges
pub const MARGIN: f32 = 8.0;
/// Gap between the checkbox and the label
pub const SPACING: f32 = 4.0;

struct CompositeLayout {
    tree: LayoutTree,
    root: LayoutNodeId,
    checkbox: LayoutNodeId,
    label: LayoutNodeId,
}

impl CompositeLayout {
    fn build(size: tickbox_core::Size, label: &Label) -> layout::Result<Self> {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(layout::container_style(size.width, size.height))?;
        let checkbox = tree.create_node(Self::checkbox_anchors().to_style())?;
        let label = tree.create_text_node(
            Self::label_anchors(size.height).to_style(),
            label.measure_context(),
        )?;
        tree.add_child(root, checkbox)?;
        tree.add_child(root, label)?;

        Ok(Self {
            tree,
            root,
            checkbox,
            label,
        })
    }

    fn checkbox_anchors() -> Anchors {
        Anchors::new()
            .leading(MARGIN)
            .top(MARGIN)
            .size(CHECKBOX_SIZE, CHECKBOX_SIZE)
    }

    fn label_anchors(container_height: f32) -> Anchors {
        Anchors::new()
            .leading(MARGIN + CHECKBOX_SIZE + SPACING)
            .top(MARGIN)
            .trailing(MARGIN)
            .max_height(container_height - 2.0 * MARGIN)
    }

    /// Re-run layout and return the (checkbox, label) frames in the
    /// container's local space
    fn solve(&mut self, size: tickbox_core::Size, label: &Label) -> layout::Result<(Rect, Rect)> {
        self.tree
            .set_style(self.root, layout::container_style(size.width, size.height))?;
        self.tree
            .set_style(self.label, Self::label_anchors(size.height).to_style())?;
        self.tree.set_text_context(self.label, label.measure_context())?;
        self.tree
            .compute_layout_in(self.root, size.width, size.height)?;

        let checkbox = self
            .tree
            .frame(self.checkbox, (0.0, 0.0))
            .ok_or(layout::LayoutError::UnknownNode(self.checkbox))?;
        let label = self
            .tree
            .frame(self.label, (0.0, 0.0))
            .ok_or(layout::LayoutError::UnknownNode(self.label))?;
        Ok((checkbox, label))
    }
}

/// A [`Checkbox`] and a multi-line [`Label`] laid out side by side
pub struct CheckboxWithLabel {
    /// Call [`CheckboxWithLabel::layout_subviews`] after changing the text or font
    /// through this handle; [`CheckboxWithLabel::configure_view`] does it for you.
    pub label: Label,
    /// Call [`CheckboxWithLabel::layout_subviews`] after resizing through this handle
    pub check_box: Checkbox,
    frame: Rect,
    background_color: Option<Color>,
    layout: Option<CompositeLayout>,
}

impl CheckboxWithLabel {
    pub fn new(frame: Rect) -> Self {
        let mut label = Label::default();
        label.set_number_of_lines(0);

        let mut view = Self {
            label,
            check_box: Checkbox::new(Rect::ZERO),
            frame,
            background_color: Some(Color::WHITE),
            layout: None,
        };

        match CompositeLayout::build(frame.size(), &view.label) {
            Ok(layout) => view.layout = Some(layout),
            Err(err) => tracing::error!("checkbox label layout setup failed: {}", err),
        }
        view.layout_subviews();
        view
    }

    /// Set the label text and optionally its font
    ///
    /// Passing `None` keeps the current font.
    pub fn configure_view(&mut self, text: impl Into<String>, font: Option<FontSpec>) {
        self.label.set_text(text);
        if let Some(font) = font {
            self.label.set_font(font);
        }
        self.layout_subviews();
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the view and lay out its children again
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout_subviews();
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Bind the checkbox's delegate
    pub fn set_delegate<D: CheckboxDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        self.check_box.set_delegate(delegate);
    }

    pub fn set_delegate_weak(&mut self, delegate: Weak<dyn CheckboxDelegate>) {
        self.check_box.set_delegate_weak(delegate);
    }

    /// Place the checkbox and label for the current frame and text
    pub fn layout_subviews(&mut self) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };

        match layout.solve(self.frame.size(), &self.label) {
            Ok((checkbox, label)) => {
                self.check_box.set_frame(checkbox);
                self.label.set_frame(label);
            }
            Err(err) => tracing::error!("checkbox label layout failed: {}", err),
        }
    }

    /// Route a touch given in the parent's coordinate space
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let local = match *event {
            TouchEvent::Started { id, x, y, pressure } => TouchEvent::Started {
                id,
                x: x - self.frame.x(),
                y: y - self.frame.y(),
                pressure,
            },
            TouchEvent::Moved { id, x, y, pressure } => TouchEvent::Moved {
                id,
                x: x - self.frame.x(),
                y: y - self.frame.y(),
                pressure,
            },
            TouchEvent::Ended { id, x, y } => TouchEvent::Ended {
                id,
                x: x - self.frame.x(),
                y: y - self.frame.y(),
            },
            TouchEvent::Cancelled { id } => TouchEvent::Cancelled { id },
        };
        self.check_box.handle_touch(&local)
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event.as_touch() {
            Some(touch) => self.handle_touch(&touch),
            None => false,
        }
    }

    /// Draw background, checkbox and label in local coordinates
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        if let Some(background) = self.background_color.filter(|c| !c.is_transparent()) {
            ctx.fill(&Path::rect(self.frame.bounds()), background);
        }
        self.check_box.paint(ctx);
        self.label.paint(ctx);
    }

    /// Draw at the view's frame in the parent's coordinate space
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let mut local = ctx.scoped_transform(Transform::translate(self.frame.x(), self.frame.y()));
        self.draw(&mut *local);
    }
}
