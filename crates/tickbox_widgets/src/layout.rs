//! Layout tree management
//!
//! A thin wrapper over a Taffy tree. Views describe where their children go
//! with [`Anchors`] (edge pins and fixed sizes, like auto layout constraints)
//! and read back frames after [`LayoutTree::compute_layout`].

use std::collections::HashMap;
use std::fmt;

use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;
use thiserror::Error;

use crate::text_measure::{SharedTextMeasurer, TextLayoutOptions};

new_key_type! {
    pub struct LayoutNodeId;
}

/// Layout errors
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout node {0:?} does not exist")]
    UnknownNode(LayoutNodeId),

    #[error("layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Context stored with text nodes for measurement during layout
#[derive(Clone)]
pub struct TextMeasureContext {
    /// The text content to measure
    pub content: String,
    /// Font size in points
    pub font_size: f32,
    /// Line height multiplier
    pub line_height: f32,
    /// Maximum number of lines (0 = unlimited)
    pub max_lines: usize,
    pub measurer: SharedTextMeasurer,
}

impl fmt::Debug for TextMeasureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMeasureContext")
            .field("content", &self.content)
            .field("font_size", &self.font_size)
            .field("line_height", &self.line_height)
            .field("max_lines", &self.max_lines)
            .finish_non_exhaustive()
    }
}

/// Measure function for text nodes
///
/// Wraps the text to the width Taffy offers so multi-line labels get their
/// real height.
fn text_measure_function(
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    _node_id: NodeId,
    node_context: Option<&mut TextMeasureContext>,
    _style: &Style,
) -> Size<f32> {
    if let Size {
        width: Some(width),
        height: Some(height),
    } = known_dimensions
    {
        return Size { width, height };
    }

    let Some(ctx) = node_context else {
        return Size::ZERO;
    };

    let max_width = known_dimensions.width.or(match available_space.width {
        AvailableSpace::Definite(w) => Some(w),
        AvailableSpace::MaxContent => None,
        // Force wrapping at every word
        AvailableSpace::MinContent => Some(0.0),
    });

    let mut options = TextLayoutOptions::new()
        .with_line_height(ctx.line_height)
        .with_max_lines(ctx.max_lines);
    options.max_width = max_width;

    let metrics = ctx
        .measurer
        .measure_with_options(&ctx.content, ctx.font_size, &options);

    Size {
        width: known_dimensions.width.unwrap_or(metrics.width),
        height: known_dimensions.height.unwrap_or(metrics.height),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Anchors
// ─────────────────────────────────────────────────────────────────────────────

/// Edge pins and size constraints for an absolutely placed child
///
/// Unset edges and sizes are left to the layout engine. Pinning both leading
/// and trailing with no width stretches the child between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
    pub leading: Option<f32>,
    pub top: Option<f32>,
    pub trailing: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub max_height: Option<f32>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leading(mut self, inset: f32) -> Self {
        self.leading = Some(inset);
        self
    }

    pub fn top(mut self, inset: f32) -> Self {
        self.top = Some(inset);
        self
    }

    pub fn trailing(mut self, inset: f32) -> Self {
        self.trailing = Some(inset);
        self
    }

    pub fn bottom(mut self, inset: f32) -> Self {
        self.bottom = Some(inset);
        self
    }

    /// Fixed width and height
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Upper bound on the resolved height
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height.max(0.0));
        self
    }

    /// Absolutely positioned Taffy style for these anchors
    pub fn to_style(&self) -> Style {
        fn inset(value: Option<f32>) -> LengthPercentageAuto {
            value.map_or(LengthPercentageAuto::Auto, LengthPercentageAuto::Length)
        }
        fn dimension(value: Option<f32>) -> Dimension {
            value.map_or(Dimension::Auto, Dimension::Length)
        }

        Style {
            position: Position::Absolute,
            inset: Rect {
                left: inset(self.leading),
                right: inset(self.trailing),
                top: inset(self.top),
                bottom: inset(self.bottom),
            },
            size: Size {
                width: dimension(self.width),
                height: dimension(self.height),
            },
            max_size: Size {
                width: Dimension::Auto,
                height: dimension(self.max_height),
            },
            ..Default::default()
        }
    }
}

/// Fixed-size container that centers its in-flow children
pub fn container_style(width: f32, height: f32) -> Style {
    Style {
        display: Display::Flex,
        justify_content: Some(JustifyContent::Center),
        align_items: Some(AlignItems::Center),
        size: Size {
            width: Dimension::Length(width),
            height: Dimension::Length(height),
        },
        ..Default::default()
    }
}

/// In-flow child of a fixed size, centered by its [`container_style`] parent
pub fn centered_style(width: f32, height: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Length(width),
            height: Dimension::Length(height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout tree
// ─────────────────────────────────────────────────────────────────────────────

/// Maps between Tickbox node IDs and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree<TextMeasureContext>,
    node_map: SlotMap<LayoutNodeId, NodeId>,
    /// Reverse mapping from Taffy NodeId to our LayoutNodeId
    reverse_map: HashMap<NodeId, LayoutNodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        // Frames are in points; keep fractional positions
        let mut taffy = TaffyTree::new();
        taffy.disable_rounding();
        Self {
            taffy,
            node_map: SlotMap::with_key(),
            reverse_map: HashMap::new(),
        }
    }

    fn taffy_node(&self, id: LayoutNodeId) -> Result<NodeId> {
        self.node_map
            .get(id)
            .copied()
            .ok_or(LayoutError::UnknownNode(id))
    }

    fn track(&mut self, taffy_node: NodeId) -> LayoutNodeId {
        let id = self.node_map.insert(taffy_node);
        self.reverse_map.insert(taffy_node, id);
        id
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: Style) -> Result<LayoutNodeId> {
        let taffy_node = self.taffy.new_leaf(style)?;
        Ok(self.track(taffy_node))
    }

    /// Create a new text layout node with measure context
    pub fn create_text_node(
        &mut self,
        style: Style,
        context: TextMeasureContext,
    ) -> Result<LayoutNodeId> {
        let taffy_node = self.taffy.new_leaf_with_context(style, context)?;
        Ok(self.track(taffy_node))
    }

    /// Set the style for a node
    pub fn set_style(&mut self, id: LayoutNodeId, style: Style) -> Result<()> {
        let taffy_node = self.taffy_node(id)?;
        self.taffy.set_style(taffy_node, style)?;
        Ok(())
    }

    /// Replace the text a node measures
    pub fn set_text_context(&mut self, id: LayoutNodeId, context: TextMeasureContext) -> Result<()> {
        let taffy_node = self.taffy_node(id)?;
        self.taffy.set_node_context(taffy_node, Some(context))?;
        self.taffy.mark_dirty(taffy_node)?;
        Ok(())
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) -> Result<()> {
        let parent_node = self.taffy_node(parent)?;
        let child_node = self.taffy_node(child)?;
        self.taffy.add_child(parent_node, child_node)?;
        Ok(())
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute_layout(
        &mut self,
        root: LayoutNodeId,
        available_space: Size<AvailableSpace>,
    ) -> Result<()> {
        let taffy_node = self.taffy_node(root)?;
        self.taffy
            .compute_layout_with_measure(taffy_node, available_space, text_measure_function)?;
        Ok(())
    }

    /// Compute layout with a definite size for the root
    pub fn compute_layout_in(&mut self, root: LayoutNodeId, width: f32, height: f32) -> Result<()> {
        self.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        )
    }

    /// Get the computed layout for a node
    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
    }

    /// Computed frame of `id`, offset by its parent's origin
    pub fn frame(&self, id: LayoutNodeId, parent_origin: (f32, f32)) -> Option<tickbox_core::Rect> {
        self.get_layout(id).map(|layout| {
            tickbox_core::Rect::new(
                parent_origin.0 + layout.location.x,
                parent_origin.1 + layout.location.y,
                layout.size.width,
                layout.size.height,
            )
        })
    }

    /// Get children of a layout node
    pub fn children(&self, parent: LayoutNodeId) -> Vec<LayoutNodeId> {
        let Some(&taffy_node) = self.node_map.get(parent) else {
            return Vec::new();
        };

        let Ok(children) = self.taffy.children(taffy_node) else {
            return Vec::new();
        };

        children
            .iter()
            .filter_map(|child_taffy| self.reverse_map.get(child_taffy).copied())
            .collect()
    }

    /// Remove a node
    pub fn remove_node(&mut self, id: LayoutNodeId) -> Result<()> {
        let taffy_node = self.taffy_node(id)?;
        self.taffy.remove(taffy_node)?;
        self.node_map.remove(id);
        self.reverse_map.remove(&taffy_node);
        Ok(())
    }

    /// Check if a node exists in this tree
    pub fn node_exists(&self, id: LayoutNodeId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Get the number of nodes in the tree
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_measure::TextMeasurer;
    use std::sync::Arc;

    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn line_width(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    fn text(content: &str) -> TextMeasureContext {
        TextMeasureContext {
            content: content.to_string(),
            font_size: 10.0,
            line_height: 1.0,
            max_lines: 0,
            measurer: Arc::new(FixedWidth),
        }
    }

    #[test]
    fn test_anchored_child_frame() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(375.0, 667.0)).unwrap();
        let child = tree
            .create_node(Anchors::new().leading(30.0).top(180.0).size(110.0, 60.0).to_style())
            .unwrap();
        tree.add_child(root, child).unwrap();
        tree.compute_layout_in(root, 375.0, 667.0).unwrap();

        assert_eq!(
            tree.frame(child, (0.0, 0.0)),
            Some(tickbox_core::Rect::new(30.0, 180.0, 110.0, 60.0))
        );
    }

    #[test]
    fn test_centered_child() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(375.0, 667.0)).unwrap();
        let child = tree.create_node(centered_style(210.0, 190.0)).unwrap();
        tree.add_child(root, child).unwrap();
        tree.compute_layout_in(root, 375.0, 667.0).unwrap();

        let frame = tree.frame(child, (0.0, 0.0)).unwrap();
        assert!((frame.x() - 82.5).abs() < 1e-3);
        assert!((frame.y() - 238.5).abs() < 1e-3);
        assert_eq!(frame.size(), tickbox_core::Size::new(210.0, 190.0));
    }

    #[test]
    fn test_fractional_positions_are_kept() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(375.0, 667.0)).unwrap();
        let child = tree
            .create_node(Anchors::new().leading(10.5).top(20.25).size(30.0, 30.0).to_style())
            .unwrap();
        tree.add_child(root, child).unwrap();
        tree.compute_layout_in(root, 375.0, 667.0).unwrap();

        let frame = tree.frame(child, (0.0, 0.0)).unwrap();
        assert!((frame.x() - 10.5).abs() < 1e-3);
        assert!((frame.y() - 20.25).abs() < 1e-3);
    }

    #[test]
    fn test_text_node_wraps_between_pins() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(100.0, 100.0)).unwrap();
        let label = tree
            .create_text_node(
                Anchors::new().leading(10.0).top(0.0).trailing(10.0).to_style(),
                text("aaa bbb ccc"),
            )
            .unwrap();
        tree.add_child(root, label).unwrap();
        tree.compute_layout_in(root, 100.0, 100.0).unwrap();

        // 80 wide fits "aaa bbb" (70), "ccc" wraps
        let frame = tree.frame(label, (0.0, 0.0)).unwrap();
        assert!((frame.width() - 80.0).abs() < 1e-3);
        assert!((frame.height() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_max_height_clamps_text() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(40.0, 100.0)).unwrap();
        let label = tree
            .create_text_node(
                Anchors::new()
                    .leading(0.0)
                    .top(0.0)
                    .trailing(0.0)
                    .max_height(25.0)
                    .to_style(),
                text("aa bb cc dd"),
            )
            .unwrap();
        tree.add_child(root, label).unwrap();
        tree.compute_layout_in(root, 40.0, 100.0).unwrap();

        let frame = tree.frame(label, (0.0, 0.0)).unwrap();
        assert!(frame.height() <= 25.0 + 1e-3);
    }

    #[test]
    fn test_set_text_context_relayouts() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(container_style(100.0, 100.0)).unwrap();
        let label = tree
            .create_text_node(
                Anchors::new().leading(0.0).top(0.0).trailing(0.0).to_style(),
                text("a"),
            )
            .unwrap();
        tree.add_child(root, label).unwrap();
        tree.compute_layout_in(root, 100.0, 100.0).unwrap();
        assert!((tree.frame(label, (0.0, 0.0)).unwrap().height() - 10.0).abs() < 1e-3);

        tree.set_text_context(label, text("aaaa bbbb cccc")).unwrap();
        tree.compute_layout_in(root, 100.0, 100.0).unwrap();
        assert!((tree.frame(label, (0.0, 0.0)).unwrap().height() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_node() {
        let mut tree = LayoutTree::new();
        let node = tree.create_node(Style::default()).unwrap();
        tree.remove_node(node).unwrap();
        assert!(!tree.node_exists(node));
        assert!(matches!(
            tree.set_style(node, Style::default()),
            Err(LayoutError::UnknownNode(_))
        ));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_children() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(Style::default()).unwrap();
        let a = tree.create_node(Style::default()).unwrap();
        let b = tree.create_node(Style::default()).unwrap();
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();
        assert_eq!(tree.children(root), vec![a, b]);
        assert_eq!(tree.len(), 3);
    }
}
