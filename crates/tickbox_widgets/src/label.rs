//! Multi-line text label

use tickbox_core::{
    Color, DrawContext, DrawContextExt, FontWeight, Path, Point, Rect, TextStyle, Transform,
};

use crate::layout::TextMeasureContext;
use crate::text_measure::{
    default_measurer, wrap_lines, SharedTextMeasurer, TextLayoutOptions, TextMetrics,
};

/// Font used by a [`Label`]
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Size in points
    pub size: f32,
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::system(17.0)
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
        }
    }

    /// The platform UI font at `size`
    pub fn system(size: f32) -> Self {
        Self::new("system-ui", size)
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Line height multiplier shared by measurement and drawing
const LINE_HEIGHT: f32 = 1.2;

/// A block of wrapped text
pub struct Label {
    text: String,
    font: FontSpec,
    text_color: Color,
    background_color: Option<Color>,
    /// Maximum number of lines (0 = unlimited)
    number_of_lines: usize,
    frame: Rect,
    measurer: SharedTextMeasurer,
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl Label {
    /// Single-line black label in the system font
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontSpec::default(),
            text_color: Color::BLACK,
            background_color: None,
            number_of_lines: 1,
            frame: Rect::ZERO,
            measurer: default_measurer(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Limit the number of lines; 0 means as many as the text needs
    pub fn set_number_of_lines(&mut self, lines: usize) {
        self.number_of_lines = lines;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Replace the measurer used for wrapping
    pub fn set_measurer(&mut self, measurer: SharedTextMeasurer) {
        self.measurer = measurer;
    }

    fn layout_options(&self, max_width: Option<f32>) -> TextLayoutOptions {
        let mut options = TextLayoutOptions::new()
            .with_line_height(LINE_HEIGHT)
            .with_max_lines(self.number_of_lines);
        options.max_width = max_width;
        options
    }

    /// Lines as they are drawn at the current frame width
    pub fn lines(&self) -> Vec<String> {
        let max_width = (self.number_of_lines != 1).then_some(self.frame.width());
        wrap_lines(
            self.measurer.as_ref(),
            &self.text,
            self.font.size,
            &self.layout_options(max_width),
        )
    }

    /// Size the text needs when wrapped to `max_width`
    pub fn size_that_fits(&self, max_width: f32) -> TextMetrics {
        self.measurer.measure_with_options(
            &self.text,
            self.font.size,
            &self.layout_options(Some(max_width)),
        )
    }

    /// Measure context for a layout text node
    pub fn measure_context(&self) -> TextMeasureContext {
        TextMeasureContext {
            content: self.text.clone(),
            font_size: self.font.size,
            line_height: LINE_HEIGHT,
            max_lines: self.number_of_lines,
            measurer: self.measurer.clone(),
        }
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font.size)
            .with_family(self.font.family.clone())
            .with_weight(self.font.weight)
            .with_color(self.text_color)
    }

    /// Draw in local coordinates
    ///
    /// The text block is centered vertically in the frame; lines that start
    /// below the frame are not drawn.
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        let bounds = self.frame.bounds();

        if let Some(background) = self.background_color.filter(|c| !c.is_transparent()) {
            ctx.fill(&Path::rect(bounds), background);
        }

        let lines = self.lines();
        let line_height = self.font.size * LINE_HEIGHT;
        let block_height = line_height * lines.len() as f32;
        let top = ((bounds.height() - block_height) / 2.0).max(0.0);
        let style = self.text_style();

        for (index, line) in lines.iter().enumerate() {
            let y = top + line_height * index as f32;
            if y >= bounds.height() {
                break;
            }
            if !line.is_empty() {
                ctx.draw_text(line, Point::new(0.0, y), &style);
            }
        }
    }

    /// Draw at the label's frame in the parent's coordinate space
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let mut local = ctx.scoped_transform(Transform::translate(self.frame.x(), self.frame.y()));
        self.draw(&mut *local);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tickbox_core::{DrawCommand, RecordingContext, Size};

    use crate::text_measure::TextMeasurer;

    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn line_width(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    fn label(text: &str, width: f32, height: f32) -> Label {
        let mut label = Label::new(text);
        label.set_measurer(Arc::new(FixedWidth));
        label.set_frame(Rect::new(0.0, 0.0, width, height));
        label
    }

    fn drawn_text(ctx: &RecordingContext) -> Vec<(String, f32)> {
        ctx.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawText { text, origin, .. } => Some((text.clone(), origin.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_line_does_not_wrap() {
        let label = label("aa bb cc", 30.0, 40.0);
        assert_eq!(label.lines(), ["aa bb cc"]);
    }

    #[test]
    fn test_unlimited_lines_wrap_to_frame() {
        let mut label = label("aa bb cc", 50.0, 100.0);
        label.set_number_of_lines(0);
        assert_eq!(label.lines(), ["aa bb", "cc"]);
    }

    #[test]
    fn test_line_limit() {
        let mut label = label("aa bb cc", 20.0, 100.0);
        label.set_number_of_lines(2);
        assert_eq!(label.lines(), ["aa", "bb"]);
    }

    #[test]
    fn test_draw_centers_block_vertically() {
        let mut label = label("aa bb", 20.0, 100.0);
        label.set_number_of_lines(0);
        label.set_font(FontSpec::system(10.0));
        let mut ctx = RecordingContext::new(Size::new(20.0, 100.0));
        label.draw(&mut ctx);

        // Two 12pt lines in a 100pt frame start at 38
        let text = drawn_text(&ctx);
        assert_eq!(text.len(), 2);
        assert_eq!(text[0].0, "aa");
        assert!((text[0].1 - 38.0).abs() < 1e-4);
        assert!((text[1].1 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_background_and_style() {
        let mut label = label("hi", 100.0, 20.0);
        label.set_background_color(Some(Color::CYAN));
        label.set_text_color(Color::RED);
        label.set_font(FontSpec::new("Menlo", 12.0).with_weight(FontWeight::Bold));
        let mut ctx = RecordingContext::new(Size::new(100.0, 20.0));
        label.draw(&mut ctx);

        assert_eq!(ctx.fills().next().map(|(_, b)| b.color()), Some(Color::CYAN));
        let style = ctx.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::DrawText { style, .. } => Some(style.clone()),
            _ => None,
        });
        let style = style.unwrap();
        assert_eq!(style.family, "Menlo");
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.color, Color::RED);
    }

    #[test]
    fn test_size_that_fits() {
        let mut label = label("aa bb cc", 0.0, 0.0);
        label.set_number_of_lines(0);
        let metrics = label.size_that_fits(50.0);
        assert_eq!(metrics.line_count, 2);
        assert!((metrics.width - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_paint_translates_to_frame() {
        let mut label = label("hi", 100.0, 20.0);
        label.set_frame(Rect::new(42.0, 8.0, 100.0, 20.0));
        let mut ctx = RecordingContext::new(Size::new(200.0, 200.0));
        label.paint(&mut ctx);
        assert!(matches!(
            ctx.commands().first(),
            Some(DrawCommand::PushTransform(t)) if *t == Transform::translate(42.0, 8.0)
        ));
        assert_eq!(ctx.transform_depth(), 0);
    }
}
