//! Text measurement for layout
//!
//! Labels are sized and wrapped with a [`TextMeasurer`]. Without a font
//! backend the [`EstimatedTextMeasurer`] approximates glyph widths.

use std::sync::Arc;

/// Text layout options that affect measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayoutOptions {
    /// Line height multiplier (1.0 = font size)
    pub line_height: f32,
    /// Maximum width for wrapping (None = single line)
    pub max_width: Option<f32>,
    /// Maximum number of lines (0 = unlimited)
    pub max_lines: usize,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self {
            line_height: 1.2,
            max_width: None,
            max_lines: 0,
        }
    }
}

impl TextLayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set line height multiplier
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set max width for wrapping
    pub fn with_max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Limit the number of lines (0 = unlimited)
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = lines;
        self
    }
}

/// Text measurement result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the widest line
    pub width: f32,
    /// Height of all lines
    pub height: f32,
    /// Number of lines after wrapping
    pub line_count: usize,
}

/// Trait for measuring text dimensions
pub trait TextMeasurer: Send + Sync {
    /// Width of `text` laid out on one line
    fn line_width(&self, text: &str, font_size: f32) -> f32;

    /// Measure `text` wrapped according to `options`
    fn measure_with_options(
        &self,
        text: &str,
        font_size: f32,
        options: &TextLayoutOptions,
    ) -> TextMetrics {
        let lines = wrap_lines(self, text, font_size, options);
        let width = lines
            .iter()
            .map(|line| self.line_width(line, font_size))
            .fold(0.0, f32::max);
        TextMetrics {
            width,
            height: font_size * options.line_height * lines.len() as f32,
            line_count: lines.len(),
        }
    }

    /// Measure text with default options (single line)
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        self.measure_with_options(text, font_size, &TextLayoutOptions::new())
    }
}

/// Measurer that estimates glyph widths from the font size
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

/// Average advance of a proportional glyph, as a fraction of the font size
const ESTIMATED_CHAR_WIDTH: f32 = 0.55;

impl TextMeasurer for EstimatedTextMeasurer {
    fn line_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * ESTIMATED_CHAR_WIDTH
    }
}

/// Shared measurer handle
pub type SharedTextMeasurer = Arc<dyn TextMeasurer>;

/// The measurer used when none is supplied
pub fn default_measurer() -> SharedTextMeasurer {
    Arc::new(EstimatedTextMeasurer)
}

/// Greedy word wrap
///
/// Words wider than `max_width` are broken between characters. Explicit
/// newlines always start a new line. When `max_lines` is set, lines past the
/// limit are dropped.
pub fn wrap_lines<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font_size: f32,
    options: &TextLayoutOptions,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        match options.max_width {
            Some(max_width) if max_width > 0.0 => {
                wrap_paragraph(measurer, paragraph, font_size, max_width, &mut lines)
            }
            _ => lines.push(paragraph.to_string()),
        }
    }

    if options.max_lines > 0 {
        lines.truncate(options.max_lines);
    }
    lines
}

fn wrap_paragraph<M: TextMeasurer + ?Sized>(
    measurer: &M,
    paragraph: &str,
    font_size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) {
    let fits = |s: &str| measurer.line_width(s, font_size) <= max_width;
    let first_line = lines.len();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(candidate.as_str()) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
            continue;
        }

        // Break the word at character boundaries
        for ch in word.chars() {
            current.push(ch);
            if !fits(current.as_str()) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.len() == first_line {
        lines.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is exactly 10 wide
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn line_width(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        wrap_lines(
            &FixedWidth,
            text,
            17.0,
            &TextLayoutOptions::new().with_max_width(max_width),
        )
    }

    #[test]
    fn test_estimated_width() {
        let metrics = EstimatedTextMeasurer.measure("abcd", 20.0);
        assert!((metrics.width - 44.0).abs() < 1e-4);
        assert!((metrics.height - 24.0).abs() < 1e-4);
        assert_eq!(metrics.line_count, 1);
    }

    #[test]
    fn test_wrap_on_word_boundaries() {
        assert_eq!(wrap("aa bb cc", 50.0), ["aa bb", "cc"]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        assert_eq!(wrap("abcdefg", 30.0), ["abc", "def", "g"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap("aa\nbb", 100.0), ["aa", "bb"]);
        assert_eq!(wrap("aa\n\nbb", 100.0), ["aa", "", "bb"]);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        assert_eq!(wrap("", 100.0), [""]);
    }

    #[test]
    fn test_max_lines_truncates() {
        let lines = wrap_lines(
            &FixedWidth,
            "aa bb cc dd",
            17.0,
            &TextLayoutOptions::new().with_max_width(20.0).with_max_lines(2),
        );
        assert_eq!(lines, ["aa", "bb"]);
    }

    #[test]
    fn test_measure_wrapped_height() {
        let metrics = FixedWidth.measure_with_options(
            "aa bb cc",
            10.0,
            &TextLayoutOptions::new().with_max_width(50.0),
        );
        assert_eq!(metrics.line_count, 2);
        assert!((metrics.width - 50.0).abs() < 1e-4);
        assert!((metrics.height - 24.0).abs() < 1e-4);
    }
}
