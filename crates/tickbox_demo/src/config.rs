//! Demo configuration file handling
//!
//! An optional TOML file overrides the screen size and the appearance of
//! each checkbox. Every key is optional:
//!
//! ```toml
//! [viewport]
//! width = 375
//! height = 667
//!
//! [checkbox1]
//! style = "circle"
//! border_style = "rounded"
//! checked_background_color = "#34C759"
//!
//! [labeled]
//! text = "Remember me"
//! font_size = 15
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickbox_core::Color;
use tickbox_widgets::{BorderStyle, CheckboxConfig, CheckboxStyle};

/// Errors raised while loading the demo configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid color {value:?} for `{field}` (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { field: &'static str, value: String },
}

/// Demo configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub viewport: ViewportConfig,
    /// Checkbox placed at a fixed frame
    pub checkbox1: AppearanceConfig,
    /// Checkbox placed by layout constraints
    pub checkbox2: AppearanceConfig,
    /// Checkbox inside the labeled composite
    pub labeled: LabeledConfig,
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Screen size in points
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 667.0,
        }
    }
}

/// Glyph names accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    Square,
    Circle,
    Cross,
    Tick,
}

impl From<StyleName> for CheckboxStyle {
    fn from(name: StyleName) -> Self {
        match name {
            StyleName::Square => CheckboxStyle::Square,
            StyleName::Circle => CheckboxStyle::Circle,
            StyleName::Cross => CheckboxStyle::Cross,
            StyleName::Tick => CheckboxStyle::Tick,
        }
    }
}

/// Border shape names accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyleName {
    Square,
    RoundedSquare,
    Rounded,
}

/// Per-checkbox appearance overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub style: Option<StyleName>,
    pub border_style: Option<BorderStyleName>,
    /// Corner radius for `rounded_square`
    pub radius: Option<f32>,
    pub border_width: Option<f32>,
    pub checked_background_color: Option<String>,
    pub checked_border_color: Option<String>,
    pub checkmark_color: Option<String>,
    pub unchecked_background_color: Option<String>,
    pub unchecked_border_color: Option<String>,
    pub touch_radius: Option<f32>,
    pub haptics: Option<bool>,
}

impl AppearanceConfig {
    /// Apply the overrides on top of `base`
    pub fn apply(&self, base: CheckboxConfig) -> Result<CheckboxConfig, ConfigError> {
        let mut config = base;

        if let Some(style) = self.style {
            config.style = style.into();
        }

        let radius = self.radius.or(match config.border_style {
            BorderStyle::RoundedSquare { radius } => Some(radius),
            _ => None,
        });
        match (self.border_style, radius) {
            (Some(BorderStyleName::Square), _) => config.border_style = BorderStyle::Square,
            (Some(BorderStyleName::Rounded), _) => config.border_style = BorderStyle::Rounded,
            (Some(BorderStyleName::RoundedSquare), radius) | (None, radius @ Some(_)) => {
                config.border_style = BorderStyle::RoundedSquare {
                    radius: radius.unwrap_or(2.75),
                }
            }
            (None, None) => {}
        }

        if let Some(width) = self.border_width {
            config.border_width = width;
        }
        if let Some(radius) = self.touch_radius {
            config.increased_touch_radius = radius;
        }
        if let Some(haptics) = self.haptics {
            config.use_haptic_feedback = haptics;
        }

        let colors: [(&'static str, &Option<String>, &mut Color); 5] = [
            (
                "checked_background_color",
                &self.checked_background_color,
                &mut config.checked_background_color,
            ),
            (
                "checked_border_color",
                &self.checked_border_color,
                &mut config.checked_border_color,
            ),
            (
                "checkmark_color",
                &self.checkmark_color,
                &mut config.checkmark_color,
            ),
            (
                "unchecked_background_color",
                &self.unchecked_background_color,
                &mut config.unchecked_background_color,
            ),
            (
                "unchecked_border_color",
                &self.unchecked_border_color,
                &mut config.unchecked_border_color,
            ),
        ];
        for (field, value, target) in colors {
            if let Some(value) = value {
                *target = parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                })?;
            }
        }

        Ok(config)
    }
}

/// The labeled composite's checkbox plus its text
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabeledConfig {
    #[serde(flatten)]
    pub appearance: AppearanceConfig,
    pub text: String,
    /// Label font size; the system default when unset
    pub font_size: Option<f32>,
}

impl Default for LabeledConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            text: "Este es un mensaje de prueba para el checkBox".to_string(),
            font_size: None,
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(Color::from_hex),
        8 => {
            let rgba = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::from_hex(rgba >> 8).with_alpha((rgba & 0xFF) as f32 / 255.0))
        }
        _ => None,
    }
}
