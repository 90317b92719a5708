//! Visual and layout attributes of a box.

use crate::geometry::BoxGeometry;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Parse a CSS color (`red`, `#ff8800`, `rgb(...)`).
    pub fn parse(value: &str) -> Option<Self> {
        parse_color(value.trim())
            .ok()
            .map(|color| color.to_alpha_color::<Srgb>().into())
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(TextAlignment::Left),
            "right" => Some(TextAlignment::Right),
            "center" => Some(TextAlignment::Center),
            "justify" => Some(TextAlignment::Justify),
            _ => None,
        }
    }
}

/// Style of a box. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub color: SerializableColor,
    /// 0.0 = transparent, 1.0 = opaque.
    pub opacity: f64,
    pub font: String,
    /// Font size in logical pixels.
    pub font_size: i32,
    pub font_weight: FontWeight,
    /// Multiplier applied to the font's natural line spacing.
    pub line_spacing: f64,
    pub alignment: TextAlignment,
    /// Free-form tag (`title`, `body`, ...). Empty when unset.
    #[serde(default)]
    pub class: String,
    /// Highlighting language of code boxes.
    #[serde(default)]
    pub language: String,
    pub geometry: BoxGeometry,
}

impl BoxStyle {
    pub const DEFAULT_FONT: &'static str = "Sans";
    pub const DEFAULT_FONT_SIZE: i32 = 50;

    /// Default style positioned at `geometry`.
    pub fn with_geometry(geometry: BoxGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn has_class(&self) -> bool {
        !self.class.is_empty()
    }

    /// The color with opacity folded into its alpha channel.
    pub fn color_with_opacity(&self) -> Color {
        let alpha = (self.color.a as f64 * self.opacity.clamp(0.0, 1.0)) as u8;
        Color::from_rgba8(self.color.r, self.color.g, self.color.b, alpha)
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            opacity: 1.0,
            font: Self::DEFAULT_FONT.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            line_spacing: 1.0,
            alignment: TextAlignment::default(),
            class: String::new(),
            language: String::new(),
            geometry: BoxGeometry::default(),
        }
    }
}
