//! Image box.

use super::{BoxBase, BoxTrait};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image file formats a renderer is expected to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Svg,
}

impl ImageFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

/// An image referenced by path, relative to the resource directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBox {
    #[serde(flatten)]
    pub base: BoxBase,
    pub source: String,
}

impl ImageBox {
    pub fn new(base: BoxBase, source: impl Into<String>) -> Self {
        Self {
            base,
            source: source.into(),
        }
    }

    pub fn format(&self) -> Option<ImageFormat> {
        Path::new(&self.source)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
    }
}

impl BoxTrait for ImageBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn content(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BoxStyle;

    #[test]
    fn test_format_from_source() {
        let image = |source: &str| ImageBox::new(BoxBase::new("i", BoxStyle::default()), source);
        assert_eq!(image("logo.SVG").format(), Some(ImageFormat::Svg));
        assert_eq!(image("dir/photo.jpeg").format(), Some(ImageFormat::Jpeg));
        assert_eq!(image("noext").format(), None);
        assert_eq!(image("").format(), None);
    }
}
