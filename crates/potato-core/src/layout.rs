//! Page size and named box positions.

use crate::geometry::BoxGeometry;
use kurbo::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    SixteenToNine,
    FourToThree,
}

impl AspectRatio {
    /// Logical page size. The width is the same for both ratios.
    pub fn page_size(self) -> Size {
        match self {
            AspectRatio::SixteenToNine => Size::new(1600.0, 900.0),
            AspectRatio::FourToThree => Size::new(1600.0, 1200.0),
        }
    }
}

/// Named positions a box can be snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutPreset {
    Title,
    Body,
    Full,
    Left,
    Right,
    PresentationTitle,
    Subtitle,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 7] = [
        LayoutPreset::Title,
        LayoutPreset::Body,
        LayoutPreset::Full,
        LayoutPreset::Left,
        LayoutPreset::Right,
        LayoutPreset::PresentationTitle,
        LayoutPreset::Subtitle,
    ];
}

const MARGIN: f64 = 50.0;
const TITLE_HEIGHT: f64 = 110.0;
/// Gap between the title and the body.
const GAP: f64 = 30.0;

/// Page geometry for one aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub ratio: AspectRatio,
    pub size: Size,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(AspectRatio::default())
    }
}

impl Layout {
    pub fn new(ratio: AspectRatio) -> Self {
        Self {
            ratio,
            size: ratio.page_size(),
        }
    }

    pub fn geometry(&self, preset: LayoutPreset) -> BoxGeometry {
        let width = self.size.width;
        let height = self.size.height;
        let inner_width = width - 2.0 * MARGIN;
        let body_top = MARGIN + TITLE_HEIGHT + GAP;
        let body_height = height - body_top - MARGIN;
        let half_width = (inner_width - MARGIN) / 2.0;
        match preset {
            LayoutPreset::Title => BoxGeometry::new(MARGIN, MARGIN, inner_width, TITLE_HEIGHT),
            LayoutPreset::Body => BoxGeometry::new(MARGIN, body_top, inner_width, body_height),
            LayoutPreset::Full => BoxGeometry::new(0.0, 0.0, width, height),
            LayoutPreset::Left => BoxGeometry::new(MARGIN, body_top, half_width, body_height),
            LayoutPreset::Right => {
                BoxGeometry::new(MARGIN * 2.0 + half_width, body_top, half_width, body_height)
            }
            LayoutPreset::PresentationTitle => {
                BoxGeometry::new(MARGIN, height / 2.0 - 200.0, inner_width, 200.0)
            }
            LayoutPreset::Subtitle => BoxGeometry::new(MARGIN, height / 2.0 + 20.0, inner_width, 100.0),
        }
    }
}
