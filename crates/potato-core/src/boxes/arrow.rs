//! Arrows and lines.
//!
//! Both are drawn from the middle of the left edge to the middle of the right
//! edge of their rectangle. Only the stroke is hit, not the whole rectangle.

use super::{BoxBase, BoxTrait, point_to_segment_dist};
use crate::style::BoxStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Start and end of the stroke in world coordinates.
fn segment(style: &BoxStyle) -> (Point, Point) {
    let geometry = &style.geometry;
    let rect = geometry.rect();
    let mid_y = rect.center().y;
    let transform = geometry.transform();
    (
        transform * Point::new(rect.x0, mid_y),
        transform * Point::new(rect.x1, mid_y),
    )
}

fn hits_segment(style: &BoxStyle, point: Point, margin: f64) -> bool {
    let (start, end) = segment(style);
    point_to_segment_dist(point, start, end) <= margin
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowBox {
    #[serde(flatten)]
    pub base: BoxBase,
}

impl ArrowBox {
    pub fn new(base: BoxBase) -> Self {
        Self { base }
    }

    /// Tail and tip of the arrow.
    pub fn endpoints(&self) -> (Point, Point) {
        segment(&self.base.style)
    }
}

impl BoxTrait for ArrowBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn contains_point(&self, point: Point, margin: f64) -> bool {
        hits_segment(&self.base.style, point, margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBox {
    #[serde(flatten)]
    pub base: BoxBase,
}

impl LineBox {
    pub fn new(base: BoxBase) -> Self {
        Self { base }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        segment(&self.base.style)
    }
}

impl BoxTrait for LineBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn contains_point(&self, point: Point, margin: f64) -> bool {
        hits_segment(&self.base.style, point, margin)
    }
}
