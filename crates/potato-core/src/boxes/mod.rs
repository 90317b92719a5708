//! Content elements placed on a frame.

mod arrow;
mod image;
mod text;

pub use arrow::{ArrowBox, LineBox};
pub use image::{ImageBox, ImageFormat};
pub use text::{CodeBox, PlainTextBox, TextBox, TitleBox};

use crate::geometry::{BoxGeometry, PointPosition};
use crate::style::BoxStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Fields every box carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxBase {
    pub id: String,
    pub style: BoxStyle,
    /// Reveal group: the number of `\pause` commands seen before the box in its frame.
    #[serde(default)]
    pub pause_counter: u32,
    /// 0-based source line of the creating command.
    #[serde(default)]
    pub line: usize,
}

impl BoxBase {
    pub fn new(id: impl Into<String>, style: BoxStyle) -> Self {
        Self {
            id: id.into(),
            style,
            pause_counter: 0,
            line: 0,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    (point - (a + seg * t)).hypot()
}

/// Common behaviour of all box variants.
pub trait BoxTrait {
    fn base(&self) -> &BoxBase;

    fn base_mut(&mut self) -> &mut BoxBase;

    /// Text, path or source code; empty for boxes without content.
    fn content(&self) -> &str {
        ""
    }

    /// Whether `point` (world coordinates) hits the box, with a tolerance of `margin`.
    fn contains_point(&self, point: Point, margin: f64) -> bool {
        self.base().style.geometry.classify_point(point, margin) != PointPosition::NotInBox
    }
}

/// A box of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideBox {
    Text(TextBox),
    PlainText(PlainTextBox),
    Title(TitleBox),
    Image(ImageBox),
    Arrow(ArrowBox),
    Line(LineBox),
    Code(CodeBox),
}

impl SlideBox {
    fn as_dyn(&self) -> &dyn BoxTrait {
        match self {
            SlideBox::Text(b) => b,
            SlideBox::PlainText(b) => b,
            SlideBox::Title(b) => b,
            SlideBox::Image(b) => b,
            SlideBox::Arrow(b) => b,
            SlideBox::Line(b) => b,
            SlideBox::Code(b) => b,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn BoxTrait {
        match self {
            SlideBox::Text(b) => b,
            SlideBox::PlainText(b) => b,
            SlideBox::Title(b) => b,
            SlideBox::Image(b) => b,
            SlideBox::Arrow(b) => b,
            SlideBox::Line(b) => b,
            SlideBox::Code(b) => b,
        }
    }

    pub fn base(&self) -> &BoxBase {
        self.as_dyn().base()
    }

    pub fn base_mut(&mut self) -> &mut BoxBase {
        self.as_dyn_mut().base_mut()
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn style(&self) -> &BoxStyle {
        &self.base().style
    }

    pub fn style_mut(&mut self) -> &mut BoxStyle {
        &mut self.base_mut().style
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.style().geometry
    }

    pub fn set_geometry(&mut self, geometry: BoxGeometry) {
        self.style_mut().geometry = geometry;
    }

    pub fn pause_counter(&self) -> u32 {
        self.base().pause_counter
    }

    pub fn line(&self) -> usize {
        self.base().line
    }

    pub fn content(&self) -> &str {
        self.as_dyn().content()
    }

    pub fn contains_point(&self, point: Point, margin: f64) -> bool {
        self.as_dyn().contains_point(point, margin)
    }

    /// Whether the content is shown after `%{name}` substitution.
    pub fn has_text(&self) -> bool {
        matches!(
            self,
            SlideBox::Text(_) | SlideBox::PlainText(_) | SlideBox::Title(_) | SlideBox::Code(_)
        )
    }

    /// Short lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SlideBox::Text(_) => "text",
            SlideBox::PlainText(_) => "plaintext",
            SlideBox::Title(_) => "title",
            SlideBox::Image(_) => "image",
            SlideBox::Arrow(_) => "arrow",
            SlideBox::Line(_) => "line",
            SlideBox::Code(_) => "code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(geometry: BoxGeometry) -> BoxStyle {
        BoxStyle::with_geometry(geometry)
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(-4.0, 3.0), a, b) - 5.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(1.0, 1.0), a, a) - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_delegation() {
        let mut slide_box = SlideBox::Text(TextBox::new(
            BoxBase::new("a", styled(BoxGeometry::new(0.0, 0.0, 10.0, 10.0))),
            "hello",
        ));
        assert_eq!(slide_box.id(), "a");
        assert_eq!(slide_box.content(), "hello");
        assert!(slide_box.has_text());
        assert!(slide_box.contains_point(Point::new(5.0, 5.0), 0.0));

        slide_box.set_geometry(BoxGeometry::new(100.0, 100.0, 10.0, 10.0));
        assert!(!slide_box.contains_point(Point::new(5.0, 5.0), 0.0));
        assert_eq!(slide_box.geometry().left, 100.0);
    }

    #[test]
    fn test_serde_keeps_variant() {
        let slide_box = SlideBox::Image(ImageBox::new(BoxBase::new("img", BoxStyle::default()), "pic.png"));
        let json = serde_json::to_string(&slide_box).unwrap();
        let back: SlideBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slide_box);
        assert_eq!(back.kind_name(), "image");
    }
}
