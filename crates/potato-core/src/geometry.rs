//! Box geometry: rectangle, rotation and hit testing.

use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where a point lies relative to a box's rotated rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointPosition {
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    TopBorder,
    BottomBorder,
    LeftBorder,
    RightBorder,
    InBox,
    NotInBox,
}

impl PointPosition {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            PointPosition::TopLeftCorner
                | PointPosition::TopRightCorner
                | PointPosition::BottomLeftCorner
                | PointPosition::BottomRightCorner
        )
    }

    pub fn is_border(self) -> bool {
        matches!(
            self,
            PointPosition::TopBorder
                | PointPosition::BottomBorder
                | PointPosition::LeftBorder
                | PointPosition::RightBorder
        )
    }
}

/// Rectangle plus rotation angle in degrees (clockwise, around the center).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub angle: f64,
}

impl BoxGeometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// The unrotated rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.left + self.width, self.top + self.height)
    }

    /// Take position and size from `rect`, keeping the angle.
    pub fn set_rect(&mut self, rect: Rect) {
        self.left = rect.x0;
        self.top = rect.y0;
        self.width = rect.width();
        self.height = rect.height();
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Maps box-local coordinates to world coordinates (rotation about the center).
    pub fn transform(&self) -> Affine {
        self.transform_about(self.center())
    }

    /// The same rotation, pivoting about `pivot` instead of the center.
    pub fn transform_about(&self, pivot: Point) -> Affine {
        Affine::rotate_about(self.angle.to_radians(), pivot)
    }

    /// Map a world point into the box's unrotated frame.
    pub fn to_local(&self, point: Point) -> Point {
        self.transform().inverse() * point
    }

    /// World positions of the corners: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let rect = self.rect();
        let transform = self.transform();
        [
            transform * Point::new(rect.x0, rect.y0),
            transform * Point::new(rect.x1, rect.y0),
            transform * Point::new(rect.x1, rect.y1),
            transform * Point::new(rect.x0, rect.y1),
        ]
    }

    /// Axis-aligned bounds of the rotated rectangle.
    pub fn bounding_rect(&self) -> Rect {
        let [first, rest @ ..] = self.corners();
        rest.iter()
            .fold(Rect::from_points(first, first), |bounds, corner| bounds.union_pt(*corner))
    }

    pub fn contains(&self, point: Point, margin: f64) -> bool {
        self.classify_point(point, margin) != PointPosition::NotInBox
    }

    /// Classify `point` against the rotated rectangle with a tolerance band of
    /// `margin` around each edge.
    pub fn classify_point(&self, point: Point, margin: f64) -> PointPosition {
        let local = self.to_local(point);
        let rect = self.rect().abs();

        let inside_band = rect.inflate(margin, margin);
        if !inside_band.contains(local) && !on_far_edge(inside_band, local) {
            return PointPosition::NotInBox;
        }

        let near_left = (local.x - rect.x0).abs() <= margin;
        let near_right = (local.x - rect.x1).abs() <= margin;
        let near_top = (local.y - rect.y0).abs() <= margin;
        let near_bottom = (local.y - rect.y1).abs() <= margin;

        match (near_left, near_right, near_top, near_bottom) {
            (true, _, true, _) => PointPosition::TopLeftCorner,
            (_, true, true, _) => PointPosition::TopRightCorner,
            (true, _, _, true) => PointPosition::BottomLeftCorner,
            (_, true, _, true) => PointPosition::BottomRightCorner,
            (_, _, true, _) => PointPosition::TopBorder,
            (_, _, _, true) => PointPosition::BottomBorder,
            (true, _, _, _) => PointPosition::LeftBorder,
            (_, true, _, _) => PointPosition::RightBorder,
            _ => PointPosition::InBox,
        }
    }
}

/// `Rect::contains` excludes the right and bottom edges; the tolerance band includes them.
fn on_far_edge(rect: Rect, point: Point) -> bool {
    (point.x == rect.x1 && point.y >= rect.y0 && point.y <= rect.y1)
        || (point.y == rect.y1 && point.x >= rect.x0 && point.x <= rect.x1)
}
