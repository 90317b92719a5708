//! One pointer drag that edits a box's geometry.

use crate::geometry::{BoxGeometry, PointPosition};
use crate::presentation::Presentation;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Interactive edit mode, selected per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformationType {
    /// Move from inside, resize from edges and corners.
    #[default]
    Translate,
    /// Move from inside, rotate from corners.
    Rotate,
}

/// Which rectangle coordinates follow the pointer during a resize.
#[derive(Debug, Clone, Copy)]
struct ResizeEdges {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

impl ResizeEdges {
    fn for_position(position: PointPosition) -> Option<Self> {
        let edges = |left, top, right, bottom| Some(Self { left, top, right, bottom });
        match position {
            PointPosition::TopLeftCorner => edges(true, true, false, false),
            PointPosition::TopRightCorner => edges(false, true, true, false),
            PointPosition::BottomLeftCorner => edges(true, false, false, true),
            PointPosition::BottomRightCorner => edges(false, false, true, true),
            PointPosition::TopBorder => edges(false, true, false, false),
            PointPosition::BottomBorder => edges(false, false, false, true),
            PointPosition::LeftBorder => edges(true, false, false, false),
            PointPosition::RightBorder => edges(false, false, true, false),
            PointPosition::InBox | PointPosition::NotInBox => None,
        }
    }

    /// The corner that stays put: opposite the dragged edges.
    fn anchor(self, rect: Rect) -> Point {
        Point::new(
            if self.left { rect.x1 } else { rect.x0 },
            if self.top { rect.y1 } else { rect.y0 },
        )
    }

    fn apply(self, rect: &mut Rect, local: Point) {
        if self.left {
            rect.x0 = local.x;
        }
        if self.right {
            rect.x1 = local.x;
        }
        if self.top {
            rect.y0 = local.y;
        }
        if self.bottom {
            rect.y1 = local.y;
        }
    }
}

/// Gesture state from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTransformation {
    box_id: String,
    kind: TransformationType,
    position: PointPosition,
    page: usize,
    last_pointer: Point,
}

impl BoxTransformation {
    pub fn new(
        box_id: impl Into<String>,
        kind: TransformationType,
        position: PointPosition,
        page: usize,
        pointer: Point,
    ) -> Self {
        Self {
            box_id: box_id.into(),
            kind,
            position,
            page,
            last_pointer: pointer,
        }
    }

    pub fn box_id(&self) -> &str {
        &self.box_id
    }

    pub fn position(&self) -> PointPosition {
        self.position
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Apply a pointer move to the box in `presentation`.
    ///
    /// Returns the geometry written, or `None` if the box no longer exists.
    pub fn do_transformation(&mut self, pointer: Point, presentation: &mut Presentation) -> Option<BoxGeometry> {
        let current = *presentation
            .frame_at(self.page)?
            .find_box(&self.box_id)?
            .geometry();
        let geometry = self.transform(current, pointer);
        presentation.set_box_geometry(self.page, &self.box_id, geometry);
        Some(geometry)
    }

    /// The geometry after moving the pointer to `pointer`.
    pub fn transform(&mut self, geometry: BoxGeometry, pointer: Point) -> BoxGeometry {
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;

        if self.position == PointPosition::InBox {
            let mut moved = geometry;
            moved.set_rect(geometry.rect() + delta);
            return moved;
        }
        match self.kind {
            TransformationType::Translate => resize(geometry, self.position, pointer),
            TransformationType::Rotate => rotate(geometry, self.position, pointer),
        }
    }
}

/// Drag an edge or corner while the opposite one keeps its place on the page.
fn resize(geometry: BoxGeometry, position: PointPosition, pointer: Point) -> BoxGeometry {
    let Some(edges) = ResizeEdges::for_position(position) else {
        return geometry;
    };
    let rect = geometry.rect();
    let anchor = edges.anchor(rect);
    let world_anchor = geometry.transform() * anchor;

    // Work in the frame rotated about the anchor, where the anchor does not move.
    let mut moved = rect + (world_anchor - anchor);
    let pivot = geometry.transform_about(world_anchor);
    edges.apply(&mut moved, pivot.inverse() * pointer);

    let center = pivot * moved.center();
    let mut resized = geometry;
    resized.set_rect(Rect::from_center_size(center, moved.size()).abs());
    resized
}

/// Turn the box so the dragged corner follows the pointer.
fn rotate(geometry: BoxGeometry, position: PointPosition, pointer: Point) -> BoxGeometry {
    let center = geometry.center();
    let mouse_angle = (center.y - pointer.y).atan2(center.x - pointer.x);
    let angle_center_edge = geometry.height.atan2(geometry.width);
    let angle = match position {
        PointPosition::TopLeftCorner => mouse_angle - angle_center_edge,
        PointPosition::BottomLeftCorner => mouse_angle + angle_center_edge,
        PointPosition::BottomRightCorner => mouse_angle + PI - angle_center_edge,
        PointPosition::TopRightCorner => mouse_angle - PI + angle_center_edge,
        _ => return geometry,
    };
    geometry.with_angle(angle.to_degrees())
}
