//! Pointer cursor feedback for the box under the pointer.

use crate::geometry::PointPosition;
use crate::transformation::TransformationType;
use serde::{Deserialize, Serialize};

/// Cursor shapes a host maps onto its toolkit's icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    Crosshair,
    /// Horizontal resize.
    ResizeEw,
    /// Vertical resize.
    ResizeNs,
    /// Diagonal resize, top-left to bottom-right.
    ResizeNwse,
    /// Diagonal resize, top-right to bottom-left.
    ResizeNesw,
}

/// Direction an edge or corner handle points to in an unrotated box, in degrees.
fn base_angle(position: PointPosition) -> Option<f64> {
    let angle = match position {
        PointPosition::LeftBorder => 0.0,
        PointPosition::TopLeftCorner => 45.0,
        PointPosition::TopBorder => 90.0,
        PointPosition::TopRightCorner => 135.0,
        PointPosition::RightBorder => 180.0,
        PointPosition::BottomRightCorner => 225.0,
        PointPosition::BottomBorder => 270.0,
        PointPosition::BottomLeftCorner => 315.0,
        PointPosition::InBox | PointPosition::NotInBox => return None,
    };
    Some(angle)
}

/// Resize cursor for a handle pointing at `angle` degrees.
pub fn angle_to_cursor(angle: f64) -> CursorIcon {
    let angle = angle.rem_euclid(180.0);
    if !(22.5..157.5).contains(&angle) {
        CursorIcon::ResizeEw
    } else if angle < 67.5 {
        CursorIcon::ResizeNwse
    } else if angle < 112.5 {
        CursorIcon::ResizeNs
    } else {
        CursorIcon::ResizeNesw
    }
}

/// Cursor for the pointer at `position` over a box rotated by `angle` degrees.
pub fn cursor_for(kind: TransformationType, position: PointPosition, angle: f64) -> CursorIcon {
    match kind {
        TransformationType::Translate => match position {
            PointPosition::InBox => CursorIcon::Move,
            PointPosition::NotInBox => CursorIcon::Default,
            _ => base_angle(position).map_or(CursorIcon::Default, |base| angle_to_cursor(base + angle)),
        },
        TransformationType::Rotate => {
            if position.is_corner() {
                CursorIcon::Crosshair
            } else if position == PointPosition::InBox {
                CursorIcon::Move
            } else {
                CursorIcon::Default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_sectors() {
        assert_eq!(angle_to_cursor(0.0), CursorIcon::ResizeEw);
        assert_eq!(angle_to_cursor(170.0), CursorIcon::ResizeEw);
        assert_eq!(angle_to_cursor(45.0), CursorIcon::ResizeNwse);
        assert_eq!(angle_to_cursor(90.0), CursorIcon::ResizeNs);
        assert_eq!(angle_to_cursor(135.0), CursorIcon::ResizeNesw);
        assert_eq!(angle_to_cursor(270.0), CursorIcon::ResizeNs);
        assert_eq!(angle_to_cursor(-45.0), CursorIcon::ResizeNesw);
    }

    #[test]
    fn test_translate_cursors_follow_rotation() {
        let kind = TransformationType::Translate;
        assert_eq!(cursor_for(kind, PointPosition::LeftBorder, 0.0), CursorIcon::ResizeEw);
        assert_eq!(cursor_for(kind, PointPosition::TopBorder, 0.0), CursorIcon::ResizeNs);
        assert_eq!(cursor_for(kind, PointPosition::TopLeftCorner, 0.0), CursorIcon::ResizeNwse);
        assert_eq!(cursor_for(kind, PointPosition::BottomLeftCorner, 0.0), CursorIcon::ResizeNesw);
        assert_eq!(cursor_for(kind, PointPosition::LeftBorder, 90.0), CursorIcon::ResizeNs);
        assert_eq!(cursor_for(kind, PointPosition::TopLeftCorner, 90.0), CursorIcon::ResizeNesw);
        assert_eq!(cursor_for(kind, PointPosition::InBox, 30.0), CursorIcon::Move);
        assert_eq!(cursor_for(kind, PointPosition::NotInBox, 0.0), CursorIcon::Default);
    }

    #[test]
    fn test_rotate_cursors() {
        let kind = TransformationType::Rotate;
        assert_eq!(cursor_for(kind, PointPosition::TopRightCorner, 10.0), CursorIcon::Crosshair);
        assert_eq!(cursor_for(kind, PointPosition::InBox, 0.0), CursorIcon::Move);
        assert_eq!(cursor_for(kind, PointPosition::TopBorder, 0.0), CursorIcon::Default);
        assert_eq!(cursor_for(kind, PointPosition::NotInBox, 0.0), CursorIcon::Default);
    }
}
