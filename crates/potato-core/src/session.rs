//! Editor canvas state: which page is shown, which box has focus, and the
//! drag in progress.
//!
//! Pointer coordinates are in the document's logical space. A press followed
//! by a move longer than the drag threshold starts a [`BoxTransformation`] on
//! the focused box; a release without a gesture moves focus to the box under
//! the pointer, cycling through overlapping boxes on repeated clicks.

use crate::cursor::{CursorIcon, cursor_for};
use crate::geometry::{BoxGeometry, PointPosition};
use crate::layout::{Layout, LayoutPreset};
use crate::presentation::Presentation;
use crate::transformation::{BoxTransformation, TransformationType};
use kurbo::Point;

/// Width of the grab band around box edges.
pub const DEFAULT_MARGIN: f64 = 15.0;

/// Pointer input in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

#[derive(Debug, Clone)]
pub struct EditSession {
    page: usize,
    active_box: Option<String>,
    kind: TransformationType,
    margin: f64,
    press: Option<Point>,
    dragging: bool,
    gesture: Option<BoxTransformation>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            page: 0,
            active_box: None,
            kind: TransformationType::default(),
            margin: DEFAULT_MARGIN,
            press: None,
            dragging: false,
            gesture: None,
        }
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Show another page. Focus and any drag are dropped.
    pub fn set_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.active_box = None;
            self.reset_pointer();
        }
    }

    pub fn active_box(&self) -> Option<&str> {
        self.active_box.as_deref()
    }

    pub fn set_active_box(&mut self, id: Option<String>) {
        self.active_box = id;
    }

    pub fn transformation_type(&self) -> TransformationType {
        self.kind
    }

    pub fn set_transformation_type(&mut self, kind: TransformationType) {
        self.kind = kind;
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Manhattan distance a press must travel before it counts as a drag.
    pub fn drag_threshold(&self) -> f64 {
        self.margin / 5.0
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Dispatch one pointer event. Returns the geometry written, if any.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        presentation: &mut Presentation,
    ) -> Option<BoxGeometry> {
        match event {
            PointerEvent::Down { position } => {
                self.pointer_down(position);
                None
            }
            PointerEvent::Move { position } => self.pointer_move(position, presentation),
            PointerEvent::Up { position } => {
                self.pointer_up(position, presentation);
                None
            }
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        self.reset_pointer();
        self.press = Some(position);
    }

    pub fn pointer_move(&mut self, position: Point, presentation: &mut Presentation) -> Option<BoxGeometry> {
        let press = self.press?;
        if !self.dragging {
            let moved = position - press;
            if moved.x.abs() + moved.y.abs() < self.drag_threshold() {
                return None;
            }
            self.dragging = true;
            self.gesture = self.start_gesture(press, presentation);
        }
        let gesture = self.gesture.as_mut()?;
        gesture.do_transformation(position, presentation)
    }

    pub fn pointer_up(&mut self, position: Point, presentation: &Presentation) {
        if self.gesture.is_none() {
            self.focus_box_at(position, presentation);
        }
        self.reset_pointer();
    }

    /// Cursor to show with the pointer at `position`.
    pub fn cursor_at(&self, position: Point, presentation: &Presentation) -> CursorIcon {
        if let Some(gesture) = &self.gesture {
            let angle = self.active_geometry(presentation).map_or(0.0, |g| g.angle);
            return cursor_for(self.kind, gesture.position(), angle);
        }
        match self.active_geometry(presentation) {
            Some(geometry) => cursor_for(self.kind, geometry.classify_point(position, self.margin), geometry.angle),
            None => CursorIcon::Default,
        }
    }

    /// Snap the focused box to a layout preset.
    pub fn apply_layout(&self, preset: LayoutPreset, layout: &Layout, presentation: &mut Presentation) -> bool {
        let Some(id) = &self.active_box else {
            return false;
        };
        log::debug!("layout {preset:?} on box {id:?}");
        presentation.set_box_geometry(self.page, id, layout.geometry(preset))
    }

    fn active_geometry(&self, presentation: &Presentation) -> Option<BoxGeometry> {
        let id = self.active_box.as_deref()?;
        let slide_box = presentation.frame_at(self.page)?.find_box(id)?;
        Some(*slide_box.geometry())
    }

    fn start_gesture(&self, press: Point, presentation: &Presentation) -> Option<BoxTransformation> {
        let id = self.active_box.as_deref()?;
        let geometry = self.active_geometry(presentation)?;
        let position = geometry.classify_point(press, self.margin);
        if position == PointPosition::NotInBox {
            return None;
        }
        log::debug!("gesture {:?} {position:?} on box {id:?}", self.kind);
        Some(BoxTransformation::new(id, self.kind, position, self.page, press))
    }

    /// Focus the box under `position`. Clicking again where several boxes
    /// overlap moves focus to the next one in drawing order.
    fn focus_box_at(&mut self, position: Point, presentation: &Presentation) {
        let Some(frame) = presentation.frame_at(self.page) else {
            self.active_box = None;
            return;
        };
        let hits: Vec<&str> = frame
            .boxes
            .iter()
            .filter(|b| b.contains_point(position, self.margin))
            .map(|b| b.id())
            .collect();
        let next = match self
            .active_box
            .as_deref()
            .and_then(|active| hits.iter().position(|id| *id == active))
        {
            Some(current) => hits[(current + 1) % hits.len()],
            None => match hits.first() {
                Some(id) => *id,
                None => {
                    self.active_box = None;
                    return;
                }
            },
        };
        self.active_box = Some(next.to_string());
    }

    fn reset_pointer(&mut self) {
        self.press = None;
        self.dragging = false;
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParserOptions, compile};

    const SOURCE: &str = "\\frame a\n\
        \\text id=back left=0 top=0 width=200 height=200 back\n\
        \\text id=front left=100 top=100 width=200 height=200 front\n\
        \\frame b\n\
        \\text id=other left=0 top=0 width=50 height=50 other\n";

    fn presentation() -> Presentation {
        let mut presentation = Presentation::new();
        presentation.set_frames(compile(SOURCE, ParserOptions::default()).unwrap().frames);
        presentation
    }

    fn click(session: &mut EditSession, presentation: &mut Presentation, at: Point) {
        session.handle_pointer_event(PointerEvent::Down { position: at }, presentation);
        session.handle_pointer_event(PointerEvent::Up { position: at }, presentation);
    }

    #[test]
    fn test_click_focuses_and_cycles() {
        let mut presentation = presentation();
        let mut session = EditSession::new();

        click(&mut session, &mut presentation, Point::new(50.0, 50.0));
        assert_eq!(session.active_box(), Some("back"));

        let overlap = Point::new(150.0, 150.0);
        click(&mut session, &mut presentation, overlap);
        assert_eq!(session.active_box(), Some("front"));
        click(&mut session, &mut presentation, overlap);
        assert_eq!(session.active_box(), Some("back"));
        click(&mut session, &mut presentation, overlap);
        assert_eq!(session.active_box(), Some("front"));

        click(&mut session, &mut presentation, Point::new(900.0, 900.0));
        assert_eq!(session.active_box(), None);
    }

    #[test]
    fn test_drag_moves_focused_box() {
        let mut presentation = presentation();
        let mut session = EditSession::new();
        click(&mut session, &mut presentation, Point::new(50.0, 50.0));

        session.pointer_down(Point::new(50.0, 50.0));
        // Below the threshold nothing happens.
        assert!(session.pointer_move(Point::new(51.0, 51.0), &mut presentation).is_none());
        let moved = session.pointer_move(Point::new(60.0, 55.0), &mut presentation).unwrap();
        assert_eq!((moved.left, moved.top), (10.0, 5.0));
        assert!(session.is_dragging());
        session.pointer_up(Point::new(60.0, 55.0), &presentation);

        assert!(!session.is_dragging());
        assert_eq!(session.active_box(), Some("back"));
        assert_eq!(presentation.box_by_id("back").unwrap().geometry().left, 10.0);
    }

    #[test]
    fn test_drag_outside_focused_box_changes_nothing() {
        let mut presentation = presentation();
        let mut session = EditSession::new();
        click(&mut session, &mut presentation, Point::new(50.0, 50.0));
        let before = presentation.snapshot();

        session.pointer_down(Point::new(500.0, 500.0));
        assert!(session.pointer_move(Point::new(520.0, 520.0), &mut presentation).is_none());
        session.pointer_up(Point::new(520.0, 520.0), &presentation);
        assert_eq!(*before, *presentation.frames());
    }

    #[test]
    fn test_resize_from_corner() {
        let mut presentation = presentation();
        let mut session = EditSession::new();
        click(&mut session, &mut presentation, Point::new(50.0, 50.0));

        session.pointer_down(Point::new(200.0, 200.0));
        let resized = session.pointer_move(Point::new(240.0, 220.0), &mut presentation).unwrap();
        assert_eq!((resized.width, resized.height), (240.0, 220.0));
        assert_eq!((resized.left, resized.top), (0.0, 0.0));
    }

    #[test]
    fn test_cursor_and_layout() {
        let mut presentation = presentation();
        let mut session = EditSession::new();
        assert_eq!(session.cursor_at(Point::new(50.0, 50.0), &presentation), CursorIcon::Default);
        assert!(!session.apply_layout(LayoutPreset::Title, &Layout::default(), &mut presentation));

        click(&mut session, &mut presentation, Point::new(50.0, 50.0));
        assert_eq!(session.cursor_at(Point::new(50.0, 50.0), &presentation), CursorIcon::Move);
        assert_eq!(session.cursor_at(Point::new(0.0, 100.0), &presentation), CursorIcon::ResizeEw);
        session.set_transformation_type(TransformationType::Rotate);
        assert_eq!(session.cursor_at(Point::new(0.0, 0.0), &presentation), CursorIcon::Crosshair);

        let layout = Layout::default();
        assert!(session.apply_layout(LayoutPreset::Title, &layout, &mut presentation));
        assert_eq!(
            *presentation.box_by_id("back").unwrap().geometry(),
            layout.geometry(LayoutPreset::Title)
        );
    }

    #[test]
    fn test_set_page_drops_focus() {
        let mut presentation = presentation();
        let mut session = EditSession::new();
        click(&mut session, &mut presentation, Point::new(50.0, 50.0));
        session.set_page(1);
        assert_eq!(session.active_box(), None);
        click(&mut session, &mut presentation, Point::new(10.0, 10.0));
        assert_eq!(session.active_box(), Some("other"));
    }
}
