//! The document currently being edited.
//!
//! A successful compile replaces the frame list wholesale. Readers hold an
//! `Arc` snapshot that never changes under them; interactive edits go through
//! [`Presentation::set_box_geometry`], which copies the list if a snapshot is
//! still alive.

use crate::boxes::SlideBox;
use crate::frame::{Frame, FrameList};
use crate::geometry::BoxGeometry;
use crate::template::Template;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Presentation {
    frames: Arc<FrameList>,
    template: Option<Arc<Template>>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document, keeping the current template.
    pub fn set_frames(&mut self, mut frames: FrameList) {
        if let Some(template) = &self.template {
            template.apply(&mut frames);
        }
        log::debug!("presentation replaced: {} frames", frames.len());
        self.frames = Arc::new(frames);
    }

    /// Replace document and template together.
    pub fn set_data(&mut self, frames: FrameList, template: Option<Arc<Template>>) {
        self.template = template;
        self.set_frames(frames);
    }

    pub fn snapshot(&self) -> Arc<FrameList> {
        Arc::clone(&self.frames)
    }

    pub fn frames(&self) -> &FrameList {
        &self.frames
    }

    pub fn template(&self) -> Option<&Arc<Template>> {
        self.template.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_at(&self, page: usize) -> Option<&Frame> {
        self.frames.get(page)
    }

    pub fn frame_by_id(&self, id: &str) -> Option<&Frame> {
        self.frames.frame_by_id(id)
    }

    /// Page index of the frame with `id`.
    pub fn page_of(&self, id: &str) -> Option<usize> {
        self.frames.iter().position(|f| f.id == id)
    }

    /// Look a box up by id in any frame.
    pub fn box_by_id(&self, id: &str) -> Option<&SlideBox> {
        self.frames.iter().find_map(|f| f.find_box(id))
    }

    /// Template boxes borrowed by `frame`, in drawing order.
    pub fn template_boxes<'a>(&'a self, frame: &'a Frame) -> Vec<&'a SlideBox> {
        match &self.template {
            Some(template) => template.boxes_for(frame).collect(),
            None => Vec::new(),
        }
    }

    /// Frame index and box for a source line.
    pub fn find_box_for_line(&self, line: usize) -> Option<(usize, Option<&SlideBox>)> {
        self.frames.find_box_for_line(line)
    }

    /// Set a box's geometry on page `page`. Returns false if the box is not there.
    pub fn set_box_geometry(&mut self, page: usize, id: &str, geometry: BoxGeometry) -> bool {
        let present = self
            .frames
            .get(page)
            .is_some_and(|frame| frame.find_box(id).is_some());
        if !present {
            log::warn!("no box {id:?} on page {page}");
            return false;
        }
        Arc::make_mut(&mut self.frames)
            .get_mut(page)
            .is_some_and(|frame| frame.set_box_geometry(id, geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParserOptions, compile};

    fn presentation() -> Presentation {
        let compiled = compile(
            "\\frame a\n\\text id=one hello\n\\frame b\n\\title\n",
            ParserOptions::default(),
        )
        .unwrap();
        let mut presentation = Presentation::new();
        presentation.set_frames(compiled.frames);
        presentation
    }

    #[test]
    fn test_lookups() {
        let presentation = presentation();
        assert_eq!(presentation.len(), 2);
        assert_eq!(presentation.frame_at(1).unwrap().id, "b");
        assert_eq!(presentation.page_of("b"), Some(1));
        assert_eq!(presentation.box_by_id("b-intern-0").unwrap().content(), "b");
        assert!(presentation.box_by_id("nope").is_none());
        assert!(presentation.template_boxes(presentation.frame_at(0).unwrap()).is_empty());
    }

    #[test]
    fn test_set_box_geometry_keeps_snapshots() {
        let mut presentation = presentation();
        let before = presentation.snapshot();
        let geometry = BoxGeometry::new(1.0, 2.0, 3.0, 4.0);

        assert!(presentation.set_box_geometry(0, "one", geometry));
        assert_eq!(*presentation.box_by_id("one").unwrap().geometry(), geometry);
        assert_ne!(*before.frames[0].boxes[0].geometry(), geometry);

        assert!(!presentation.set_box_geometry(1, "one", geometry));
        assert!(!presentation.set_box_geometry(9, "one", geometry));
    }

    #[test]
    fn test_template_applied_on_replace() {
        let template_frames = compile("\\frame default\n\\text footer\n", ParserOptions::default())
            .unwrap()
            .frames;
        let template = Arc::new(Template::new("t", template_frames));
        let mut presentation = Presentation::new();
        let frames = compile("\\frame a\n", ParserOptions::default()).unwrap().frames;
        presentation.set_data(frames, Some(template));

        let frame = presentation.frame_at(0).unwrap();
        let boxes = presentation.template_boxes(frame);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].content(), "footer");
    }
}
