//! Frames and the compiled frame list.

use crate::boxes::SlideBox;
use crate::geometry::BoxGeometry;
use crate::template::TemplateBoxRef;
use crate::variables::Variables;
use serde::{Deserialize, Serialize};

/// One slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    #[serde(default)]
    pub class: Option<String>,
    pub boxes: Vec<SlideBox>,
    /// Boxes borrowed from the template, resolved through [`Template`](crate::template::Template).
    #[serde(default)]
    pub template_boxes: Vec<TemplateBoxRef>,
    /// Variables as they were when the frame was opened.
    #[serde(default)]
    pub variables: Variables,
    /// 0-based line of the `\frame` command.
    #[serde(default)]
    pub line: usize,
}

impl Frame {
    pub fn new(id: impl Into<String>, line: usize) -> Self {
        Self {
            id: id.into(),
            class: None,
            boxes: Vec::new(),
            template_boxes: Vec::new(),
            variables: Variables::new(),
            line,
        }
    }

    pub fn with_class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn append_box(&mut self, slide_box: SlideBox) {
        self.boxes.push(slide_box);
    }

    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Reveal steps: highest pause counter + 1.
    pub fn number_pauses(&self) -> u32 {
        self.boxes
            .iter()
            .map(SlideBox::pause_counter)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn find_box(&self, id: &str) -> Option<&SlideBox> {
        self.boxes.iter().find(|b| b.id() == id)
    }

    pub fn find_box_mut(&mut self, id: &str) -> Option<&mut SlideBox> {
        self.boxes.iter_mut().find(|b| b.id() == id)
    }

    /// Replace a box's geometry. Returns false if no box has `id`.
    pub fn set_box_geometry(&mut self, id: &str, geometry: BoxGeometry) -> bool {
        match self.find_box_mut(id) {
            Some(slide_box) => {
                slide_box.set_geometry(geometry);
                true
            }
            None => false,
        }
    }

    /// Last box whose command starts at or before `line`.
    pub fn box_at_line(&self, line: usize) -> Option<&SlideBox> {
        self.boxes.iter().rev().find(|b| b.line() <= line)
    }
}

/// The compiled document: frames in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameList {
    pub frames: Vec<Frame>,
}

impl FrameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    pub fn last_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn frame_by_id(&self, id: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn contains_frame(&self, id: &str) -> bool {
        self.frame_by_id(id).is_some()
    }

    /// Index of the frame a source line belongs to, and the box under it if any.
    pub fn find_box_for_line(&self, line: usize) -> Option<(usize, Option<&SlideBox>)> {
        let index = self.frames.iter().rposition(|f| f.line <= line)?;
        Some((index, self.frames[index].box_at_line(line)))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
