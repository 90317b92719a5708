//! Templates: compiled documents whose boxes frames borrow as decoration.
//!
//! A frame borrows the boxes of the template frame whose id equals the frame's
//! class, or of the template frame `default` when the frame has no class.
//! Template boxes with a class of their own are placeholders for user content
//! and are never borrowed.

use crate::boxes::SlideBox;
use crate::error::ParserError;
use crate::frame::{Frame, FrameList};
use crate::parser::{Parser, ParserOptions};
use crate::variables::Variables;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template frame used by frames without a class.
pub const DEFAULT_TEMPLATE_FRAME: &str = "default";

/// File extension of markup sources.
pub const SOURCE_EXTENSION: &str = "potato";

/// Template loading errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error in line {}: {}", .0.display_line(), .0.message())]
    Parse(#[from] ParserError),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Index of a borrowed box: template frame, then box within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateBoxRef {
    pub frame: usize,
    pub index: usize,
}

/// A compiled template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    name: String,
    frames: FrameList,
    variables: Variables,
}

impl Template {
    pub fn new(name: impl Into<String>, frames: FrameList) -> Self {
        Self {
            name: name.into(),
            frames,
            variables: Variables::new(),
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &FrameList {
        &self.frames
    }

    /// Variables the template defines; documents using it start from these.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Borrowable boxes for a frame of the given class.
    pub fn box_refs_for_class(&self, class: Option<&str>) -> Vec<TemplateBoxRef> {
        let wanted = class.unwrap_or(DEFAULT_TEMPLATE_FRAME);
        let Some(frame) = self.frames.iter().position(|f| f.id == wanted) else {
            return Vec::new();
        };
        self.frames.frames[frame]
            .boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.style().has_class())
            .map(|(index, _)| TemplateBoxRef { frame, index })
            .collect()
    }

    pub fn resolve(&self, box_ref: TemplateBoxRef) -> Option<&SlideBox> {
        self.frames.get(box_ref.frame)?.boxes.get(box_ref.index)
    }

    /// The template boxes `frame` borrows, in order.
    pub fn boxes_for<'a>(&'a self, frame: &'a Frame) -> impl Iterator<Item = &'a SlideBox> + 'a {
        frame.template_boxes.iter().filter_map(|r| self.resolve(*r))
    }

    /// Point every frame's `template_boxes` at this template.
    pub fn apply(&self, frames: &mut FrameList) {
        for frame in &mut frames.frames {
            frame.template_boxes = self.box_refs_for_class(frame.class.as_deref());
        }
    }
}

/// `path` with the markup extension appended (`theme` → `theme.potato`).
fn source_file(path: &Path) -> PathBuf {
    let mut file = path.as_os_str().to_os_string();
    file.push(".");
    file.push(SOURCE_EXTENSION);
    PathBuf::from(file)
}

/// Source file of a template name, relative names taken from `base_dir`.
pub fn template_path(name: &str, base_dir: &Path) -> PathBuf {
    source_file(&base_dir.join(name))
}

/// Compile the template at `path` (without extension).
pub fn load_template(path: &Path, options: ParserOptions) -> TemplateResult<Template> {
    let file = source_file(path);
    if !file.exists() {
        return Err(TemplateError::NotFound(file));
    }
    let source = fs::read_to_string(&file)?;

    let mut parser = Parser::new(options);
    parser.load_input(&source);
    let compiled = parser.compile()?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::info!("loaded template {name:?} with {} frames", compiled.frames.len());
    Ok(Template::new(name, compiled.frames).with_variables(parser.variables().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::compile;
    use tempfile::tempdir;

    const TEMPLATE: &str = "\\setvar author Ada\n\
        \\frame default\n\\text id=footer %{pagenumber}\n\\title class=title placeholder\n\
        \\frame section\n\\image id=banner banner.png\n";

    fn template() -> Template {
        let frames = compile(TEMPLATE, ParserOptions::default()).unwrap().frames;
        Template::new("talk", frames)
    }

    #[test]
    fn test_refs_skip_classed_boxes() {
        let template = template();
        let refs = template.box_refs_for_class(None);
        assert_eq!(refs, vec![TemplateBoxRef { frame: 0, index: 0 }]);
        assert_eq!(template.resolve(refs[0]).unwrap().id(), "footer");

        let refs = template.box_refs_for_class(Some("section"));
        assert_eq!(template.resolve(refs[0]).unwrap().id(), "banner");
        assert!(template.box_refs_for_class(Some("missing")).is_empty());
    }

    #[test]
    fn test_apply() {
        let template = template();
        let mut frames = compile("\\frame a\n\\frame class=section b\n", ParserOptions::default())
            .unwrap()
            .frames;
        template.apply(&mut frames);
        let ids: Vec<_> = template.boxes_for(&frames.frames[0]).map(SlideBox::id).collect();
        assert_eq!(ids, vec!["footer"]);
        let ids: Vec<_> = template.boxes_for(&frames.frames[1]).map(SlideBox::id).collect();
        assert_eq!(ids, vec!["banner"]);
    }

    #[test]
    fn test_template_path() {
        let base = Path::new("/talks");
        assert_eq!(template_path("theme", base), PathBuf::from("/talks/theme.potato"));
        assert_eq!(template_path("/abs/theme", base), PathBuf::from("/abs/theme.potato"));
    }

    #[test]
    fn test_load_template() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("talk.potato"), TEMPLATE).unwrap();

        let template = load_template(&dir.path().join("talk"), ParserOptions::default()).unwrap();
        assert_eq!(template.name(), "talk");
        assert_eq!(template.frames().len(), 2);
        assert_eq!(template.variables()["%{author}"], "Ada");
    }

    #[test]
    fn test_load_template_errors() {
        let dir = tempdir().unwrap();
        let err = load_template(&dir.path().join("missing"), ParserOptions::default()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));

        fs::write(dir.path().join("broken.potato"), "\\frame a\n\\frame a\n").unwrap();
        let err = load_template(&dir.path().join("broken"), ParserOptions::default()).unwrap_err();
        match err {
            TemplateError::Parse(parse) => assert_eq!(parse.line, 1),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
