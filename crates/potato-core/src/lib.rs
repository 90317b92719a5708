//! Potato Core Library
//!
//! Markup compiler, document model and geometry engine for Potato
//! presentations.

pub mod boxes;
pub mod cache;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod parser;
pub mod presentation;
pub mod session;
pub mod style;
pub mod template;
pub mod tokenizer;
pub mod transformation;
pub mod variables;

pub use boxes::{BoxTrait, SlideBox};
pub use cache::{AssetCache, DataEntry, FileLoadStatus, MemoryCache};
pub use cursor::{CursorIcon, cursor_for};
pub use error::{ParseResult, ParserError, ParserErrorKind};
pub use frame::{Frame, FrameList};
pub use geometry::{BoxGeometry, PointPosition};
pub use layout::{AspectRatio, Layout, LayoutPreset};
pub use parser::{Compiled, CompileOutput, Parser, ParserOptions, Preamble, compile};
pub use presentation::Presentation;
pub use session::{EditSession, PointerEvent};
pub use style::BoxStyle;
pub use template::{Template, TemplateError, load_template, template_path};
pub use transformation::{BoxTransformation, TransformationType};
pub use variables::Variables;
