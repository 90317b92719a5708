//! Painter trait abstraction.

use kurbo::{Affine, Point};
use peniko::Color;
use potato_core::boxes::ImageFormat;
use potato_core::frame::Frame;
use potato_core::geometry::BoxGeometry;
use potato_core::style::BoxStyle;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Page {0} does not exist")]
    MissingPage(usize),
    #[error("Cannot load image: {0}")]
    Image(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Text flavours painted by [`Painter::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Rich text.
    Text,
    /// Text painted verbatim.
    Plain,
    Title,
}

/// Everything a painter needs about one box besides its content.
#[derive(Debug, Clone, Copy)]
pub struct PaintContext<'a> {
    pub id: &'a str,
    pub style: &'a BoxStyle,
    pub geometry: BoxGeometry,
    /// Box-local to page coordinates (rotation about the box center).
    pub transform: Affine,
    /// Style color with opacity applied.
    pub color: Color,
    /// The box comes from the template rather than the frame.
    pub from_template: bool,
}

/// Trait for painting backends.
///
/// Text has variables already substituted when it reaches the painter.
pub trait Painter {
    /// Called before the first box of a page.
    fn begin_page(&mut self, _frame: &Frame, _reveal: Option<u32>) -> RenderResult<()> {
        Ok(())
    }

    /// Called after the last box of a page.
    fn end_page(&mut self) -> RenderResult<()> {
        Ok(())
    }

    fn draw_text(&mut self, ctx: &PaintContext<'_>, kind: TextKind, text: &str) -> RenderResult<()>;

    fn draw_code(&mut self, ctx: &PaintContext<'_>, language: &str, code: &str) -> RenderResult<()>;

    fn draw_image(&mut self, ctx: &PaintContext<'_>, source: &str, format: Option<ImageFormat>) -> RenderResult<()>;

    fn draw_arrow(&mut self, ctx: &PaintContext<'_>, start: Point, end: Point) -> RenderResult<()>;

    fn draw_line(&mut self, ctx: &PaintContext<'_>, start: Point, end: Point) -> RenderResult<()>;
}
