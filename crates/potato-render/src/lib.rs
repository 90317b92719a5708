//! Potato Render Library
//!
//! Turns compiled frames into draw calls on a [`Painter`] backend.

mod frame_painter;
mod outline;
mod painter;
mod pages;

pub use frame_painter::FramePainter;
pub use outline::OutlinePainter;
pub use pages::{OutputMode, Page, pages};
pub use painter::{PaintContext, Painter, RenderResult, RendererError, TextKind};
