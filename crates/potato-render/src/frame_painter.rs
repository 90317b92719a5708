//! Walks a frame and hands each visible box to a [`Painter`].

use crate::painter::{PaintContext, Painter, RenderResult, RendererError, TextKind};
use potato_core::boxes::SlideBox;
use potato_core::frame::Frame;
use potato_core::presentation::Presentation;
use potato_core::variables::{self, Variables};

pub struct FramePainter<'a> {
    presentation: &'a Presentation,
}

impl<'a> FramePainter<'a> {
    pub fn new(presentation: &'a Presentation) -> Self {
        Self { presentation }
    }

    /// Paint page `page`. With `reveal` set, boxes whose pause counter is
    /// above it are skipped; `None` paints the whole frame.
    ///
    /// Returns the number of boxes painted.
    pub fn paint(&self, page: usize, reveal: Option<u32>, painter: &mut dyn Painter) -> RenderResult<usize> {
        let frame = self
            .presentation
            .frame_at(page)
            .ok_or(RendererError::MissingPage(page))?;
        painter.begin_page(frame, reveal)?;

        let template_boxes = self.presentation.template_boxes(frame);
        let layers = template_boxes
            .into_iter()
            .map(|b| (b, true))
            .chain(frame.boxes.iter().map(|b| (b, false)));

        let mut painted = 0;
        for (slide_box, from_template) in layers {
            if reveal.is_some_and(|reveal| slide_box.pause_counter() > reveal) {
                continue;
            }
            paint_box(slide_box, from_template, frame, painter)?;
            painted += 1;
        }

        painter.end_page()?;
        log::debug!("painted {painted} boxes on page {page}");
        Ok(painted)
    }
}

fn paint_box(
    slide_box: &SlideBox,
    from_template: bool,
    frame: &Frame,
    painter: &mut dyn Painter,
) -> RenderResult<()> {
    let style = slide_box.style();
    let geometry = *slide_box.geometry();
    let ctx = PaintContext {
        id: slide_box.id(),
        style,
        geometry,
        transform: geometry.transform(),
        color: style.color_with_opacity(),
        from_template,
    };
    let vars: &Variables = &frame.variables;
    match slide_box {
        SlideBox::Text(b) => painter.draw_text(&ctx, TextKind::Text, &variables::substitute(&b.text, vars)),
        SlideBox::PlainText(b) => {
            painter.draw_text(&ctx, TextKind::Plain, &variables::substitute(&b.text, vars))
        }
        SlideBox::Title(b) => painter.draw_text(&ctx, TextKind::Title, &variables::substitute(&b.text, vars)),
        SlideBox::Code(b) => painter.draw_code(&ctx, b.language(), &variables::substitute(&b.code, vars)),
        SlideBox::Image(b) => painter.draw_image(&ctx, &variables::substitute(&b.source, vars), b.format()),
        SlideBox::Arrow(b) => {
            let (start, end) = b.endpoints();
            painter.draw_arrow(&ctx, start, end)
        }
        SlideBox::Line(b) => {
            let (start, end) = b.endpoints();
            painter.draw_line(&ctx, start, end)
        }
    }
}
