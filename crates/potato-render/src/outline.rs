//! Plain-text painter: one line per box, for terminals and diffs.

use crate::painter::{PaintContext, Painter, RenderResult, TextKind};
use kurbo::Point;
use potato_core::boxes::ImageFormat;
use potato_core::frame::Frame;

#[derive(Debug, Default)]
pub struct OutlinePainter {
    out: String,
    page: usize,
}

impl OutlinePainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, ctx: &PaintContext<'_>, what: &str, detail: &str) {
        let g = ctx.geometry;
        let origin = if ctx.from_template { " (template)" } else { "" };
        let angle = if g.angle != 0.0 { format!(" @{}°", g.angle) } else { String::new() };
        self.out.push_str(&format!(
            "  {what} {}{origin} [{} {} {}x{}{angle}] {}\n",
            ctx.id,
            g.left,
            g.top,
            g.width,
            g.height,
            first_line(detail)
        ));
    }
}

/// First line of `text`, with a marker when more follow.
fn first_line(text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    if lines.next().is_some() {
        format!("{first} …")
    } else {
        first.to_string()
    }
}

impl Painter for OutlinePainter {
    fn begin_page(&mut self, frame: &Frame, reveal: Option<u32>) -> RenderResult<()> {
        self.page += 1;
        let heading = match reveal {
            Some(step) => format!("Page {}: {} (step {})\n", self.page, frame.id, step + 1),
            None => format!("Page {}: {}\n", self.page, frame.id),
        };
        self.out.push_str(&heading);
        Ok(())
    }

    fn draw_text(&mut self, ctx: &PaintContext<'_>, kind: TextKind, text: &str) -> RenderResult<()> {
        let what = match kind {
            TextKind::Text => "text",
            TextKind::Plain => "plaintext",
            TextKind::Title => "title",
        };
        self.line(ctx, what, text);
        Ok(())
    }

    fn draw_code(&mut self, ctx: &PaintContext<'_>, language: &str, code: &str) -> RenderResult<()> {
        let what = if language.is_empty() { "code".to_string() } else { format!("code:{language}") };
        self.line(ctx, &what, code);
        Ok(())
    }

    fn draw_image(&mut self, ctx: &PaintContext<'_>, source: &str, format: Option<ImageFormat>) -> RenderResult<()> {
        let what = if format.is_some() { "image" } else { "image(unknown format)" };
        self.line(ctx, what, source);
        Ok(())
    }

    fn draw_arrow(&mut self, ctx: &PaintContext<'_>, start: Point, end: Point) -> RenderResult<()> {
        self.line(ctx, "arrow", &format!("({:.0}, {:.0}) -> ({:.0}, {:.0})", start.x, start.y, end.x, end.y));
        Ok(())
    }

    fn draw_line(&mut self, ctx: &PaintContext<'_>, start: Point, end: Point) -> RenderResult<()> {
        self.line(ctx, "line", &format!("({:.0}, {:.0}) -> ({:.0}, {:.0})", start.x, start.y, end.x, end.y));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_painter::FramePainter;
    use potato_core::parser::{ParserOptions, compile};
    use potato_core::presentation::Presentation;

    #[test]
    fn test_outline() {
        let source = "\\frame intro\n\\text id=t left=10 top=20 width=30 height=40 angle=90 \"a\nb\"\n\
                      \\line id=l left=0 top=0 width=100 height=0\n";
        let mut presentation = Presentation::new();
        presentation.set_frames(compile(source, ParserOptions::default()).unwrap().frames);

        let mut painter = OutlinePainter::new();
        FramePainter::new(&presentation).paint(0, Some(0), &mut painter).unwrap();
        assert_eq!(
            painter.finish(),
            "Page 1: intro (step 1)\n  text t [10 20 30x40 @90°] a …\n  line l [0 0 100x0] (0, 0) -> (100, 0)\n"
        );
    }

    #[test]
    fn test_pages_are_numbered_across_frames() {
        let source = "\\frame a\n\\image id=i left=1 top=2 width=3 height=4 pic.xyz\n\\frame b\n";
        let mut presentation = Presentation::new();
        presentation.set_frames(compile(source, ParserOptions::default()).unwrap().frames);

        let mut painter = OutlinePainter::new();
        let frame_painter = FramePainter::new(&presentation);
        frame_painter.paint(0, None, &mut painter).unwrap();
        frame_painter.paint(1, None, &mut painter).unwrap();
        assert_eq!(
            painter.finish(),
            "Page 1: a\n  image(unknown format) i [1 2 3x4] pic.xyz\nPage 2: b\n"
        );
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("one"), "one");
        assert_eq!(first_line("one\ntwo"), "one …");
    }
}
