//! Output pages for printing a presentation.

use potato_core::presentation::Presentation;
use serde::{Deserialize, Serialize};

/// How frames with pauses turn into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// One page per frame, everything visible.
    Handout,
    /// One page per reveal step.
    #[default]
    Pause,
}

/// One output page: a frame and how much of it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub frame: usize,
    /// `None` shows the whole frame.
    pub reveal: Option<u32>,
}

pub fn pages(presentation: &Presentation, mode: OutputMode) -> Vec<Page> {
    presentation
        .frames()
        .iter()
        .enumerate()
        .flat_map(|(frame, f)| {
            let steps = match mode {
                OutputMode::Handout => 0..0,
                OutputMode::Pause => 0..f.number_pauses(),
            };
            let whole = (mode == OutputMode::Handout).then_some(Page { frame, reveal: None });
            whole
                .into_iter()
                .chain(steps.map(move |step| Page { frame, reveal: Some(step) }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use potato_core::parser::{ParserOptions, compile};

    fn presentation() -> Presentation {
        let source = "\\frame a\n\\text one\n\\pause\n\\text two\n\\frame b\n\\frame c\n\\pause\n\\text late\n";
        let mut presentation = Presentation::new();
        presentation.set_frames(compile(source, ParserOptions::default()).unwrap().frames);
        presentation
    }

    #[test]
    fn test_handout_one_page_per_frame() {
        let pages = pages(&presentation(), OutputMode::Handout);
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.reveal.is_none()));
    }

    #[test]
    fn test_pause_pages() {
        let pages = pages(&presentation(), OutputMode::Pause);
        let expected = [(0, 0), (0, 1), (1, 0), (2, 0), (2, 1)];
        assert_eq!(
            pages,
            expected
                .iter()
                .map(|&(frame, step)| Page { frame, reveal: Some(step) })
                .collect::<Vec<_>>()
        );
    }
}
