//! Handlers for the body commands.

use super::Parser;
use crate::boxes::{
    ArrowBox, BoxBase, CodeBox, ImageBox, LineBox, PlainTextBox, SlideBox, TextBox, TitleBox,
};
use crate::error::{ParseResult, ParserError, ParserErrorKind};
use crate::frame::Frame;
use crate::layout::LayoutPreset;
use crate::tokenizer::TokenKind;
use crate::variables::{self, DATE, PAGE_NUMBER, RESOURCE_PATH};

/// Placeholder text for `\blindtext`.
pub const BLIND_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipisici elit, sed eiusmod \
tempor incidunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation \
ullamco laboris nisi ut aliquid ex ea commodi consequat. Quis aute iure reprehenderit in voluptate \
velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint obcaecat cupiditat non proident, \
sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Commands accepted after the preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Frame,
    Text,
    Image,
    Body,
    Title,
    Arrow,
    Line,
    Pause,
    PlainText,
    BlindText,
    SetVar,
    Code,
}

impl Command {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "\\frame" => Command::Frame,
            "\\text" => Command::Text,
            "\\image" => Command::Image,
            "\\body" => Command::Body,
            "\\title" => Command::Title,
            "\\arrow" => Command::Arrow,
            "\\line" => Command::Line,
            "\\pause" => Command::Pause,
            "\\plaintext" => Command::PlainText,
            "\\blindtext" => Command::BlindText,
            "\\setvar" => Command::SetVar,
            "\\code" => Command::Code,
            _ => return None,
        };
        Some(command)
    }
}

/// What a box command accepts as content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Content {
    /// A single `Text` token.
    Line,
    /// `Text` or `MultiLineText`.
    Block,
}

impl Parser {
    pub(super) fn command(&mut self, command: Command, line: usize) -> ParseResult<()> {
        match command {
            Command::Frame => self.new_frame(line),
            Command::Text => self.new_text_field(line),
            Command::Image => self.new_image(line),
            Command::Body => self.new_body(line),
            Command::Title => self.new_title(line),
            Command::Arrow => self.new_arrow(line),
            Command::Line => self.new_line(line),
            Command::Pause => {
                self.pause_count += 1;
                Ok(())
            }
            Command::PlainText => self.new_plain_text(line),
            Command::BlindText => self.new_blind_text(line),
            Command::SetVar => self.set_variable(line),
            Command::Code => self.new_code(line),
        }
    }

    fn new_frame(&mut self, line: usize) -> ParseResult<()> {
        self.ids.reset_counter();
        self.pause_count = 0;

        let mut token = self.tokenizer.next_token();
        let mut class = None;
        if token.is(TokenKind::Argument) {
            if token.text != "class" {
                return Err(ParserError::new(ParserErrorKind::InvalidFrameArgument, token.line));
            }
            let value = self.tokenizer.next_token();
            if !value.is(TokenKind::ArgumentValue) {
                return Err(ParserError::new(ParserErrorKind::MissingArgumentValue, token.line));
            }
            class = Some(value.text);
            token = self.tokenizer.next_token();
        }

        if !token.is(TokenKind::Text) || token.text.is_empty() {
            return Err(ParserError::new(ParserErrorKind::MissingFrameId, line));
        }
        if self.frames.contains_frame(&token.text) {
            return Err(ParserError::new(ParserErrorKind::DuplicateFrameId, line));
        }

        self.variables
            .insert(PAGE_NUMBER.to_string(), self.frames.len().to_string());
        if !self.variables.contains_key(DATE) {
            self.variables.insert(DATE.to_string(), self.options.date_string());
        }
        if !self.variables.contains_key(RESOURCE_PATH) {
            self.variables
                .insert(RESOURCE_PATH.to_string(), self.options.resource_path.clone());
        }

        log::debug!("frame {:?} at line {}", token.text, line + 1);
        self.frames.push(
            Frame::new(token.text, line)
                .with_class(class)
                .with_variables(self.variables.clone()),
        );
        Ok(())
    }

    /// Shared start of every box command: frame check, arguments, id.
    fn begin_box(&mut self, line: usize, preset: LayoutPreset) -> ParseResult<BoxBase> {
        let frame_id = match self.frames.frames.last() {
            Some(frame) => frame.id.clone(),
            None => return Err(ParserError::new(ParserErrorKind::MissingFrame, line)),
        };
        let geometry = self.options.layout.geometry(preset);
        let arguments = self.read_arguments(geometry)?;
        let id = arguments
            .id
            .unwrap_or_else(|| self.ids.generate(&frame_id));
        let mut base = BoxBase::new(id, arguments.style);
        base.pause_counter = self.pause_count;
        base.line = line;
        Ok(base)
    }

    fn append_box(&mut self, slide_box: SlideBox) {
        self.ids.advance();
        if let Some(frame) = self.frames.last_mut() {
            frame.append_box(slide_box);
        }
    }

    /// Consume the content token if there is one.
    fn take_content(&mut self, content: Content) -> Option<String> {
        let next = self.tokenizer.peek_next();
        let accepted = match content {
            Content::Line => next.is(TokenKind::Text),
            Content::Block => next.is_text(),
        };
        accepted.then(|| self.tokenizer.next_token().text)
    }

    fn new_text_field(&mut self, line: usize) -> ParseResult<()> {
        let base = self.begin_box(line, LayoutPreset::Body)?;
        let text = self.take_content(Content::Block).unwrap_or_default();
        self.append_box(SlideBox::Text(TextBox::new(base, text)));
        Ok(())
    }

    fn new_plain_text(&mut self, line: usize) -> ParseResult<()> {
        let mut base = self.begin_box(line, LayoutPreset::Body)?;
        base.style.class = "body".to_string();
        let text = self.take_content(Content::Block).unwrap_or_default();
        self.append_box(SlideBox::PlainText(PlainTextBox::new(base, text)));
        Ok(())
    }

    fn new_body(&mut self, line: usize) -> ParseResult<()> {
        let mut base = self.begin_box(line, LayoutPreset::Body)?;
        base.style.class = "body".to_string();
        let text = self.take_content(Content::Block).unwrap_or_default();
        self.append_box(SlideBox::Text(TextBox::new(base, text)));
        Ok(())
    }

    fn new_title(&mut self, line: usize) -> ParseResult<()> {
        let mut base = self.begin_box(line, LayoutPreset::Title)?;
        base.style.class = "title".to_string();
        let next = self.tokenizer.peek_next();
        let has_text = next.is(TokenKind::Text) && !next.text.is_empty();
        let text = if has_text {
            self.tokenizer.next_token().text
        } else {
            self.frames
                .frames
                .last()
                .map(|frame| frame.id.clone())
                .unwrap_or_default()
        };
        self.append_box(SlideBox::Title(TitleBox::new(base, text)));
        Ok(())
    }

    fn new_image(&mut self, line: usize) -> ParseResult<()> {
        let base = self.begin_box(line, LayoutPreset::Body)?;
        let source = self.take_content(Content::Line).unwrap_or_default();
        self.append_box(SlideBox::Image(ImageBox::new(base, source)));
        Ok(())
    }

    fn new_code(&mut self, line: usize) -> ParseResult<()> {
        let base = self.begin_box(line, LayoutPreset::Body)?;
        let code = self.take_content(Content::Block).unwrap_or_default();
        self.append_box(SlideBox::Code(CodeBox::new(base, code)));
        Ok(())
    }

    fn new_arrow(&mut self, line: usize) -> ParseResult<()> {
        let base = self.begin_box(line, LayoutPreset::Body)?;
        self.append_box(SlideBox::Arrow(ArrowBox::new(base)));
        self.expect_no_text("arrow", line)
    }

    fn new_line(&mut self, line: usize) -> ParseResult<()> {
        let base = self.begin_box(line, LayoutPreset::Body)?;
        self.append_box(SlideBox::Line(LineBox::new(base)));
        self.expect_no_text("line", line)
    }

    fn expect_no_text(&self, command: &'static str, line: usize) -> ParseResult<()> {
        let next = self.tokenizer.peek_next();
        if next.is(TokenKind::Command) || next.is(TokenKind::EndOfFile) {
            Ok(())
        } else {
            Err(ParserError::new(ParserErrorKind::UnexpectedText { command }, line))
        }
    }

    fn new_blind_text(&mut self, line: usize) -> ParseResult<()> {
        let mut base = self.begin_box(line, LayoutPreset::Body)?;
        base.style.class = "body".to_string();
        let text = match self.take_content(Content::Line) {
            Some(length) => blind_text(&length, line),
            None => BLIND_TEXT.to_string(),
        };
        self.append_box(SlideBox::Text(TextBox::new(base, text)));
        Ok(())
    }

    /// `\setvar name value`: the first word names the variable, the rest is its value.
    pub(super) fn set_variable(&mut self, line: usize) -> ParseResult<()> {
        let token = self.tokenizer.next_token();
        if !token.is(TokenKind::Text) {
            return Err(ParserError::new(ParserErrorKind::MissingVariable, line));
        }
        let (name, value) = token
            .text
            .split_once(char::is_whitespace)
            .unwrap_or((token.text.as_str(), ""));
        self.variables
            .insert(variables::bracket(name), value.to_string());
        Ok(())
    }
}

/// The first `length` characters of the placeholder. A negative length keeps
/// all of it, anything that is not a number gives an empty text.
fn blind_text(length: &str, line: usize) -> String {
    match length.trim().parse::<i64>() {
        Ok(n) if n >= 0 => BLIND_TEXT.chars().take(n as usize).collect(),
        Ok(_) => BLIND_TEXT.to_string(),
        Err(_) => {
            log::warn!("line {}: blindtext length {length:?} is not a number", line + 1);
            String::new()
        }
    }
}
