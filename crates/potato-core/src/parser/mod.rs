//! Compiles markup into a [`FrameList`].
//!
//! Parsing runs in two phases. The preamble accepts `\usetemplate` and
//! `\setvar` up to the first `\frame`; the body dispatches every command to a
//! handler. The first problem aborts the compile with a [`ParserError`].

mod arguments;
mod commands;
mod ids;

pub use commands::BLIND_TEXT;

use crate::error::{ParseResult, ParserError, ParserErrorKind};
use crate::frame::FrameList;
use crate::layout::Layout;
use crate::tokenizer::{TokenKind, Tokenizer};
use crate::variables::{TOTAL_PAGES, Variables};
use commands::Command;
use ids::BoxIds;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

/// Format of the `%{date}` variable when no date is configured.
pub const DATE_FORMAT: &str = "%a %b %-d %Y";

/// Settings that shape a compile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserOptions {
    /// Value of `%{resourcepath}`.
    pub resource_path: String,
    /// Value of `%{date}`; today's date when `None`.
    pub date: Option<String>,
    /// Source of default box positions.
    pub layout: Layout,
}

impl ParserOptions {
    pub fn with_resource_path(mut self, resource_path: impl Into<String>) -> Self {
        self.resource_path = resource_path.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub(crate) fn date_string(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format(DATE_FORMAT).to_string())
    }
}

/// Settings that come before the first frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preamble {
    pub template_name: Option<String>,
    /// Line of the `\usetemplate` command.
    pub line: usize,
}

/// A successful compile.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub preamble: Preamble,
    pub frames: FrameList,
}

/// Either the compiled document or the first error, never both.
pub type CompileOutput = ParseResult<Compiled>;

/// Recursive-descent parser over the token stream.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
    options: ParserOptions,
    preamble: Preamble,
    frames: FrameList,
    variables: Variables,
    ids: BoxIds,
    pause_count: u32,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            options,
            preamble: Preamble::default(),
            frames: FrameList::new(),
            variables: Variables::new(),
            ids: BoxIds::default(),
            pause_count: 0,
        }
    }

    pub fn load_input(&mut self, input: &str) {
        self.tokenizer.load_input(input);
    }

    pub fn load_reader(&mut self, reader: impl Read) -> io::Result<()> {
        self.tokenizer.load_reader(reader)
    }

    /// Variables seen so far.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Seed variables before parsing, e.g. from a template.
    pub fn set_variables(&mut self, variables: Variables) {
        self.variables = variables;
    }

    /// Read `\usetemplate` and `\setvar` commands up to the first `\frame`.
    pub fn read_preamble(&mut self) -> ParseResult<Preamble> {
        loop {
            let next = self.tokenizer.peek_next();
            if next.is(TokenKind::EndOfFile) || (next.is(TokenKind::Command) && next.text == "\\frame") {
                break;
            }
            let token = self.tokenizer.next_token();
            if !token.is(TokenKind::Command) {
                return Err(ParserError::new(ParserErrorKind::MissingCommand, token.line));
            }
            match token.text.as_str() {
                "\\usetemplate" => {
                    let name = self.tokenizer.next_token();
                    if !name.is(TokenKind::Text) {
                        return Err(ParserError::new(ParserErrorKind::MissingTemplateName, token.line));
                    }
                    self.preamble.template_name = Some(name.text);
                    self.preamble.line = token.line;
                }
                "\\setvar" => self.set_variable(token.line)?,
                _ => return Err(ParserError::new(ParserErrorKind::MissingCommand, token.line)),
            }
        }
        Ok(self.preamble.clone())
    }

    /// Read all frames. Every frame gets `%{totalpages}` set to the frame count minus one.
    pub fn read_input(&mut self) -> ParseResult<FrameList> {
        loop {
            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::EndOfFile => break,
                TokenKind::Command => {
                    let command = Command::from_name(&token.text)
                        .ok_or_else(|| ParserError::new(ParserErrorKind::UnknownCommand, token.line))?;
                    self.command(command, token.line)?;
                }
                _ => return Err(ParserError::new(ParserErrorKind::MissingCommand, token.line)),
            }
        }

        let total_pages = self.frames.len().saturating_sub(1).to_string();
        for frame in &mut self.frames.frames {
            frame.set_variable(TOTAL_PAGES, total_pages.clone());
        }
        log::debug!("parsed {} frames", self.frames.len());
        Ok(std::mem::take(&mut self.frames))
    }

    /// Preamble, then body.
    pub fn compile(&mut self) -> CompileOutput {
        let preamble = self.read_preamble()?;
        let frames = self.read_input()?;
        Ok(Compiled { preamble, frames })
    }
}

/// Compile `input` in one go.
pub fn compile(input: &str, options: ParserOptions) -> CompileOutput {
    let mut parser = Parser::new(options);
    parser.load_input(input);
    parser.compile()
}
