//! Parser error taxonomy.

use thiserror::Error;

/// What went wrong while compiling a document.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserErrorKind {
    /// A token other than a command appeared where a command was expected.
    #[error("missing command")]
    MissingCommand,
    #[error("command does not exist")]
    UnknownCommand,
    #[error("Missing Template name")]
    MissingTemplateName,
    /// A box command appeared before the first `\frame`.
    #[error("missing frame: type \\frame id")]
    MissingFrame,
    #[error("missing frame id")]
    MissingFrameId,
    #[error("frame id already exist")]
    DuplicateFrameId,
    #[error("Only the Argument \"class\" is allowed after frame Command")]
    InvalidFrameArgument,
    #[error("Argument value is missing")]
    MissingArgumentValue,
    #[error("font-weight can only be bold or normal")]
    InvalidFontWeight,
    #[error("possible alignment: left, right, center, justify")]
    InvalidTextAlign,
    #[error("Id already exists")]
    DuplicateBoxId,
    /// `\arrow` or `\line` followed by text.
    #[error("\\{command} command need no text")]
    UnexpectedText { command: &'static str },
    #[error("Missing Variable declaration")]
    MissingVariable,
}

/// A compile failure at a 0-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub line: usize,
}

impl ParserError {
    pub fn new(kind: ParserErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// 1-based line number for display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParserError::new(ParserErrorKind::DuplicateFrameId, 3);
        assert_eq!(err.message(), "frame id already exist");
        assert_eq!(err.display_line(), 4);

        let err = ParserError::new(ParserErrorKind::UnexpectedText { command: "arrow" }, 0);
        assert_eq!(err.to_string(), "\\arrow command need no text");
    }
}
