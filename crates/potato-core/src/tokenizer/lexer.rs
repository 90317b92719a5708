//! Raw lexemes produced by logos.
//!
//! Lexemes know nothing about context. The [`Tokenizer`](super::Tokenizer)
//! decides whether a run of lexemes is an argument, a value or prose.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum Lexeme {
    /// `\frame`, `\text`, ...
    #[regex(r"\\[A-Za-z][A-Za-z0-9_-]*")]
    Command,

    /// `key=`, the `=` included.
    #[regex(r"[A-Za-z][A-Za-z0-9_-]*=")]
    Argument,

    #[regex(r#""([^"\\]|\\.|\\\n)*""#)]
    Quoted,

    /// An opening quote that is never closed.
    #[token("\"")]
    StrayQuote,

    #[token("=")]
    Equals,

    /// A backslash not followed by a command name.
    #[token("\\")]
    Backslash,

    #[token("\n")]
    Newline,

    #[regex(r#"[^ \t\r\n\f"=\\][^ \t\r\n\f"=]*"#)]
    Word,
}

/// Lex the whole input. Unrecognised bytes are kept as words so no input is lost.
///
/// A quote that is never closed fails the `Quoted` pattern over the whole
/// remaining input; it becomes a one-byte `StrayQuote` and lexing resumes
/// right after it.
pub(crate) fn lex(source: &str) -> Vec<(Lexeme, Range<usize>)> {
    let mut lexemes = Vec::new();
    let mut offset = 0;
    'restart: loop {
        let mut lexer = Lexeme::lexer(&source[offset..]);
        while let Some(result) = lexer.next() {
            let span = offset + lexer.span().start..offset + lexer.span().end;
            match result {
                Ok(lexeme) => lexemes.push((lexeme, span)),
                Err(_) if source[span.clone()].starts_with('"') => {
                    lexemes.push((Lexeme::StrayQuote, span.start..span.start + 1));
                    offset = span.start + 1;
                    continue 'restart;
                }
                Err(_) => lexemes.push((Lexeme::Word, span)),
            }
        }
        return lexemes;
    }
}

/// Strip the surrounding quotes and resolve `\"` and `\\`.
pub(crate) fn unquote(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(quoted);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped @ ('"' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Maps byte offsets to 0-based line numbers.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    pub(crate) fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Lexeme> {
        lex(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_command_and_argument() {
        assert_eq!(
            kinds(r"\text id=foo hello"),
            vec![Lexeme::Command, Lexeme::Argument, Lexeme::Word, Lexeme::Word]
        );
    }

    #[test]
    fn test_quoted_and_stray_quote() {
        assert_eq!(kinds(r#""a b" c"#), vec![Lexeme::Quoted, Lexeme::Word]);
        assert_eq!(kinds(r#""open"#), vec![Lexeme::StrayQuote, Lexeme::Word]);
    }

    #[test]
    fn test_unclosed_quote_keeps_later_commands() {
        let lexemes = lex("\\text \"oops\n\\text b\n\\frame c\n");
        let kinds: Vec<_> = lexemes.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                Lexeme::Command,
                Lexeme::StrayQuote,
                Lexeme::Word,
                Lexeme::Newline,
                Lexeme::Command,
                Lexeme::Word,
                Lexeme::Newline,
                Lexeme::Command,
                Lexeme::Word,
                Lexeme::Newline,
            ]
        );
        assert_eq!(lexemes[1].1, 6..7);
        assert_eq!(lexemes[2].1, 7..11);
    }

    #[test]
    fn test_lone_backslash_and_equals() {
        assert_eq!(
            kinds(r"a \ = b"),
            vec![Lexeme::Word, Lexeme::Backslash, Lexeme::Equals, Lexeme::Word]
        );
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""say \"hi\" \\ \n""#), r#"say "hi" \ \n"#);
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(2), 0);
        assert_eq!(index.line_of(3), 1);
        assert_eq!(index.line_of(6), 2);
        assert_eq!(index.line_of(7), 3);
    }
}
