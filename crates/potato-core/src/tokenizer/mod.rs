//! Tokenizer for the presentation markup.
//!
//! The markup is line oriented: a command starts with a backslash, its
//! `key=value` arguments follow on the same line, and whatever text comes
//! after belongs to the command. Text that starts on a line of its own keeps
//! going until the next line that starts with a command.

mod lexer;

use lexer::{LineIndex, Lexeme, lex, unquote};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::ops::Range;

/// Kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Command,
    Argument,
    ArgumentValue,
    Text,
    MultiLineText,
    EndOfFile,
}

/// A token with the 0-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Text or multi-line text.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text | TokenKind::MultiLineText)
    }
}

/// Token stream with one token of lookahead.
///
/// Input is tokenized eagerly on load; once exhausted every call returns the
/// same end-of-file token.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    position: usize,
    end_of_file: Token,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            position: 0,
            end_of_file: Token::new(TokenKind::EndOfFile, "", 0),
        }
    }

    /// Replace the current input.
    pub fn load_input(&mut self, input: &str) {
        let lines = LineIndex::new(input);
        self.tokens = tokenize(input, &lines);
        self.position = 0;
        self.end_of_file = Token::new(TokenKind::EndOfFile, "", lines.line_of(input.len()));
        log::debug!("tokenized {} tokens", self.tokens.len());
    }

    /// Read UTF-8 input from a stream.
    pub fn load_reader(&mut self, mut reader: impl Read) -> io::Result<()> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.load_input(&input);
        Ok(())
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                token.clone()
            }
            None => self.end_of_file.clone(),
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek_next(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.end_of_file)
    }
}

type Lexemes = [(Lexeme, Range<usize>)];

fn tokenize(source: &str, lines: &LineIndex) -> Vec<Token> {
    let lexemes = lex(source);
    let mut tokens = Vec::new();
    // Line on which `key=value` pairs are still accepted.
    let mut argument_line: Option<usize> = None;
    // Line on which the previous token ended.
    let mut last_line: Option<usize> = None;
    let mut i = 0;

    while i < lexemes.len() {
        let (lexeme, span) = (lexemes[i].0, lexemes[i].1.clone());
        let line = lines.line_of(span.start);
        match lexeme {
            Lexeme::Newline => {
                i += 1;
                continue;
            }
            Lexeme::Command => {
                tokens.push(Token::new(TokenKind::Command, &source[span.clone()], line));
                argument_line = Some(line);
                last_line = Some(line);
                i += 1;
            }
            Lexeme::Argument if argument_line == Some(line) => {
                let name = &source[span.start..span.end - 1];
                tokens.push(Token::new(TokenKind::Argument, name, line));
                let (value, value_end, next) = argument_value(source, &lexemes, i + 1, span.end);
                tokens.push(Token::new(TokenKind::ArgumentValue, value, line));
                argument_line = Some(lines.line_of(value_end));
                last_line = argument_line;
                i = next;
            }
            Lexeme::Quoted => {
                let text = unquote(&source[span.clone()]);
                tokens.push(text_token(text, line));
                argument_line = None;
                last_line = Some(lines.line_of(span.end));
                i += 1;
            }
            _ if last_line == Some(line) => {
                let (end, next) = rest_of_line(&lexemes, i, lines);
                tokens.push(text_token(source[span.start..end].trim_end().replace("\r\n", "\n"), line));
                argument_line = None;
                last_line = Some(lines.line_of(end));
                i = next;
            }
            _ => {
                let (end, next) = text_block(&lexemes, i, lines);
                tokens.push(text_token(source[span.start..end].replace("\r\n", "\n"), line));
                argument_line = None;
                last_line = Some(lines.line_of(end));
                i = next;
            }
        }
    }
    tokens
}

fn text_token(text: String, line: usize) -> Token {
    let kind = if text.contains('\n') {
        TokenKind::MultiLineText
    } else {
        TokenKind::Text
    };
    Token::new(kind, text, line)
}

/// Value directly after `key=`: a quoted string or a run of non-blank
/// characters. Returns the value, its end offset and the next lexeme index.
fn argument_value(source: &str, lexemes: &Lexemes, mut i: usize, start: usize) -> (String, usize, usize) {
    match lexemes.get(i) {
        Some((Lexeme::Quoted, span)) if span.start == start => {
            (unquote(&source[span.clone()]), span.end, i + 1)
        }
        _ => {
            let mut end = start;
            while let Some((lexeme, span)) = lexemes.get(i) {
                if span.start != end || *lexeme == Lexeme::Newline {
                    break;
                }
                end = span.end;
                i += 1;
            }
            (source[start..end].to_string(), end, i)
        }
    }
}

/// End offset of the current line's content and the index of the first
/// lexeme after it. A quoted string may carry the text onto later lines; a
/// command found there ends the text.
fn rest_of_line(lexemes: &Lexemes, i: usize, lines: &LineIndex) -> (usize, usize) {
    let first_line = lines.line_of(lexemes[i].1.start);
    let mut end = lexemes[i].1.end;
    let mut j = i;
    while let Some((lexeme, span)) = lexemes.get(j) {
        let stop = match lexeme {
            Lexeme::Newline => true,
            Lexeme::Command => lines.line_of(span.start) != first_line,
            _ => false,
        };
        if stop {
            break;
        }
        end = span.end;
        j += 1;
    }
    (end, j)
}

/// Text starting on a fresh line runs until a line that opens with a command.
fn text_block(lexemes: &Lexemes, i: usize, lines: &LineIndex) -> (usize, usize) {
    let mut end = lexemes[i].1.end;
    let mut previous_line = lines.line_of(lexemes[i].1.start);
    let mut j = i;
    while let Some((lexeme, span)) = lexemes.get(j) {
        if *lexeme == Lexeme::Newline {
            j += 1;
            continue;
        }
        let line = lines.line_of(span.start);
        if line != previous_line && *lexeme == Lexeme::Command {
            break;
        }
        end = span.end;
        previous_line = lines.line_of(span.end);
        j += 1;
    }
    (end, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new();
        tokenizer.load_input(input);
        let mut out = Vec::new();
        loop {
            let token = tokenizer.next_token();
            if token.is(TokenKind::EndOfFile) {
                break;
            }
            out.push(token);
        }
        out
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokens(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_command_with_text_on_same_line() {
        let tokens = tokens("\\frame intro\n\\title Hello World  \n");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], Token::new(TokenKind::Command, "\\frame", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Text, "intro", 0));
        assert_eq!(tokens[2], Token::new(TokenKind::Command, "\\title", 1));
        assert_eq!(tokens[3], Token::new(TokenKind::Text, "Hello World", 1));
    }

    #[test]
    fn test_arguments_and_values() {
        let tokens = tokens("\\text id=a color=\"dark red\" left=10 Some text");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Command,
                TokenKind::Argument,
                TokenKind::ArgumentValue,
                TokenKind::Argument,
                TokenKind::ArgumentValue,
                TokenKind::Argument,
                TokenKind::ArgumentValue,
                TokenKind::Text,
            ]
        );
        assert_eq!(tokens[1].text, "id");
        assert_eq!(tokens[2].text, "a");
        assert_eq!(tokens[4].text, "dark red");
        assert_eq!(tokens[6].text, "10");
        assert_eq!(tokens[7].text, "Some text");
    }

    #[test]
    fn test_empty_argument_value() {
        let tokens = tokens("\\text id= hello");
        assert_eq!(tokens[2], Token::new(TokenKind::ArgumentValue, "", 0));
        assert_eq!(tokens[3], Token::new(TokenKind::Text, "hello", 0));
    }

    #[test]
    fn test_multiline_text_until_next_command() {
        let tokens = tokens("\\text\nfirst line\n  second line\n\n\\pause\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::MultiLineText);
        assert_eq!(tokens[1].text, "first line\n  second line");
        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[2], Token::new(TokenKind::Command, "\\pause", 4));
    }

    #[test]
    fn test_single_line_block_is_text() {
        assert_eq!(
            kinds("\\text\njust one line\n\\text"),
            vec![TokenKind::Command, TokenKind::Text, TokenKind::Command]
        );
    }

    #[test]
    fn test_argument_like_prose_on_new_line() {
        let tokens = tokens("\\text\nx=5 is a formula");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Token::new(TokenKind::Text, "x=5 is a formula", 1));
    }

    #[test]
    fn test_quoted_multiline() {
        let tokens = tokens("\\text \"a\nb\"");
        assert_eq!(tokens[1], Token::new(TokenKind::MultiLineText, "a\nb", 0));
    }

    #[test]
    fn test_quote_spanning_lines_inside_text() {
        let tokens = tokens("\\text a \"q\nr\" \\pause");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::MultiLineText, "a \"q\nr\"", 0));
        assert_eq!(tokens[2], Token::new(TokenKind::Command, "\\pause", 1));
    }

    #[test]
    fn test_unclosed_quote_is_literal_text() {
        let tokens = tokens("\\text \"oops\n\\text b\n");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Command, "\\text", 0),
                Token::new(TokenKind::Text, "\"oops", 0),
                Token::new(TokenKind::Command, "\\text", 1),
                Token::new(TokenKind::Text, "b", 1),
            ]
        );
    }

    #[test]
    fn test_text_after_quoted_value_on_same_line() {
        let tokens = tokens("\\image \"my image.png\" trailing");
        assert_eq!(tokens[1], Token::new(TokenKind::Text, "my image.png", 0));
        assert_eq!(tokens[2], Token::new(TokenKind::Text, "trailing", 0));
    }

    #[test]
    fn test_leading_text_without_command() {
        assert_eq!(kinds("hello\n\\frame a"), vec![TokenKind::Text, TokenKind::Command, TokenKind::Text]);
    }

    #[test]
    fn test_peek_does_not_consume_and_eof_repeats() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.load_input("\\pause\n\n");
        assert_eq!(tokenizer.peek_next().kind, TokenKind::Command);
        assert_eq!(tokenizer.next_token().kind, TokenKind::Command);
        let eof = tokenizer.next_token();
        assert_eq!(eof.kind, TokenKind::EndOfFile);
        assert_eq!(eof.line, 2);
        assert_eq!(tokenizer.next_token(), eof);
        assert_eq!(tokenizer.peek_next(), &eof);
    }

    #[test]
    fn test_load_reader() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.load_reader("\\frame x".as_bytes()).unwrap();
        assert_eq!(tokenizer.next_token().text, "\\frame");
        assert_eq!(tokenizer.next_token().text, "x");
    }
}
