//! `key=value` style arguments after a box command.

use super::Parser;
use crate::error::{ParseResult, ParserError, ParserErrorKind};
use crate::geometry::BoxGeometry;
use crate::style::{BoxStyle, FontWeight, SerializableColor, TextAlignment};
use crate::tokenizer::TokenKind;
use std::str::FromStr;

/// Style read from the arguments, plus the explicit id if one was given.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arguments {
    pub style: BoxStyle,
    pub id: Option<String>,
}

/// Parse a number, falling back to zero like the markup always has.
fn number<T: FromStr + Default>(key: &str, value: &str, line: usize) -> T {
    value.trim().parse().unwrap_or_else(|_| {
        log::warn!("line {}: {key}={value:?} is not a number, using 0", line + 1);
        T::default()
    })
}

impl Parser {
    /// Consume arguments while the next token is one, starting from a default
    /// style positioned at `geometry`. Unknown keys are ignored.
    pub(super) fn read_arguments(&mut self, geometry: BoxGeometry) -> ParseResult<Arguments> {
        let mut style = BoxStyle::with_geometry(geometry);
        let mut id = None;

        while self.tokenizer.peek_next().is(TokenKind::Argument) {
            let argument = self.tokenizer.next_token();
            let value = self.tokenizer.next_token();
            if !value.is(TokenKind::ArgumentValue) && !value.text.is_empty() {
                return Err(ParserError::new(ParserErrorKind::MissingArgumentValue, argument.line));
            }
            let key = argument.text.as_str();
            let text = value.text.as_str();
            let line = value.line;

            match key {
                "color" => match SerializableColor::parse(text) {
                    Some(color) => style.color = color,
                    None => log::warn!("line {}: unknown color {text:?}", line + 1),
                },
                "opacity" => style.opacity = number(key, text, line),
                "font-size" => style.font_size = number(key, text, line),
                "line-height" => {
                    let spacing: f64 = number(key, text, line);
                    if spacing != 0.0 {
                        style.line_spacing = spacing;
                    }
                }
                "font-weight" => {
                    style.font_weight = FontWeight::from_name(text)
                        .ok_or_else(|| ParserError::new(ParserErrorKind::InvalidFontWeight, line))?;
                }
                "font" => style.font = text.to_string(),
                "id" => {
                    if !self.ids.register(text) {
                        return Err(ParserError::new(ParserErrorKind::DuplicateBoxId, line));
                    }
                    id = Some(text.to_string());
                }
                "left" => style.geometry.left = number::<i64>(key, text, line) as f64,
                "top" => style.geometry.top = number::<i64>(key, text, line) as f64,
                "width" => style.geometry.width = number::<i64>(key, text, line) as f64,
                "height" => style.geometry.height = number::<i64>(key, text, line) as f64,
                "angle" => style.geometry.angle = number(key, text, line),
                "text-align" => {
                    style.alignment = TextAlignment::from_name(text)
                        .ok_or_else(|| ParserError::new(ParserErrorKind::InvalidTextAlign, line))?;
                }
                "class" => style.class = text.to_string(),
                "language" => style.language = text.to_string(),
                other => log::debug!("line {}: ignoring unknown argument {other:?}", line + 1),
            }
        }

        Ok(Arguments { style, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserOptions;

    fn arguments(input: &str) -> ParseResult<Arguments> {
        let mut parser = Parser::new(ParserOptions::default());
        parser.load_input(input);
        parser.tokenizer.next_token();
        parser.read_arguments(BoxGeometry::new(1.0, 2.0, 3.0, 4.0))
    }

    #[test]
    fn test_style_keys() {
        let args = arguments(
            "\\text color=red opacity=0.5 font-size=32 line-height=1.5 font-weight=bold font=Serif \
             left=10 top=20 width=300 height=40 angle=12.5 text-align=center class=note id=box1",
        )
        .unwrap();
        let style = args.style;
        assert_eq!(args.id.as_deref(), Some("box1"));
        assert_eq!(style.color, SerializableColor::new(255, 0, 0, 255));
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.font_size, 32);
        assert_eq!(style.line_spacing, 1.5);
        assert_eq!(style.font_weight, FontWeight::Bold);
        assert_eq!(style.font, "Serif");
        assert_eq!(style.geometry, BoxGeometry::new(10.0, 20.0, 300.0, 40.0).with_angle(12.5));
        assert_eq!(style.alignment, TextAlignment::Center);
        assert_eq!(style.class, "note");
    }

    #[test]
    fn test_defaults_and_tolerated_values() {
        let args = arguments("\\text line-height=0 font-size=big unknown=1 left=5").unwrap();
        assert_eq!(args.id, None);
        assert_eq!(args.style.line_spacing, 1.0);
        assert_eq!(args.style.font_size, 0);
        assert_eq!(args.style.geometry, BoxGeometry::new(5.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_invalid_enumerations() {
        let err = arguments("\\text font-weight=heavy").unwrap_err();
        assert_eq!(err.kind, ParserErrorKind::InvalidFontWeight);
        let err = arguments("\\text\ttext-align=middle").unwrap_err();
        assert_eq!(err.kind, ParserErrorKind::InvalidTextAlign);
        assert_eq!(err.line, 0);
    }
}
