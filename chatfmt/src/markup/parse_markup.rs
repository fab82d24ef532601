// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tag parser and style-stack evaluation.
//!
//! The grammar per tag is `<name>`, `<name:arg>`, or `</name>`. Whether a
//! tag is *recognized* is decided after the raw parse: a syntactically valid
//! tag whose name resolves to nothing is emitted as literal text, exactly
//! like a tag that never parsed at all.

use crate::{Decoration, LegacyColor, RgbValue, SpanColor, SpanStyle, StyledLine,
            StyledSpan,
            constants::{HEX_TOKEN_CHAR, TAG_ARG_SEPARATOR, TAG_CLOSE_CHAR,
                        TAG_CLOSING_SLASH, TAG_OPEN_CHAR}};
use nom::{IResult, Parser,
          bytes::complete::take_while1,
          character::complete::char,
          combinator::opt,
          sequence::preceded};
use std::str::FromStr;

/// A syntactically valid tag, before name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawTag<'a> {
    closing: bool,
    name: &'a str,
    arg: Option<&'a str>,
}

/// What a recognized tag does to the style stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagOp {
    Color(SpanColor),
    Decorate(Decoration),
    Reset,
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == HEX_TOKEN_CHAR
}

fn parse_raw_tag(input: &str) -> IResult<&str, RawTag<'_>> {
    let (rest, _) = char(TAG_OPEN_CHAR).parse(input)?;
    let (rest, closing) = opt(char(TAG_CLOSING_SLASH)).parse(rest)?;
    let (rest, name) = take_while1(is_tag_name_char).parse(rest)?;
    let (rest, arg) = opt(preceded(
        char(TAG_ARG_SEPARATOR),
        take_while1(|c: char| c != TAG_CLOSE_CHAR && c != TAG_OPEN_CHAR),
    ))
    .parse(rest)?;
    let (rest, _) = char(TAG_CLOSE_CHAR).parse(rest)?;
    Ok((
        rest,
        RawTag {
            closing: closing.is_some(),
            name,
            arg,
        },
    ))
}

/// A color token is either a palette name or a full `#RRGGBB` value.
fn resolve_color(token: &str) -> Option<SpanColor> {
    if token.starts_with(HEX_TOKEN_CHAR) {
        return RgbValue::try_from_hex_color(token)
            .ok()
            .map(SpanColor::Rgb);
    }
    LegacyColor::from_str(token).ok().map(SpanColor::Named)
}

/// `None` means the tag is not part of the grammar and stays literal.
fn resolve_tag(name: &str, arg: Option<&str>) -> Option<TagOp> {
    if name.eq_ignore_ascii_case("reset") || name.eq_ignore_ascii_case("r") {
        return match arg {
            None => Some(TagOp::Reset),
            Some(_) => None,
        };
    }
    if name.eq_ignore_ascii_case("color") || name.eq_ignore_ascii_case("colour") {
        return resolve_color(arg?).map(TagOp::Color);
    }
    // Only the color/colour tags take an argument.
    if arg.is_some() {
        return None;
    }
    if let Some(color) = resolve_color(name) {
        return Some(TagOp::Color(color));
    }
    Decoration::from_str(name).ok().map(TagOp::Decorate)
}

/// Derive the style of a new stack frame from the style beneath it.
fn apply_op(op: TagOp, base: &SpanStyle) -> SpanStyle {
    match op {
        TagOp::Color(color) => {
            let mut style = base.clone();
            style.color = Some(color);
            style
        }
        TagOp::Decorate(decoration) => {
            let mut style = base.clone();
            style.add_decoration(decoration);
            style
        }
        TagOp::Reset => SpanStyle::default(),
    }
}

/// Style stack: one frame per open tag, each holding its derived style.
#[derive(Debug, Default)]
struct StyleStack {
    frames: Vec<(TagOp, SpanStyle)>,
}

impl StyleStack {
    fn current(&self) -> SpanStyle {
        self.frames
            .last()
            .map(|(_, style)| style.clone())
            .unwrap_or_default()
    }

    fn push(&mut self, op: TagOp) {
        let style = apply_op(op, &self.current());
        self.frames.push((op, style));
    }

    /// Pop the innermost frame opened by `op`; silent no-op when there is
    /// none. Frames above the removed one are re-derived so a non-top close
    /// only removes its own contribution.
    fn pop(&mut self, op: TagOp) {
        let Some(pos) = self.frames.iter().rposition(|(frame_op, _)| *frame_op == op)
        else {
            return;
        };
        self.frames.remove(pos);
        for index in pos..self.frames.len() {
            let base = if index == 0 {
                SpanStyle::default()
            } else {
                self.frames[index - 1].1.clone()
            };
            self.frames[index].1 = apply_op(self.frames[index].0, &base);
        }
    }
}

/// Parse markup into styled spans. Total over all inputs: anything that is
/// not a recognized tag comes back out as literal text.
#[must_use]
pub fn parse_markup(input: &str) -> StyledLine {
    let mut line = StyledLine::new();
    let mut buffer = String::new();
    let mut stack = StyleStack::default();
    let mut rest = input;

    while !rest.is_empty() {
        let Some(pos) = rest.find(TAG_OPEN_CHAR) else {
            buffer.push_str(rest);
            break;
        };
        buffer.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let recognized = match parse_raw_tag(rest) {
            Ok((after, raw)) => resolve_tag(raw.name, raw.arg)
                .map(|op| (after, raw.closing, op)),
            Err(_) => None,
        };

        match recognized {
            Some((after, closing, op)) => {
                flush(&mut line, &mut buffer, &stack);
                match (closing, op) {
                    (_, TagOp::Reset) => stack.frames.clear(),
                    (false, op) => stack.push(op),
                    (true, op) => stack.pop(op),
                }
                rest = after;
            }
            None => {
                // Literal `<`; rescan from the next character.
                buffer.push(TAG_OPEN_CHAR);
                rest = &rest[1..];
            }
        }
    }

    flush(&mut line, &mut buffer, &stack);
    line
}

fn flush(line: &mut StyledLine, buffer: &mut String, stack: &StyleStack) {
    if buffer.is_empty() {
        return;
    }
    line.push(StyledSpan {
        text: std::mem::take(buffer),
        style: stack.current(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    fn plain(text: &str) -> StyledSpan {
        StyledSpan {
            text: text.to_string(),
            style: SpanStyle::default(),
        }
    }

    fn colored(text: &str, color: SpanColor) -> StyledSpan {
        StyledSpan {
            text: text.to_string(),
            style: SpanStyle {
                color: Some(color),
                decorations: smallvec![],
            },
        }
    }

    #[test]
    fn test_plain_text_is_one_span() {
        let line = parse_markup("hello world");
        assert_eq!(line.as_slice(), &[plain("hello world")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_named_color_tag() {
        let line = parse_markup("<red>hi</red>!");
        assert_eq!(
            line.as_slice(),
            &[
                colored("hi", SpanColor::Named(LegacyColor::Red)),
                plain("!"),
            ]
        );
    }

    #[test]
    fn test_hex_color_tag() {
        let line = parse_markup("<#FF0000>hi");
        assert_eq!(
            line.as_slice(),
            &[colored("hi", SpanColor::Rgb(RgbValue::from_u8(255, 0, 0)))]
        );
    }

    #[test]
    fn test_color_arg_forms() {
        let line = parse_markup("<color:red>a</color:red><colour:#00ff00>b");
        assert_eq!(
            line.as_slice(),
            &[
                colored("a", SpanColor::Named(LegacyColor::Red)),
                colored("b", SpanColor::Rgb(RgbValue::from_u8(0, 255, 0))),
            ]
        );
    }

    #[test]
    fn test_nested_decoration_inherits_color() {
        let line = parse_markup("<red><bold>hi</bold> there</red>");
        let mut red_bold = SpanStyle {
            color: Some(SpanColor::Named(LegacyColor::Red)),
            decorations: smallvec![],
        };
        red_bold.add_decoration(Decoration::Bold);
        assert_eq!(
            line.as_slice(),
            &[
                StyledSpan {
                    text: "hi".to_string(),
                    style: red_bold,
                },
                colored(" there", SpanColor::Named(LegacyColor::Red)),
            ]
        );
    }

    #[test]
    fn test_unknown_tag_stays_literal() {
        let line = parse_markup("a <rainbow>b</rainbow> c");
        assert_eq!(line.as_slice(), &[plain("a <rainbow>b</rainbow> c")]);
    }

    #[test]
    fn test_unterminated_tag_stays_literal() {
        let line = parse_markup("a <red b");
        assert_eq!(line.as_slice(), &[plain("a <red b")]);
    }

    #[test]
    fn test_bad_hex_stays_literal() {
        let line = parse_markup("<#ff00>x");
        assert_eq!(line.as_slice(), &[plain("<#ff00>x")]);
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let line = parse_markup("a</red>b");
        assert_eq!(line.as_slice(), &[plain("a"), plain("b")]);
    }

    #[test]
    fn test_reset_clears_the_stack() {
        let line = parse_markup("<red><bold>a<reset>b");
        assert_eq!(line.len(), 2);
        assert_eq!(line[1], plain("b"));
    }

    #[test]
    fn test_closing_a_non_top_tag_rederives_inner_frames() {
        // Closing <red> under an open <bold> drops the color but keeps bold.
        let line = parse_markup("<red><bold>a</red>b");
        let mut bold_only = SpanStyle::default();
        bold_only.add_decoration(Decoration::Bold);
        assert_eq!(line[1].text, "b");
        assert_eq!(line[1].style, bold_only);
    }

    #[test]
    fn test_argument_on_non_color_tag_is_literal() {
        let line = parse_markup("<bold:very>x");
        assert_eq!(line.as_slice(), &[plain("<bold:very>x")]);
    }

    #[test]
    fn test_ampersand_codes_pass_through_untouched() {
        let line = parse_markup("&cHello");
        assert_eq!(line.as_slice(), &[plain("&cHello")]);
    }
}
