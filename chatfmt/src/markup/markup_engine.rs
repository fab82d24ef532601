// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StyledLine, parse_markup, serialize_legacy};

/// The pluggable parse + serialize pair at the center of the format
/// pipeline. The built-in engine is [`MiniMarkup`]; callers with a
/// different markup grammar implement this and hand it to
/// [`crate::format_with`].
pub trait MarkupEngine {
    /// Markup text → styled spans. Must be total: malformed input degrades
    /// to literal text.
    fn parse(&self, input: &str) -> StyledLine;

    /// Styled spans → flat string with legacy `&` style markers.
    fn serialize_legacy(&self, line: &StyledLine) -> String;
}

/// The built-in engine implementing the crate's tag grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniMarkup;

impl MarkupEngine for MiniMarkup {
    fn parse(&self, input: &str) -> StyledLine { parse_markup(input) }

    fn serialize_legacy(&self, line: &StyledLine) -> String { serialize_legacy(line) }
}
