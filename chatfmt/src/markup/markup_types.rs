// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Intermediate representation produced by the markup parser: an ordered
//! list of text runs, each carrying the style that was in effect when the
//! run was read.

use crate::{LegacyColor, RgbValue};
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter, EnumString};

/// A color as written in markup: either a palette name or a 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanColor {
    Named(LegacyColor),
    Rgb(RgbValue),
}

/// Text decorations. Tag aliases follow the short forms the markup grammar
/// accepts, eg `<b>` for `<bold>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Decoration {
    #[strum(serialize = "obfuscated", serialize = "obf")]
    Obfuscated,
    #[strum(serialize = "bold", serialize = "b")]
    Bold,
    #[strum(serialize = "strikethrough", serialize = "st")]
    Strikethrough,
    #[strum(serialize = "underlined", serialize = "u")]
    Underlined,
    #[strum(serialize = "italic", serialize = "i", serialize = "em")]
    Italic,
}

impl Decoration {
    /// The single character used after the escape introducer.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Decoration::Obfuscated => 'k',
            Decoration::Bold => 'l',
            Decoration::Strikethrough => 'm',
            Decoration::Underlined => 'n',
            Decoration::Italic => 'o',
        }
    }
}

pub(crate) mod sizing {
    use super::{Decoration, SmallVec, StyledSpan};

    /// One slot per [`Decoration`] variant.
    pub const MAX_DECORATIONS: usize = 5;
    /// Spans beyond this spill to the heap.
    pub const MAX_SPANS_INLINE: usize = 8;

    pub type InlineVecDecorations = SmallVec<[Decoration; MAX_DECORATIONS]>;
    pub type InlineVecSpans = SmallVec<[StyledSpan; MAX_SPANS_INLINE]>;
}

pub type DecorationSet = sizing::InlineVecDecorations;

/// Effective style of a text run. Insertion order of decorations is
/// preserved, and [`SpanStyle::add_decoration`] keeps the set free of
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub color: Option<SpanColor>,
    pub decorations: DecorationSet,
}

impl SpanStyle {
    /// No color and no decorations.
    #[must_use]
    pub fn is_plain(&self) -> bool { self.color.is_none() && self.decorations.is_empty() }

    #[must_use]
    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.decorations.contains(&decoration)
    }

    pub fn add_decoration(&mut self, decoration: Decoration) {
        if !self.has_decoration(decoration) {
            self.decorations.push(decoration);
        }
    }
}

/// A run of text plus the style in effect while it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

/// What the markup parser produces and the legacy serializer consumes.
pub type StyledLine = sizing::InlineVecSpans;
