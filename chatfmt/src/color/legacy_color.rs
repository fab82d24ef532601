// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16-entry legacy color palette.
//!
//! Each palette entry has a single code character (used after `&` or `§`)
//! and a canonical RGB value (used to downsample 24-bit colors when
//! serializing to the legacy format, which cannot express them).

use crate::{RgbValue, constants::ALT_CODE_CHAR};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Palette names double as markup tag names, eg `<red>` or `<dark_aqua>`.
/// `grey` spellings are accepted as aliases on input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    #[strum(serialize = "gray", serialize = "grey")]
    Gray,
    #[strum(serialize = "dark_gray", serialize = "dark_grey")]
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl LegacyColor {
    /// The single character used after the escape introducer.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            LegacyColor::Black => '0',
            LegacyColor::DarkBlue => '1',
            LegacyColor::DarkGreen => '2',
            LegacyColor::DarkAqua => '3',
            LegacyColor::DarkRed => '4',
            LegacyColor::DarkPurple => '5',
            LegacyColor::Gold => '6',
            LegacyColor::Gray => '7',
            LegacyColor::DarkGray => '8',
            LegacyColor::Blue => '9',
            LegacyColor::Green => 'a',
            LegacyColor::Aqua => 'b',
            LegacyColor::Red => 'c',
            LegacyColor::LightPurple => 'd',
            LegacyColor::Yellow => 'e',
            LegacyColor::White => 'f',
        }
    }

    /// Canonical RGB value of this palette entry.
    #[must_use]
    pub fn rgb(self) -> RgbValue {
        let (red, green, blue) = match self {
            LegacyColor::Black => (0, 0, 0),
            LegacyColor::DarkBlue => (0, 0, 170),
            LegacyColor::DarkGreen => (0, 170, 0),
            LegacyColor::DarkAqua => (0, 170, 170),
            LegacyColor::DarkRed => (170, 0, 0),
            LegacyColor::DarkPurple => (170, 0, 170),
            LegacyColor::Gold => (255, 170, 0),
            LegacyColor::Gray => (170, 170, 170),
            LegacyColor::DarkGray => (85, 85, 85),
            LegacyColor::Blue => (85, 85, 255),
            LegacyColor::Green => (85, 255, 85),
            LegacyColor::Aqua => (85, 255, 255),
            LegacyColor::Red => (255, 85, 85),
            LegacyColor::LightPurple => (255, 85, 255),
            LegacyColor::Yellow => (255, 255, 85),
            LegacyColor::White => (255, 255, 255),
        };
        RgbValue::from_u8(red, green, blue)
    }

    /// The palette entry closest to the given RGB value (squared euclidean
    /// distance; ties resolve to the earlier palette entry).
    #[must_use]
    pub fn nearest(rgb: RgbValue) -> LegacyColor {
        LegacyColor::iter()
            .min_by_key(|color| color.rgb().distance_squared(rgb))
            .unwrap_or(LegacyColor::White)
    }

    /// Append this color as a legacy `&` code.
    pub fn push_alt_code(self, acc: &mut String) {
        acc.push(ALT_CODE_CHAR);
        acc.push(self.code());
    }
}
