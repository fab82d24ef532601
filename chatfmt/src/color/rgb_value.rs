// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit) color representation.

use crate::{ChatFmtError, ChatFmtResult,
            constants::{HEX_SEQUENCE_INTRO, SECTION_CHAR},
            parse_hex_color};

/// Represents a color in RGB (24-bit) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a `#RRGGBB` string. The whole input must be consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ChatFmtError::InvalidHexColor`] if the input is not exactly
    /// `#` followed by 6 hex digits.
    pub fn try_from_hex_color(input: &str) -> ChatFmtResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(ChatFmtError::InvalidHexColor(input.to_string())),
        }
    }

    /// Append the native escape sequence for this color, ie
    /// `§x§r§r§g§g§b§b` with lowercase hex digits.
    pub fn push_section_sequence(self, acc: &mut String) {
        acc.push(SECTION_CHAR);
        acc.push(HEX_SEQUENCE_INTRO);
        let digits = format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        for digit in digits.chars() {
            acc.push(SECTION_CHAR);
            acc.push(digit);
        }
    }

    /// Squared euclidean distance in RGB space, used for palette
    /// downsampling.
    #[must_use]
    pub fn distance_squared(self, other: RgbValue) -> i32 {
        let dr = i32::from(self.red) - i32::from(other.red);
        let dg = i32::from(self.green) - i32::from(other.green);
        let db = i32::from(self.blue) - i32::from(other.blue);
        dr * dr + dg * dg + db * db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq!((value.red, value.green, value.blue), (255, 0, 0));
        }

        // Too short.
        {
            let value = RgbValue::try_from_hex_color("#ff000");
            assert!(value.is_err());
        }

        // Trailing garbage is rejected here (unlike the raw nom parser).
        {
            let value = RgbValue::try_from_hex_color("#ff0000zz");
            assert_eq!(
                value,
                Err(ChatFmtError::InvalidHexColor("#ff0000zz".to_string()))
            );
        }
    }

    #[test]
    fn test_push_section_sequence() {
        let mut acc = String::new();
        RgbValue::from_u8(0x1A, 0x2B, 0x3C).push_section_sequence(&mut acc);
        assert_eq!(acc, "§x§1§a§2§b§3§c");
    }

    #[test]
    fn test_distance_squared() {
        let black = RgbValue::from_u8(0, 0, 0);
        let white = RgbValue::from_u8(255, 255, 255);
        assert_eq!(black.distance_squared(black), 0);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    }
}
