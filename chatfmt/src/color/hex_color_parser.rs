// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a
//! [`RgbValue`] struct. The hex color string has the format `#RRGGBB`, eg:
//! `#FF0000` for red.

use crate::RgbValue;
use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

/// Parse function that generates an [`RgbValue`] struct from a valid hex
/// color string. Trailing input is returned as the remainder, not rejected.
///
/// # Errors
///
/// Returns a nom parse error if the input does not start with `#` followed
/// by 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// This function is used by [`take_while_m_n`] and as long as it returns
/// `true` items will be taken from the input.
fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

/// This function is used by [`map_res`] and it returns a [`Result`], not
/// [`IResult`].
fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, match_is_hex_digit),
        parse_str_to_hex_num,
    )
    .parse(input)
}
