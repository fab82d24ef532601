// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The last two pipeline passes, both single left-to-right scans producing
//! a new output buffer: unmatched spans are copied verbatim, matched spans
//! substituted, and the tail appended once at the end.

use crate::constants::{ALT_CODE_CHAR, HEX_SEQUENCE_INTRO, HEX_TOKEN_CHAR,
                       HEX_TOKEN_DIGITS, LEGACY_CODE_CHARS, SECTION_CHAR};

/// Rewrite every `#` + exactly-6-hex-digit token into the native form
/// `§x§r§r§g§g§b§b` (digits lowercased). Matches are non-overlapping and
/// adjacent tokens do not break the scan.
#[must_use]
pub fn rewrite_hex_tokens(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(HEX_TOKEN_CHAR) {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);
        let bytes = tail.as_bytes();
        if bytes.len() > HEX_TOKEN_DIGITS
            && bytes[1..=HEX_TOKEN_DIGITS].iter().all(u8::is_ascii_hexdigit)
        {
            push_hex_sequence(&mut out, &tail[1..=HEX_TOKEN_DIGITS]);
            rest = &tail[HEX_TOKEN_DIGITS + 1..];
        } else {
            out.push(HEX_TOKEN_CHAR);
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

fn push_hex_sequence(out: &mut String, digits: &str) {
    out.push(SECTION_CHAR);
    out.push(HEX_SEQUENCE_INTRO);
    for digit in digits.chars() {
        out.push(SECTION_CHAR);
        out.push(digit.to_ascii_lowercase());
    }
}

/// Expand every remaining `&` + valid code character into `§` + the
/// lowercased code character. An `&` followed by anything else stays
/// literal, as does a trailing `&`.
#[must_use]
pub fn translate_alternate_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        let code = match chars.peek().copied() {
            Some(next) if ch == ALT_CODE_CHAR => {
                let lowered = next.to_ascii_lowercase();
                LEGACY_CODE_CHARS.contains(lowered).then_some(lowered)
            }
            _ => None,
        };
        match code {
            Some(lowered) => {
                out.push(SECTION_CHAR);
                out.push(lowered);
                chars.next();
            }
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_hex_rewrite() {
        assert_eq!(rewrite_hex_tokens("#1A2B3C"), "§x§1§a§2§b§3§c");
    }

    #[test]
    fn test_hex_rewrite_inside_text() {
        assert_eq!(rewrite_hex_tokens("a #ff0000b"), "a §x§f§f§0§0§0§0b");
    }

    #[test]
    fn test_adjacent_hex_tokens() {
        assert_eq!(
            rewrite_hex_tokens("#aabbcc#ddeeff"),
            "§x§a§a§b§b§c§c§x§d§d§e§e§f§f"
        );
    }

    #[test_case("#ff00"; "too short")]
    #[test_case("#ggff00"; "not hex digits")]
    #[test_case("no token at all"; "no hash")]
    #[test_case("trailing #"; "bare hash at end")]
    fn test_hex_rewrite_leaves_input_alone(input: &str) {
        assert_eq!(rewrite_hex_tokens(input), input);
    }

    #[test]
    fn test_seven_digits_consumes_six() {
        // The seventh digit is ordinary text.
        assert_eq!(rewrite_hex_tokens("#1234567"), "§x§1§2§3§4§5§67");
    }

    #[test]
    fn test_translate_basic_code() {
        assert_eq!(translate_alternate_codes("&cHello"), "§cHello");
    }

    #[test]
    fn test_translate_uppercase_code_is_lowercased() {
        assert_eq!(translate_alternate_codes("&CHello"), "§cHello");
    }

    #[test_case("&zHello", "&zHello"; "invalid code stays literal")]
    #[test_case("fish & chips", "fish & chips"; "lone ampersand")]
    #[test_case("trailing &", "trailing &"; "trailing ampersand")]
    #[test_case("&l&o&r&x", "§l§o§r§x"; "style and meta codes")]
    #[test_case("&0&9&a&f", "§0§9§a§f"; "digit and letter color codes")]
    fn test_translate_alternate_codes(input: &str, expected: &str) {
        assert_eq!(translate_alternate_codes(input), expected);
    }

    #[test]
    fn test_translate_handles_consecutive_codes() {
        assert_eq!(translate_alternate_codes("&c&lHi"), "§c§lHi");
    }
}
