// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display formatting for numbers shown in chat: thousands grouping of 3,
//! at most 2 fraction digits (trailing zeros dropped), minimum 1 integer
//! digit.

/// Format a number for chat display, eg `1234567.891` → `"1,234,567.89"`.
///
/// Values are rounded half-up at the second fraction digit. A result that
/// rounds to zero never carries a sign.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Work in hundredths so the fraction never re-enters float math.
    let cents = (value.abs() * 100.0).round() as u128;
    let integer = cents / 100;
    let fraction = (cents % 100) as u32;

    let mut out = String::new();
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    push_grouped(&mut out, &integer.to_string());

    if fraction > 0 {
        out.push('.');
        if fraction % 10 == 0 {
            out.push_str(&(fraction / 10).to_string());
        } else {
            out.push_str(&format!("{fraction:02}"));
        }
    }
    out
}

/// Insert a `,` before every group of 3 digits, counted from the right.
fn push_grouped(out: &mut String, digits: &str) {
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0.0, "0")]
    #[test_case(7.0, "7")]
    #[test_case(1000.0, "1,000")]
    #[test_case(1234567.891, "1,234,567.89")]
    #[test_case(12.5, "12.5")]
    #[test_case(12.50, "12.5")]
    #[test_case(0.25, "0.25")]
    #[test_case(0.004, "0")]
    #[test_case(-5.25, "-5.25")]
    #[test_case(-0.001, "0"; "negative rounding to zero drops the sign")]
    #[test_case(999999.999, "1,000,000"; "rounding carries into a new group")]
    fn test_format_number(value: f64, expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
