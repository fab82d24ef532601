// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Styled spans → flat `&`-coded string.
//!
//! The legacy format has no way to switch a single decoration off: setting
//! a color resets all decorations, and `&r` resets everything. The
//! transition logic below leans on that — whenever a span loses state
//! relative to the one before it, the color (or reset) code is re-emitted
//! and the decorations are replayed.

use crate::{LegacyColor, SpanColor, SpanStyle, StyledLine,
            constants::{ALT_CODE_CHAR, RESET_CODE}};

/// Flatten spans into legacy `&`-coded text. RGB colors are downsampled to
/// the nearest palette entry, since the legacy format cannot express them.
#[must_use]
pub fn serialize_legacy(line: &StyledLine) -> String {
    let mut out = String::new();
    let mut prev = SpanStyle::default();
    for span in line {
        if span.text.is_empty() {
            continue;
        }
        emit_transition(&mut out, &prev, &span.style);
        out.push_str(&span.text);
        prev = span.style.clone();
    }
    out
}

fn emit_transition(out: &mut String, prev: &SpanStyle, next: &SpanStyle) {
    if next == prev {
        return;
    }

    if next.is_plain() {
        push_code(out, RESET_CODE);
        return;
    }

    let color_changed = next.color != prev.color;
    let lost_decoration = prev
        .decorations
        .iter()
        .any(|decoration| !next.has_decoration(*decoration));

    if color_changed || lost_decoration {
        // Full replay: color code (or reset) wipes the decoration state.
        match next.color {
            Some(color) => push_color(out, color),
            None => push_code(out, RESET_CODE),
        }
        for decoration in &next.decorations {
            push_code(out, decoration.code());
        }
    } else {
        // Same color, decorations only grew: emit just the additions.
        for decoration in next
            .decorations
            .iter()
            .filter(|decoration| !prev.has_decoration(**decoration))
        {
            push_code(out, decoration.code());
        }
    }
}

fn push_color(out: &mut String, color: SpanColor) {
    let named = match color {
        SpanColor::Named(named) => named,
        SpanColor::Rgb(rgb) => LegacyColor::nearest(rgb),
    };
    named.push_alt_code(out);
}

fn push_code(out: &mut String, code: char) {
    out.push(ALT_CODE_CHAR);
    out.push(code);
}
