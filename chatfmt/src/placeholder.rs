// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Literal key/value substitution pairs.

/// An immutable key/value pair for literal substring replacement. The key
/// is the marker text itself (by convention wrapped in braces, eg
/// `{player}`), but no format is enforced or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub key: String,
    pub value: String,
}

impl Placeholder {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Apply each placeholder in sequence order: later placeholders operate on
/// the output of earlier ones, so overlapping keys and values containing
/// other keys resolve left to right, never simultaneously.
#[must_use]
pub fn apply_placeholders(text: &str, placeholders: &[Placeholder]) -> String {
    let mut acc = text.to_string();
    for placeholder in placeholders {
        acc = acc.replace(&placeholder.key, &placeholder.value);
    }
    acc
}
