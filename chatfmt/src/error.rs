// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use thiserror::Error;

/// The format pipeline itself is total and never returns these; only the
/// fallible color constructors do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatFmtError {
    /// The input was not `#` followed by exactly 6 hex digits.
    #[error("invalid hex color format: {0:?}")]
    InvalidHexColor(String),
}

pub type ChatFmtResult<T> = Result<T, ChatFmtError>;
