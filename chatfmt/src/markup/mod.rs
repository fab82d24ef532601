// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The inline markup grammar: `<red>`, `<#RRGGBB>`, `<bold>`, `</red>`,
//! `<reset>`, etc., parsed into a flat list of styled spans.
//!
//! Parsing is total: malformed or unknown tags degrade to literal text and
//! never produce an error.

// Private modules.
mod markup_engine;
mod markup_types;
mod parse_markup;

// Re-export flat public API.
pub use markup_engine::*;
pub use markup_types::*;
pub use parse_markup::*;
