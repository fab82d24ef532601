// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types: the 16-entry legacy palette and 24-bit RGB, plus the hex
//! color parser used by both the markup grammar and the public constructors.

// Private modules.
mod hex_color_parser;
mod legacy_color;
mod rgb_value;

// Re-export flat public API.
pub use hex_color_parser::*;
pub use legacy_color::*;
pub use rgb_value::*;
