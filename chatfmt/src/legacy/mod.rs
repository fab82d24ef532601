// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The legacy-format half of the pipeline: styled spans are flattened into
//! `&`-coded text, then hex tokens and `&` codes are rewritten into native
//! `§` escapes.

// Private modules.
mod serialize_legacy;
mod translate_codes;

// Re-export flat public API.
pub use serialize_legacy::*;
pub use translate_codes::*;
