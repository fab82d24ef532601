// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # chatfmt
//!
//! Convert marker-based chat text into a display-ready string carrying only
//! native `§` escape sequences and literal text. Three marker families are
//! understood, and may be mixed freely in one message:
//!
//! - Inline markup tags: `<red>`, `<#FF8800>`, `<bold>`, `</red>`,
//!   `<reset>` (MiniMessage-family grammar; unknown or malformed tags stay
//!   literal).
//! - Legacy two-character codes: `&c`, `&l`, `&r`.
//! - Raw hex tokens: `#RRGGBB`, rewritten to `§x§r§r§g§g§b§b`.
//!
//! HTML entities are decoded first, so `&amp;c` behaves exactly like `&c`.
//! Every operation is a pure, synchronous, total function of its inputs —
//! there are no error paths in the pipeline and no state across calls.
//!
//! ```
//! use chatfmt::{Placeholder, format, replace_placeholders};
//!
//! assert_eq!(format("&cHello"), "§cHello");
//! assert_eq!(format("<red>Hello</red> &lworld"), "§cHello§r §lworld");
//!
//! let out = replace_placeholders(
//!     "Hello {name}",
//!     &[Placeholder::new("{name}", "&eWorld")],
//! );
//! assert_eq!(out, "Hello §eWorld");
//! ```
//!
//! Sending is a thin layer on top: [`ChatFormatter`] binds the `{prefix}`
//! placeholder to an injected [`PrefixProvider`] and hands the formatted
//! result to a [`MessageSink`]. Dynamic per-recipient placeholders come
//! from an external [`PlaceholderSource`] collaborator via [`format_for`].

// Public modules.
pub mod collaborators;
pub mod color;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod legacy;
pub mod markup;
pub mod number_format;
pub mod placeholder;

// Re-export flat public API.
pub use collaborators::*;
pub use color::*;
pub use error::*;
pub use formatter::*;
pub use legacy::*;
pub use markup::*;
pub use number_format::*;
pub use placeholder::*;
