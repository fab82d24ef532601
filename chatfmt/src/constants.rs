// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Characters and tokens shared by the markup parser, the legacy serializer,
//! and the code translation passes.

/// Native escape introducer understood by the chat display layer.
pub const SECTION_CHAR: char = '§';

/// Author-facing escape introducer for legacy two-character codes.
pub const ALT_CODE_CHAR: char = '&';

/// First character of a raw hex color token (`#RRGGBB`).
pub const HEX_TOKEN_CHAR: char = '#';

/// Number of hex digits in a hex color token.
pub const HEX_TOKEN_DIGITS: usize = 6;

/// Code character that introduces a native hex color sequence (`§x§r§r§g§g§b§b`).
pub const HEX_SEQUENCE_INTRO: char = 'x';

/// Code character that clears all color and decoration state.
pub const RESET_CODE: char = 'r';

/// Every code character valid after [`ALT_CODE_CHAR`], lowercase form.
pub const LEGACY_CODE_CHARS: &str = "0123456789abcdefklmnorx";

pub const TAG_OPEN_CHAR: char = '<';
pub const TAG_CLOSE_CHAR: char = '>';
pub const TAG_CLOSING_SLASH: char = '/';
pub const TAG_ARG_SEPARATOR: char = ':';

/// Key of the synthetic placeholder bound to the prefix provider's value by
/// [`crate::ChatFormatter::send_message`].
pub const PREFIX_PLACEHOLDER_KEY: &str = "{prefix}";
