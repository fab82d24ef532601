// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pipeline orchestration.
//!
//! Every entry point runs the same straight line per input string:
//!
//! ```text
//! html-entity decode → (dynamic placeholders) → markup parse
//!     → legacy serialize → hex token rewrite → legacy code expand
//! ```
//!
//! Each step fully completes before the next begins; nothing here is
//! fallible, and no state survives a call.

use crate::{MarkupEngine, MessageSink, MiniMarkup, Placeholder, PlaceholderSource,
            PrefixProvider, apply_placeholders, constants::PREFIX_PLACEHOLDER_KEY,
            rewrite_hex_tokens, translate_alternate_codes};

/// Run the full pipeline on one message with the built-in markup engine.
#[must_use]
pub fn format(message: &str) -> String { format_with(&MiniMarkup, message) }

/// Same as [`format`], with a caller-supplied markup engine.
#[must_use]
pub fn format_with(engine: &impl MarkupEngine, message: &str) -> String {
    let decoded = html_escape::decode_html_entities(message);
    run_pipeline(engine, &decoded)
}

/// Same as [`format`], but dynamic placeholders for `identity` are expanded
/// right after entity decoding, before any markup is parsed. Placeholder
/// values may therefore contain markup and will be formatted.
#[must_use]
pub fn format_for<S: PlaceholderSource>(
    source: &S,
    identity: &S::Identity,
    message: &str,
) -> String {
    let decoded = html_escape::decode_html_entities(message);
    let expanded = source.apply_placeholders(identity, &decoded);
    run_pipeline(&MiniMarkup, &expanded)
}

/// Element-wise [`format`]; order and length preserving.
#[must_use]
pub fn format_list<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages.iter().map(|message| format(message.as_ref())).collect()
}

/// Element-wise [`format_for`]; order and length preserving.
#[must_use]
pub fn format_list_for<S: PlaceholderSource, M: AsRef<str>>(
    source: &S,
    identity: &S::Identity,
    messages: &[M],
) -> Vec<String> {
    messages
        .iter()
        .map(|message| format_for(source, identity, message.as_ref()))
        .collect()
}

/// Apply the placeholders in sequence order, then [`format`] the result.
#[must_use]
pub fn replace_placeholders(text: &str, placeholders: &[Placeholder]) -> String {
    format(&apply_placeholders(text, placeholders))
}

/// Element-wise [`replace_placeholders`]; order and length preserving.
#[must_use]
pub fn replace_placeholders_list<S: AsRef<str>>(
    list: &[S],
    placeholders: &[Placeholder],
) -> Vec<String> {
    list.iter()
        .map(|text| replace_placeholders(text.as_ref(), placeholders))
        .collect()
}

fn run_pipeline(engine: &impl MarkupEngine, text: &str) -> String {
    let line = engine.parse(text);
    let legacy = engine.serialize_legacy(&line);
    let rewritten = rewrite_hex_tokens(&legacy);
    translate_alternate_codes(&rewritten)
}

/// Send-side orchestration. Binds the `{prefix}` placeholder to the
/// injected provider's current value before formatting and delivery.
#[derive(Debug, Clone)]
pub struct ChatFormatter<P: PrefixProvider> {
    prefix_provider: P,
}

impl<P: PrefixProvider> ChatFormatter<P> {
    #[must_use]
    pub fn new(prefix_provider: P) -> Self { Self { prefix_provider } }

    /// [`Self::send_message_with`] without caller placeholders.
    pub fn send_message(&self, target: &dyn MessageSink, message: &str) {
        self.send_message_with(target, message, &[]);
    }

    /// Substitute `{prefix}` first, then the caller's placeholders in
    /// order, format the combined result, and hand it to the sink.
    pub fn send_message_with(
        &self,
        target: &dyn MessageSink,
        message: &str,
        placeholders: &[Placeholder],
    ) {
        let prefix =
            Placeholder::new(PREFIX_PLACEHOLDER_KEY, self.prefix_provider.prefix());
        let text = apply_placeholders(message, std::slice::from_ref(&prefix));
        let text = apply_placeholders(&text, placeholders);
        let formatted = format(&text);
        tracing::debug!("sending chat message: {formatted:?}");
        target.send(&formatted);
    }
}
