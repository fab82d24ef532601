// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Boundary traits for the hosting application's collaborators. The core
//! never owns a prefix value, a placeholder registry, or a delivery
//! channel; it is handed capabilities for each.

/// Read accessor for the process-wide prefix string. Read once per
/// [`crate::ChatFormatter::send_message`] call, so a provider backed by
/// mutable configuration always yields the value current at call time.
pub trait PrefixProvider {
    fn prefix(&self) -> String;
}

/// A fixed prefix. The simplest possible provider, also handy in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPrefix(pub String);

impl StaticPrefix {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self { Self(prefix.into()) }
}

impl PrefixProvider for StaticPrefix {
    fn prefix(&self) -> String { self.0.clone() }
}

/// External dynamic-placeholder expansion, keyed by an opaque identity
/// (typically a player). The implementor replaces the tokens it knows and
/// passes unknown tokens through unchanged; this crate consumes that
/// contract without defining it.
pub trait PlaceholderSource {
    type Identity: ?Sized;

    fn apply_placeholders(&self, identity: &Self::Identity, input: &str) -> String;
}

/// A source with no registered tokens; every input passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPlaceholders;

impl PlaceholderSource for NoPlaceholders {
    type Identity = ();

    fn apply_placeholders(&self, (): &(), input: &str) -> String { input.to_string() }
}

/// Somewhere a formatted message can be delivered to a recipient.
pub trait MessageSink {
    fn send(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_prefix() {
        let provider = StaticPrefix::new("&8[&6Srv&8] ");
        assert_eq!(provider.prefix(), "&8[&6Srv&8] ");
    }

    #[test]
    fn test_no_placeholders_passes_through() {
        let source = NoPlaceholders;
        assert_eq!(source.apply_placeholders(&(), "%anything%"), "%anything%");
    }
}
