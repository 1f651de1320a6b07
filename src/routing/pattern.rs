//! Registered route templates.

use std::fmt;

use crate::routing::error::RouteError;
use crate::routing::path::{ParsedRoute, RouteSyntax};

/// A route template such as `app://folder/:id`.
///
/// Identity is the raw template string. The template is parsed once, when it is
/// registered; a parse failure is kept rather than reported, and the pattern
/// simply never matches.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    parsed: Result<ParsedRoute, RouteError>,
}

impl RoutePattern {
    pub fn new(raw: impl Into<String>, syntax: &RouteSyntax) -> Self {
        let raw = raw.into();
        let parsed = syntax.parse_pattern(&raw);
        Self { raw, parsed }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Result<&ParsedRoute, &RouteError> {
        self.parsed.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_ok()
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_is_kept() {
        let pattern = RoutePattern::new("app://folder/:", &RouteSyntax::default());
        assert!(!pattern.is_valid());
        assert_eq!(pattern.as_str(), "app://folder/:");
        assert!(pattern.parsed().is_err());
    }

    #[test]
    fn test_identity_is_the_raw_string() {
        let syntax = RouteSyntax::default();
        let a = RoutePattern::new("app://folder/:id", &syntax);
        let b = RoutePattern::new("app://folder/:id", &syntax);
        let c = RoutePattern::new("app://folder//:id", &syntax);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "app://folder/:id");
    }
}
