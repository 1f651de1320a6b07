//! Routing failure reasons.
//!
//! Every failure is recovered locally and surfaced as a value so callers can
//! tell a missed deep link apart from a collision or a broken URL.

use thiserror::Error;

/// Why a route string could not be matched to exactly one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route could not be split into a scheme and segments.
    #[error("malformed route `{route}`: {reason}")]
    MalformedUrl {
        route: String,
        reason: String,
    },

    /// No registered pattern matched.
    #[error("no route matches `{route}`")]
    NoMatch { route: String },

    /// Two or more registered patterns matched (routing collision).
    #[error("route `{route}` is ambiguous between {patterns:?}")]
    Ambiguous {
        route: String,
        patterns: Vec<String>,
    },
}

impl RouteError {
    pub(crate) fn malformed(route: &str, reason: impl Into<String>) -> Self {
        RouteError::MalformedUrl {
            route: route.to_string(),
            reason: reason.into(),
        }
    }

    /// The route string this error refers to.
    pub fn route(&self) -> &str {
        match self {
            RouteError::MalformedUrl { route, .. }
            | RouteError::NoMatch { route }
            | RouteError::Ambiguous { route, .. } => route,
        }
    }
}

/// Why a navigation request produced no screen (or no handled URL).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    /// Matching failed before any factory was consulted.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The matched factory returned no screen.
    #[error("factory for `{pattern}` produced no screen")]
    FactoryDeclined { pattern: String },

    /// The matched URL handler reported the URL as unhandled.
    #[error("handler for `{pattern}` declined `{route}`")]
    HandlerDeclined {
        pattern: String,
        route: String,
    },

    /// No navigation stack or presenting screen was available.
    #[error("no presentation target available")]
    MissingPresentationTarget,
}

impl Unresolved {
    pub fn is_no_match(&self) -> bool {
        matches!(self, Unresolved::Route(RouteError::NoMatch { .. }))
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Unresolved::Route(RouteError::Ambiguous { .. }))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Unresolved::Route(RouteError::MalformedUrl { .. }))
    }
}
