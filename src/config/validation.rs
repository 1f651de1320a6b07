//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every declared pattern parses under the configured syntax
//! - Detect duplicate route names and patterns
//! - Report patterns that can collide at runtime
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Overlaps are warnings, not errors: the router refuses ambiguous routes
//!   at match time anyway
//! - Only the shared prefix is compared at match time, so short URLs collide
//!   even when full-length ones cannot; both cases are reported

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::RouterConfig;
use crate::routing::matcher::{pattern_overlap, OverlapExtent, PatternOverlap};
use crate::routing::path::{is_valid_sigil, ParsedRoute};

/// A semantic problem in the route manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("duplicate route name `{0}`")]
    DuplicateRouteName(String),

    #[error("route `{0}` has an empty screen")]
    EmptyScreen(String),

    #[error("route `{name}` has an invalid pattern: {reason}")]
    InvalidPattern {
        name: String,
        reason: String,
    },

    #[error("routes `{first}` and `{second}` declare the same pattern `{pattern}`")]
    DuplicatePattern {
        pattern: String,
        first: String,
        second: String,
    },

    #[error("invalid placeholder sigil {0:?}")]
    InvalidSigil(char),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_sigil(config.syntax.placeholder_sigil) {
        errors.push(ValidationError::InvalidSigil(config.syntax.placeholder_sigil));
    }
    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let syntax = config.syntax.route_syntax();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut patterns: HashMap<&str, &str> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
        } else if names.insert(&route.name, index).is_some() {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        if route.screen.is_empty() {
            errors.push(ValidationError::EmptyScreen(route.name.clone()));
        }

        if let Err(e) = syntax.parse_pattern(&route.pattern) {
            errors.push(ValidationError::InvalidPattern {
                name: route.name.clone(),
                reason: e.to_string(),
            });
        }

        if let Some(first) = patterns.insert(&route.pattern, &route.name) {
            errors.push(ValidationError::DuplicatePattern {
                pattern: route.pattern.clone(),
                first: first.to_string(),
                second: route.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Two declared routes that some concrete URL would match together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub first: String,
    pub second: String,
    pub extent: OverlapExtent,
    /// A route both match.
    pub example: String,
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extent {
            OverlapExtent::Full => write!(
                f,
                "routes `{}` and `{}` can match the same URL, e.g. `{}`",
                self.first, self.second, self.example
            ),
            OverlapExtent::UpTo(segments) => write!(
                f,
                "routes `{}` and `{}` both match URLs of at most {} segment(s), e.g. `{}`",
                self.first, self.second, segments, self.example
            ),
        }
    }
}

/// Routes that all match the bare `scheme://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRoot {
    /// The scheme-only URL, e.g. `app://`.
    pub root: String,
    pub routes: Vec<String>,
}

impl fmt::Display for SharedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` matches {} routes: {}",
            self.root,
            self.routes.len(),
            self.routes.join(", ")
        )
    }
}

fn parsed_routes(config: &RouterConfig) -> Vec<(&str, &str, ParsedRoute)> {
    let syntax = config.syntax.route_syntax();
    config
        .routes
        .iter()
        .filter_map(|route| {
            syntax
                .parse_pattern(&route.pattern)
                .ok()
                .map(|parsed| (route.name.as_str(), route.pattern.as_str(), parsed))
        })
        .collect()
}

/// Find every pair of declared routes that a URL with at least one segment
/// can match together.
///
/// Pairs that only share the bare `scheme://` URL are left to
/// [`find_shared_roots`]. Routes with unparsable patterns are ignored;
/// identical pattern strings are left to `validate_config`.
pub fn find_overlaps(config: &RouterConfig) -> Vec<Overlap> {
    let parsed = parsed_routes(config);

    let mut overlaps = Vec::new();
    for (i, (first, first_pattern, a)) in parsed.iter().enumerate() {
        for (second, second_pattern, b) in &parsed[i + 1..] {
            if first_pattern == second_pattern {
                continue;
            }
            match pattern_overlap(a, b) {
                Some(PatternOverlap {
                    extent: OverlapExtent::UpTo(0),
                    ..
                })
                | None => {}
                Some(overlap) => overlaps.push(Overlap {
                    first: first.to_string(),
                    second: second.to_string(),
                    extent: overlap.extent,
                    example: overlap.example,
                }),
            }
        }
    }
    overlaps
}

/// Group routes by scheme; every group of two or more collides on `scheme://`.
pub fn find_shared_roots(config: &RouterConfig) -> Vec<SharedRoot> {
    let mut by_scheme: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, _, parsed) in parsed_routes(config) {
        if let Some(scheme) = parsed.scheme() {
            by_scheme
                .entry(format!("{scheme}://"))
                .or_default()
                .push(name.to_string());
        }
    }
    by_scheme
        .into_iter()
        .filter(|(_, routes)| routes.len() > 1)
        .map(|(root, routes)| SharedRoot { root, routes })
        .collect()
}
