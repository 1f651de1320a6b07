//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a candidate against one pattern, segment by segment
//! - Bind placeholder names to candidate values
//! - Pick the single matching pattern out of a set, or report why not
//!
//! # Design Decisions
//! - Schemes must be equal; a missing scheme only equals a missing scheme
//! - Only the overlapping index range is compared, so a pattern that is a
//!   prefix of the candidate (or the reverse) still matches
//! - Two or more matches is a collision: nothing is returned
//! - Unparsable patterns are skipped, never fatal

use std::collections::HashMap;

use crate::routing::error::RouteError;
use crate::routing::path::{ParsedRoute, PathComponent, RouteSyntax};
use crate::routing::pattern::RoutePattern;

/// Placeholder name → bound candidate segment.
pub type RouteValues = HashMap<String, String>;

/// The single pattern a concrete route resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    url: String,
    pattern: String,
    values: RouteValues,
    query: Vec<(String, String)>,
}

impl MatchResult {
    /// The concrete route that was matched.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The registered pattern string that matched.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn values(&self) -> &RouteValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Decoded query pairs, in order of appearance.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// First query value for `name`.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Match one candidate against one pattern.
///
/// Returns the placeholder bindings on success. A repeated placeholder name
/// keeps the value bound last.
pub fn match_segments(candidate: &ParsedRoute, pattern: &ParsedRoute) -> Option<RouteValues> {
    if candidate.scheme() != pattern.scheme() {
        return None;
    }

    let mut values = RouteValues::new();
    for (actual, expected) in candidate.segments().iter().zip(pattern.segments()) {
        match expected {
            PathComponent::Literal(literal) => {
                if actual.as_str() != literal {
                    return None;
                }
            }
            PathComponent::Placeholder(name) => {
                values.insert(name.clone(), actual.as_str().to_string());
            }
        }
    }
    Some(values)
}

/// How far two patterns collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapExtent {
    /// They agree on every index both have, so full-length URLs match both.
    Full,
    /// They disagree at index `n`; only URLs of at most `n` segments
    /// that agree with both prefixes match both.
    UpTo(usize),
}

/// Two patterns that some concrete route matches together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOverlap {
    pub extent: OverlapExtent,
    /// The longest route that matches both.
    pub example: String,
}

/// Find the routes that match both patterns.
///
/// Because only the overlapping prefix is compared, any two patterns with the
/// same scheme collide on a short enough route: `app://a/x` and `app://b/y`
/// both match `app://`. Returns `None` only when no routable candidate
/// matches both (different schemes, or schemeless patterns that disagree on
/// their first segment).
pub fn pattern_overlap(a: &ParsedRoute, b: &ParsedRoute) -> Option<PatternOverlap> {
    if a.scheme() != b.scheme() {
        return None;
    }

    let conflict = a
        .segments()
        .iter()
        .zip(b.segments())
        .position(|pair| match pair {
            (PathComponent::Literal(x), PathComponent::Literal(y)) => x != y,
            _ => false,
        });
    let (extent, len) = match conflict {
        Some(index) => (OverlapExtent::UpTo(index), index),
        None => (OverlapExtent::Full, a.segments().len().max(b.segments().len())),
    };
    if a.scheme().is_none() && len == 0 {
        return None;
    }

    let segments: Vec<&str> = (0..len)
        .map(|i| example_segment(a.segments().get(i), b.segments().get(i)))
        .collect();
    let example = match a.scheme() {
        Some(scheme) => format!("{}://{}", scheme, segments.join("/")),
        None => segments.join("/"),
    };

    Some(PatternOverlap { extent, example })
}

/// A candidate segment accepted at this index by both patterns.
fn example_segment<'p>(a: Option<&'p PathComponent>, b: Option<&'p PathComponent>) -> &'p str {
    match (a, b) {
        (Some(PathComponent::Literal(value)), _) | (_, Some(PathComponent::Literal(value))) => {
            value
        }
        (Some(component), _) | (None, Some(component)) => component.as_str(),
        (None, None) => "",
    }
}

/// Resolve `route` against `patterns`, applying the ambiguity policy.
pub fn resolve<'a, I>(
    route: &str,
    patterns: I,
    syntax: &RouteSyntax,
) -> Result<MatchResult, RouteError>
where
    I: IntoIterator<Item = &'a RoutePattern>,
{
    let candidate = match syntax.parse_candidate(route) {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::debug!(route = %route, error = %e, "Malformed route");
            return Err(e);
        }
    };

    let mut matches: Vec<(&RoutePattern, RouteValues)> = Vec::new();
    for pattern in patterns {
        let parsed = match pattern.parsed() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(pattern = %pattern, error = %e, "Skipping unparsable pattern");
                continue;
            }
        };
        if let Some(values) = match_segments(&candidate, parsed) {
            matches.push((pattern, values));
        }
    }

    match matches.len() {
        0 => {
            tracing::debug!(route = %route, "No route matched");
            Err(RouteError::NoMatch {
                route: route.to_string(),
            })
        }
        1 => {
            let (pattern, values) = matches.remove(0);
            Ok(MatchResult {
                url: route.to_string(),
                pattern: pattern.as_str().to_string(),
                values,
                query: decode_query(candidate.query()),
            })
        }
        _ => {
            let mut colliding: Vec<String> = matches
                .iter()
                .map(|(pattern, _)| pattern.as_str().to_string())
                .collect();
            colliding.sort();
            tracing::warn!(
                route = %route,
                patterns = ?colliding,
                "Route collision, refusing to resolve"
            );
            Err(RouteError::Ambiguous {
                route: route.to_string(),
                patterns: colliding,
            })
        }
    }
}

fn decode_query(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
