//! Route string parsing.
//!
//! # Responsibilities
//! - Split a route into an optional scheme, path segments and a raw query
//! - Classify pattern segments as literals or placeholders
//! - Reject strings that cannot be routed at all
//!
//! # Design Decisions
//! - Schemes compare case-insensitively, so they are stored lowercased
//! - Empty segments (repeated or trailing slashes) are dropped
//! - Query and fragment never take part in matching
//! - Candidates only ever produce literal components

use crate::routing::error::RouteError;

/// Placeholder sigil used when none is configured.
pub const DEFAULT_SIGIL: char = ':';

/// One parsed segment of a pattern or a concrete route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// Must equal the candidate segment at the same index.
    Literal(String),
    /// Binds whatever the candidate holds at the same index.
    Placeholder(String),
}

impl PathComponent {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PathComponent::Placeholder(_))
    }

    /// The literal value, or the placeholder's name.
    pub fn as_str(&self) -> &str {
        match self {
            PathComponent::Literal(value) | PathComponent::Placeholder(value) => value,
        }
    }
}

/// A route split into its routable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    scheme: Option<String>,
    segments: Vec<PathComponent>,
    query: Option<String>,
}

impl ParsedRoute {
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn segments(&self) -> &[PathComponent] {
        &self.segments
    }

    /// Raw query string without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Placeholder names in segment order.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            PathComponent::Placeholder(name) => Some(name.as_str()),
            PathComponent::Literal(_) => None,
        })
    }
}

/// Returns true if `sigil` can mark a placeholder segment.
///
/// Path and query delimiters, whitespace and control characters are refused.
pub fn is_valid_sigil(sigil: char) -> bool {
    !matches!(sigil, '/' | '?' | '#') && !sigil.is_whitespace() && !sigil.is_control()
}

/// Route template syntax: which leading character marks a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSyntax {
    sigil: char,
}

impl Default for RouteSyntax {
    fn default() -> Self {
        Self { sigil: DEFAULT_SIGIL }
    }
}

impl RouteSyntax {
    /// Create a syntax with a custom sigil. Returns `None` for an unusable sigil.
    pub fn new(sigil: char) -> Option<Self> {
        is_valid_sigil(sigil).then_some(Self { sigil })
    }

    pub fn sigil(&self) -> char {
        self.sigil
    }

    /// Parse a registered pattern. Segments starting with the sigil become placeholders.
    pub fn parse_pattern(&self, pattern: &str) -> Result<ParsedRoute, RouteError> {
        let parts = split_route(pattern)?;
        let segments = parts
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.strip_prefix(self.sigil) {
                Some("") => Err(RouteError::malformed(pattern, "placeholder without a name")),
                Some(name) => Ok(PathComponent::Placeholder(name.to_string())),
                None => Ok(PathComponent::Literal(segment.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedRoute {
            scheme: parts.scheme,
            segments,
            query: parts.query.map(str::to_string),
        })
    }

    /// Parse a concrete navigation route. Every segment is a literal.
    pub fn parse_candidate(&self, route: &str) -> Result<ParsedRoute, RouteError> {
        let parts = split_route(route)?;
        let segments = parts
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| PathComponent::Literal(segment.to_string()))
            .collect();

        Ok(ParsedRoute {
            scheme: parts.scheme,
            segments,
            query: parts.query.map(str::to_string),
        })
    }
}

struct RouteParts<'a> {
    scheme: Option<String>,
    path: &'a str,
    query: Option<&'a str>,
}

fn split_route(route: &str) -> Result<RouteParts<'_>, RouteError> {
    if route.is_empty() {
        return Err(RouteError::malformed(route, "empty route"));
    }
    if let Some(c) = route.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(RouteError::malformed(route, format!("unexpected character {c:?}")));
    }

    let without_fragment = route.split_once('#').map_or(route, |(head, _)| head);
    let (location, query) = match without_fragment.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (without_fragment, None),
    };

    let (scheme, path) = split_scheme(route, location)?;
    if scheme.is_none() && path.split('/').all(str::is_empty) {
        return Err(RouteError::malformed(route, "no scheme and no path"));
    }

    Ok(RouteParts { scheme, path, query })
}

/// A `token:` prefix is a scheme only when it precedes the first slash.
/// A leading colon is left alone so `:id/...` stays a placeholder.
fn split_scheme<'a>(
    route: &str,
    location: &'a str,
) -> Result<(Option<String>, &'a str), RouteError> {
    let colon = match location.find(':') {
        Some(0) | None => return Ok((None, location)),
        Some(index) => index,
    };
    let token = &location[..colon];
    if token.contains('/') {
        return Ok((None, location));
    }
    if !is_scheme_token(token) {
        return Err(RouteError::malformed(route, format!("invalid scheme `{token}`")));
    }
    Ok((Some(token.to_ascii_lowercase()), &location[colon + 1..]))
}

fn is_scheme_token(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
