//! Route registry.
//!
//! # Responsibilities
//! - Store pattern → factory (screen routes) and pattern → handler (URL routes)
//! - Resolve a concrete route to the single matching entry
//!
//! # Design Decisions
//! - Keyed by the pattern string; re-registering a pattern replaces the entry
//! - No syntax validation at registration; bad patterns just never match
//! - Lookup is a full scan through the matcher, not a key lookup
//! - Single owner, no locking: populate at start-up, then match

use std::collections::HashMap;
use std::fmt;

use crate::routing::error::{RouteError, Unresolved};
use crate::routing::matcher::{self, MatchResult, RouteValues};
use crate::routing::path::RouteSyntax;
use crate::routing::pattern::RoutePattern;

/// Builds a screen for a matched route.
///
/// Implement this on a per-module type when a plain closure is not enough;
/// closures go through [`Registry::register`].
pub trait ScreenFactory<S> {
    /// Returns `None` when the screen cannot be built for these values.
    fn build(&self, matched: &MatchResult) -> Option<S>;
}

/// Handles a matched URL without producing a screen.
pub trait UrlHandler {
    /// Returns true if the URL was handled.
    fn handle(&self, matched: &MatchResult) -> bool;
}

struct FnFactory<F>(F);

impl<S, F> ScreenFactory<S> for FnFactory<F>
where
    F: Fn(&str, &RouteValues) -> Option<S>,
{
    fn build(&self, matched: &MatchResult) -> Option<S> {
        (self.0)(matched.url(), matched.values())
    }
}

struct FnHandler<F>(F);

impl<F> UrlHandler for FnHandler<F>
where
    F: Fn(&str, &RouteValues) -> bool,
{
    fn handle(&self, matched: &MatchResult) -> bool {
        (self.0)(matched.url(), matched.values())
    }
}

struct Entry<T> {
    pattern: RoutePattern,
    target: T,
}

/// Patterns and their targets, resolved through the matcher.
pub struct RouteTable<T> {
    syntax: RouteSyntax,
    entries: HashMap<String, Entry<T>>,
}

impl<T> RouteTable<T> {
    pub fn new(syntax: RouteSyntax) -> Self {
        Self {
            syntax,
            entries: HashMap::new(),
        }
    }

    /// Store `target` under `pattern`. Returns the target it replaced, if any.
    pub fn insert(&mut self, pattern: impl Into<String>, target: T) -> Option<T> {
        let raw = pattern.into();
        let entry = Entry {
            pattern: RoutePattern::new(raw.clone(), &self.syntax),
            target,
        };
        self.entries.insert(raw, entry).map(|old| old.target)
    }

    /// Find the single entry matching `route`.
    pub fn lookup(&self, route: &str) -> Result<(MatchResult, &T), RouteError> {
        let matched = matcher::resolve(
            route,
            self.entries.values().map(|entry| &entry.pattern),
            &self.syntax,
        )?;
        match self.entries.get(matched.pattern()) {
            Some(entry) => Ok((matched, &entry.target)),
            None => Err(RouteError::NoMatch {
                route: route.to_string(),
            }),
        }
    }

    /// Registered pattern strings, sorted.
    pub fn patterns(&self) -> Vec<&str> {
        let mut patterns: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        patterns.sort_unstable();
        patterns
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A route matched to a factory, not yet built.
pub struct Resolution<'r, S> {
    matched: MatchResult,
    factory: &'r dyn ScreenFactory<S>,
}

impl<S> Resolution<'_, S> {
    pub fn matched(&self) -> &MatchResult {
        &self.matched
    }

    pub fn pattern(&self) -> &str {
        self.matched.pattern()
    }

    /// Invoke the factory.
    pub fn build(&self) -> Result<S, Unresolved> {
        self.factory.build(&self.matched).ok_or_else(|| {
            tracing::debug!(
                route = %self.matched.url(),
                pattern = %self.matched.pattern(),
                "Factory produced no screen"
            );
            Unresolved::FactoryDeclined {
                pattern: self.matched.pattern().to_string(),
            }
        })
    }
}

/// Screen factories and URL handlers, keyed by route pattern.
pub struct Registry<S> {
    syntax: RouteSyntax,
    factories: RouteTable<Box<dyn ScreenFactory<S>>>,
    handlers: RouteTable<Box<dyn UrlHandler>>,
}

impl<S> Registry<S> {
    pub fn new() -> Self {
        Self::with_syntax(RouteSyntax::default())
    }

    pub fn with_syntax(syntax: RouteSyntax) -> Self {
        Self {
            syntax,
            factories: RouteTable::new(syntax),
            handlers: RouteTable::new(syntax),
        }
    }

    pub fn syntax(&self) -> RouteSyntax {
        self.syntax
    }

    /// Register a screen factory closure, replacing any factory under the same pattern.
    pub fn register<F>(&mut self, pattern: impl Into<String>, factory: F)
    where
        F: Fn(&str, &RouteValues) -> Option<S> + 'static,
    {
        self.register_factory(pattern, FnFactory(factory));
    }

    /// Register a [`ScreenFactory`] implementation.
    pub fn register_factory<F>(&mut self, pattern: impl Into<String>, factory: F)
    where
        F: ScreenFactory<S> + 'static,
    {
        let pattern = pattern.into();
        let replaced = self
            .factories
            .insert(pattern.clone(), Box::new(factory))
            .is_some();
        tracing::debug!(pattern = %pattern, replaced, "Registered screen route");
    }

    /// Register a URL handler closure, replacing any handler under the same pattern.
    pub fn handle<F>(&mut self, pattern: impl Into<String>, handler: F)
    where
        F: Fn(&str, &RouteValues) -> bool + 'static,
    {
        self.register_handler(pattern, FnHandler(handler));
    }

    pub fn register_handler<H>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: UrlHandler + 'static,
    {
        let pattern = pattern.into();
        let replaced = self
            .handlers
            .insert(pattern.clone(), Box::new(handler))
            .is_some();
        tracing::debug!(pattern = %pattern, replaced, "Registered URL handler");
    }

    /// Match `route` to a screen factory without invoking it.
    pub fn resolve(&self, route: &str) -> Result<Resolution<'_, S>, RouteError> {
        let (matched, factory) = self.factories.lookup(route)?;
        Ok(Resolution {
            matched,
            factory: &**factory,
        })
    }

    /// Match `route` and build its screen.
    pub fn screen_for(&self, route: &str) -> Result<S, Unresolved> {
        self.resolve(route)?.build()
    }

    /// Match `route` to a URL handler and run it.
    pub fn open(&self, route: &str) -> Result<(), Unresolved> {
        let (matched, handler) = self.handlers.lookup(route)?;
        if handler.handle(&matched) {
            Ok(())
        } else {
            tracing::debug!(route = %route, pattern = %matched.pattern(), "Handler declined route");
            Err(Unresolved::HandlerDeclined {
                pattern: matched.pattern().to_string(),
                route: route.to_string(),
            })
        }
    }

    /// Screen route patterns, sorted.
    pub fn patterns(&self) -> Vec<&str> {
        self.factories.patterns()
    }

    /// URL handler patterns, sorted.
    pub fn handler_patterns(&self) -> Vec<&str> {
        self.handlers.patterns()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.factories.contains(pattern)
    }

    /// Number of screen routes.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True if no screen routes are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("sigil", &self.syntax.sigil())
            .field("screens", &self.factories.patterns())
            .field("handlers", &self.handlers.patterns())
            .finish()
    }
}
