//! Configuration schema definitions.
//!
//! This module defines the route manifest and router settings.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::path::{RouteSyntax, DEFAULT_SIGIL};

/// Root configuration: router settings plus the declared routes.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route template syntax.
    pub syntax: SyntaxConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Declared screen routes.
    pub routes: Vec<RouteConfig>,
}

/// Route template syntax.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Leading character that marks a placeholder segment.
    pub placeholder_sigil: char,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            placeholder_sigil: DEFAULT_SIGIL,
        }
    }
}

impl SyntaxConfig {
    /// The configured syntax, falling back to the default for an invalid sigil.
    /// Validation reports the invalid sigil separately.
    pub fn route_syntax(&self) -> RouteSyntax {
        RouteSyntax::new(self.placeholder_sigil).unwrap_or_default()
    }
}

/// A declared route: a pattern and the kind of screen it opens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging and CLI output.
    pub name: String,

    /// Route template, e.g. `app://folder/:id`.
    pub pattern: String,

    /// Screen kind the route opens, e.g. `FolderBrowser`.
    pub screen: String,

    /// The screen is itself a container (never wrapped when presented).
    #[serde(default)]
    pub container: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
