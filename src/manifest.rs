//! Registry built from a declarative route manifest.
//!
//! Each declared route gets a factory that describes the screen it would open,
//! which lets deep links be checked against a manifest without a UI.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::RouterConfig;
use crate::routing::matcher::MatchResult;
use crate::routing::registry::{Registry, ScreenFactory};

/// What a declared route resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredScreen {
    /// Declared route name.
    pub route: String,
    /// Declared screen kind.
    pub screen: String,
    pub pattern: String,
    pub url: String,
    pub values: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub container: bool,
}

struct DeclaredFactory {
    route: String,
    screen: String,
    container: bool,
}

impl ScreenFactory<DeclaredScreen> for DeclaredFactory {
    fn build(&self, matched: &MatchResult) -> Option<DeclaredScreen> {
        Some(DeclaredScreen {
            route: self.route.clone(),
            screen: self.screen.clone(),
            pattern: matched.pattern().to_string(),
            url: matched.url().to_string(),
            values: matched
                .values()
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            query: matched.query().to_vec(),
            container: self.container,
        })
    }
}

/// Register every declared route, in declaration order.
pub fn registry_from_config(config: &RouterConfig) -> Registry<DeclaredScreen> {
    let mut registry = Registry::with_syntax(config.syntax.route_syntax());
    for route in &config.routes {
        registry.register_factory(
            route.pattern.clone(),
            DeclaredFactory {
                route: route.name.clone(),
                screen: route.screen.clone(),
                container: route.container,
            },
        );
    }
    tracing::debug!(routes = registry.len(), "Registry built from manifest");
    registry
}
