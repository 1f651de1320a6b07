//! Route-driven navigation.
//!
//! # Responsibilities
//! - Resolve a route to a screen through the registry
//! - Push onto a navigation stack or present modally, optionally contained
//! - Report every failure as an `Unresolved` reason
//!
//! # Design Decisions
//! - Order: match, find the target, build, transition. An ambiguous route
//!   never reaches a factory and a missing target never builds a screen
//! - Best effort: failures leave the stage untouched

use crate::navigation::outcome::{Navigation, Unresolved};
use crate::navigation::stage::Stage;
use crate::routing::registry::Registry;

/// Owns the route registry and the stage it navigates on.
///
/// Constructed once by the application's composition root and handed to
/// whichever module needs to register or follow routes.
pub struct Navigator<St: Stage> {
    registry: Registry<St::Screen>,
    stage: St,
}

impl<St: Stage> Navigator<St> {
    pub fn new(registry: Registry<St::Screen>, stage: St) -> Self {
        Self { registry, stage }
    }

    pub fn registry(&self) -> &Registry<St::Screen> {
        &self.registry
    }

    /// Mutable access for feature modules registering their routes at start-up.
    pub fn registry_mut(&mut self) -> &mut Registry<St::Screen> {
        &mut self.registry
    }

    pub fn stage(&self) -> &St {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut St {
        &mut self.stage
    }

    pub fn into_parts(self) -> (Registry<St::Screen>, St) {
        (self.registry, self.stage)
    }

    /// Build the screen for `route` without showing it.
    pub fn screen_for(&self, route: &str) -> Navigation<St::Screen> {
        self.registry.screen_for(route).into()
    }

    /// Resolve `route` and push the screen onto `from`, or onto the top-most
    /// navigation stack when `from` is `None`.
    pub fn push(
        &mut self,
        route: &str,
        from: Option<St::Stack>,
        animated: bool,
    ) -> Navigation<St::Screen> {
        let resolution = match self.registry.resolve(route) {
            Ok(resolution) => resolution,
            Err(e) => return Navigation::Unresolved(e.into()),
        };

        let Some(stack) = from.or_else(|| self.stage.top_stack()) else {
            tracing::debug!(route = %route, "No navigation stack to push onto");
            return Navigation::Unresolved(Unresolved::MissingPresentationTarget);
        };

        let screen = match resolution.build() {
            Ok(screen) => screen,
            Err(reason) => return Navigation::Unresolved(reason),
        };

        self.stage.push(&stack, screen.clone(), animated);
        tracing::debug!(route = %route, pattern = %resolution.pattern(), animated, "Pushed screen");
        Navigation::Resolved(screen)
    }

    /// Resolve `route` and present the screen modally from `from`, or from the
    /// top-most screen when `from` is `None`.
    ///
    /// With a container, a non-container screen becomes the container's sole
    /// content and the container is presented. The returned screen is always
    /// the resolved one, never the container.
    pub fn present(
        &mut self,
        route: &str,
        inside: Option<St::Stack>,
        from: Option<St::Screen>,
        animated: bool,
    ) -> Navigation<St::Screen> {
        let resolution = match self.registry.resolve(route) {
            Ok(resolution) => resolution,
            Err(e) => return Navigation::Unresolved(e.into()),
        };

        let Some(presenter) = from.or_else(|| self.stage.top_screen()) else {
            tracing::debug!(route = %route, "No screen to present from");
            return Navigation::Unresolved(Unresolved::MissingPresentationTarget);
        };

        let screen = match resolution.build() {
            Ok(screen) => screen,
            Err(reason) => return Navigation::Unresolved(reason),
        };

        let (presented, contained) = match inside {
            Some(container) if !self.stage.is_container(&screen) => {
                (self.stage.embed(container, screen.clone()), true)
            }
            _ => (screen.clone(), false),
        };
        self.stage.present(&presenter, presented, animated);
        tracing::debug!(
            route = %route,
            pattern = %resolution.pattern(),
            contained,
            animated,
            "Presented screen"
        );
        Navigation::Resolved(screen)
    }

    /// Resolve `route` to a URL handler and run it.
    pub fn open(&self, route: &str) -> Result<(), Unresolved> {
        self.registry.open(route)
    }
}
