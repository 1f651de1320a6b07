//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at start-up, per feature module):
//!     pattern string + factory
//!     → path.rs (parse template: scheme, literal/placeholder segments)
//!     → registry.rs (store under pattern string; last registration wins)
//!
//! Resolution:
//!     concrete route string
//!     → path.rs (parse candidate: scheme, literal segments, query)
//!     → matcher.rs (positional match against every pattern)
//!     → exactly one match: MatchResult (pattern, bindings, query)
//!     → zero / several / malformed: RouteError
//! ```
//!
//! # Design Decisions
//! - Lookup is a full scan, so registration order never matters
//! - Collisions are refused rather than resolved by priority
//! - Nothing here panics on bad input

pub mod error;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod registry;

pub use error::{RouteError, Unresolved};
pub use matcher::{MatchResult, OverlapExtent, RouteValues};
pub use path::{PathComponent, RouteSyntax};
pub use pattern::RoutePattern;
pub use registry::{Registry, Resolution, ScreenFactory, UrlHandler};
