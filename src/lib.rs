//! Deep-link router: route templates, matching and screen navigation.
//!
//! # Architecture Overview
//!
//! ```text
//!   feature modules ──register(pattern, factory)──▶ routing::Registry
//!                                                        │
//!   push / present / open (route) ──▶ navigation::Navigator
//!                                        │   match ──────┘
//!                                        │   build screen
//!                                        ▼
//!                                   navigation::Stage (platform)
//!
//!   config (route manifest) ──▶ manifest::registry_from_config ──▶ routectl
//! ```

pub mod config;
pub mod manifest;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use navigation::{Navigation, Navigator, Stage};
pub use routing::{MatchResult, Registry, RouteError, RouteValues, Unresolved};
