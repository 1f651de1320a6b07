//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, overlap report)
//!     → RouterConfig (validated, immutable)
//!     → manifest.rs builds a Registry from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
pub use schema::SyntaxConfig;
