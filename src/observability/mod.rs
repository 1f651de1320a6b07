//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + navigation produce:
//!     → tracing events (collisions at warn, misses at debug)
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields (route, pattern, patterns) instead of formatted strings
//! - The library only emits events; binaries install the subscriber

pub mod logging;

pub use logging::init_logging;
