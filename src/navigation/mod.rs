//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push(route, from?) / present(route, inside?, from?)
//!     → routing registry (match route → factory)
//!     → stage.rs (find target: given stack/screen or top-most)
//!     → factory builds the screen
//!     → stage.rs (push, or embed in container + present)
//!     → Navigation::Resolved(screen) | Navigation::Unresolved(reason)
//! ```
//!
//! # Design Decisions
//! - Single-threaded: all calls happen on the UI event loop, no locking
//! - The platform is reached only through the `Stage` trait

pub mod navigator;
pub mod outcome;
pub mod stage;

pub use navigator::Navigator;
pub use outcome::Navigation;
pub use stage::Stage;
