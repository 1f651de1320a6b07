//! Navigation results.

pub use crate::routing::error::Unresolved;

/// Outcome of a push or present.
///
/// Failures never panic and never propagate; they are reported here so callers
/// can log or assert on the reason.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<S> {
    /// A screen was built and the transition performed.
    Resolved(S),
    /// Nothing happened.
    Unresolved(Unresolved),
}

impl<S> Navigation<S> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Navigation::Resolved(_))
    }

    pub fn screen(&self) -> Option<&S> {
        match self {
            Navigation::Resolved(screen) => Some(screen),
            Navigation::Unresolved(_) => None,
        }
    }

    pub fn into_screen(self) -> Option<S> {
        match self {
            Navigation::Resolved(screen) => Some(screen),
            Navigation::Unresolved(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&Unresolved> {
        match self {
            Navigation::Resolved(_) => None,
            Navigation::Unresolved(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<S, Unresolved> {
        match self {
            Navigation::Resolved(screen) => Ok(screen),
            Navigation::Unresolved(reason) => Err(reason),
        }
    }
}

impl<S> From<Result<S, Unresolved>> for Navigation<S> {
    fn from(result: Result<S, Unresolved>) -> Self {
        match result {
            Ok(screen) => Navigation::Resolved(screen),
            Err(reason) => Navigation::Unresolved(reason),
        }
    }
}
