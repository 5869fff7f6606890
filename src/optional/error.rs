//! Error raised when reading the value of an absent [`Optional`](super::Optional).

use crate::function::Signal;

/// Returned by [`Optional::get`](super::Optional::get) on `Absent`.
///
/// # Examples
///
/// ```rust
/// use fnkit::optional::{ElementMissing, Optional};
///
/// let error = Optional::<i32>::none().get().unwrap_err();
/// assert_eq!(error, ElementMissing { operation: "Optional::get" });
/// assert_eq!(format!("{error}"), "Optional::get: no element present");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMissing {
    /// The operation that required a present element.
    pub operation: &'static str,
}

impl std::fmt::Display for ElementMissing {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: no element present", self.operation)
    }
}

impl std::error::Error for ElementMissing {}

impl From<ElementMissing> for Signal {
    fn from(error: ElementMissing) -> Self {
        Self::failure(error)
    }
}
