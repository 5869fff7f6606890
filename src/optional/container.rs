//! The `Optional` container: a value that is either present or absent.
//!
//! `Optional<T>` has exactly two states, `Present(value)` and `Absent`.
//! Operations never mutate a container; `map`, `flat_map` and `filter`
//! return new ones. Transformations take partial functions: a transform that
//! is not applicable to the held value yields `Absent`, while short-circuits
//! and failures are returned to the caller.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::optional::Optional;
//!
//! let port = Optional::of("8080".parse::<u16>().ok());
//! let doubled = port.map(|value: u16| Ok(u32::from(value) * 2)).ok();
//! assert_eq!(doubled, Some(Optional::some(16160)));
//!
//! let missing: Optional<u16> = Optional::none();
//! assert_eq!(missing.or_else(80), 80);
//! ```

use std::fmt;

use super::deferred::Deferred;
use super::error::ElementMissing;
use crate::function::{Outcome, PartialFn0, PartialFn1, Signal};

/// A value that may be absent.
///
/// Iterating an `Optional` yields exactly one element when present and none
/// when absent, so it can stand in for a zero-or-one element sequence.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use fnkit::optional::Optional;
///
/// let present = Optional::some(3);
/// let collected: Vec<i32> = present.into_iter().collect();
/// assert_eq!(collected, vec![3]);
///
/// let absent: Optional<i32> = Optional::none();
/// assert_eq!(absent.iter().count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A held value.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value that is known to exist.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the absent container.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Wraps a possibly-missing value: `None` becomes `Absent`.
    ///
    /// ```rust
    /// use fnkit::optional::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)), Optional::some(1));
    /// assert_eq!(Optional::<i32>::of(None), Optional::none());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn not_defined(&self) -> bool {
        !self.is_defined()
    }

    /// Returns the held value.
    ///
    /// Prefer [`Self::or_else`], [`Self::map`] or [`Self::filter`] where
    /// absence is expected.
    ///
    /// # Errors
    ///
    /// Returns [`ElementMissing`] when absent.
    pub fn get(self) -> Result<T, ElementMissing> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => {
                tracing::trace!(operation = "Optional::get", "read from an absent optional");
                Err(ElementMissing {
                    operation: "Optional::get",
                })
            }
        }
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Iterates over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `mapper` to the held value.
    ///
    /// `Absent` stays `Absent` without calling `mapper`; a mapper that is not
    /// applicable to the value also yields `Absent`.
    ///
    /// # Errors
    ///
    /// Propagates short-circuits and failures raised by `mapper`.
    pub fn map<B, F>(self, mapper: F) -> Outcome<Optional<B>>
    where
        F: PartialFn1<T, B>,
    {
        match self {
            Self::Present(value) => absent_if_not_applicable(mapper.apply(value).map(Optional::some)),
            Self::Absent => Ok(Optional::none()),
        }
    }

    /// Applies `mapper`, which itself returns an `Optional`, without nesting.
    ///
    /// # Errors
    ///
    /// Propagates short-circuits and failures raised by `mapper`.
    pub fn flat_map<B, F>(self, mapper: F) -> Outcome<Optional<B>>
    where
        F: PartialFn1<T, Optional<B>>,
    {
        match self {
            Self::Present(value) => absent_if_not_applicable(mapper.apply(value)),
            Self::Absent => Ok(Optional::none()),
        }
    }

    /// Keeps the held value only if `predicate` holds for it.
    ///
    /// A predicate that is not applicable to the value counts as not holding.
    ///
    /// # Errors
    ///
    /// Propagates short-circuits and failures raised by `predicate`.
    pub fn filter<F>(self, predicate: F) -> Outcome<Self>
    where
        T: Clone,
        F: PartialFn1<T, bool>,
    {
        match self {
            Self::Present(value) => match predicate.apply(value.clone()) {
                Ok(true) => Ok(Self::Present(value)),
                Ok(false) | Err(Signal::NotApplicable) => Ok(Self::Absent),
                Err(signal) => Err(signal),
            },
            Self::Absent => Ok(Self::Absent),
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Returns the held value, or `other` when absent.
    #[inline]
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => other,
        }
    }

    /// Returns the held value, or the result of `producer` when absent.
    ///
    /// `producer` is only invoked when the container is absent.
    ///
    /// # Errors
    ///
    /// Propagates every signal raised by `producer`.
    pub fn or_else_get<F>(self, producer: F) -> Outcome<T>
    where
        F: PartialFn0<T>,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => producer.apply(),
        }
    }

    /// Passes the held value to `consumer` for its side effect.
    ///
    /// # Errors
    ///
    /// Propagates every signal raised by `consumer`.
    pub fn run_with<X, F>(self, consumer: F) -> Outcome<()>
    where
        F: PartialFn1<T, X>,
    {
        if let Self::Present(value) = self {
            consumer.apply(value)?;
        }
        Ok(())
    }

    /// Returns lazily evaluated views of this container's operations.
    pub fn deferred(&self) -> Deferred<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        Deferred::new(self.clone())
    }
}

fn absent_if_not_applicable<B>(outcome: Outcome<Optional<B>>) -> Outcome<Optional<B>> {
    match outcome {
        Err(Signal::NotApplicable) => Ok(Optional::none()),
        other => other,
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}
