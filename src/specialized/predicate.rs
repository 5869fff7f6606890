//! Boolean-valued unary functions.

use std::ops::Deref;

use crate::function::{Function1, Outcome, PartialFn1};
use crate::optional::Optional;

/// A unary function whose result is fixed to `bool`.
///
/// `Predicate` dereferences to its [`Function1`], so every adapter operator
/// (`or_else`, `lift`, `and_then`, `curry`, ...) remains available. The
/// logical combinators evaluate left to right and stop as soon as the result
/// is decided.
///
/// # Examples
///
/// ```rust
/// use fnkit::specialized::Predicate;
///
/// let positive = Predicate::new(|value: i32| Ok(value > 0));
/// let even = Predicate::new(|value: i32| Ok(value % 2 == 0));
/// let positive_even = positive.and(even.clone());
///
/// assert_eq!(positive_even.test(4).ok(), Some(true));
/// assert_eq!(positive_even.test(-4).ok(), Some(false));
/// assert_eq!(even.negate().test(3).ok(), Some(true));
/// ```
pub struct Predicate<T> {
    function: Function1<T, bool>,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: 'static> Predicate<T> {
    /// Converts any boolean-valued unary function into a predicate.
    ///
    /// Passing a `Predicate` (or its underlying [`Function1`]) reuses the
    /// same function value.
    pub fn new<F>(function: F) -> Self
    where
        F: PartialFn1<T, bool> + Send + Sync + 'static,
    {
        Self {
            function: function.adapt(),
        }
    }

    /// Wraps a plain boolean closure that never signals.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(T) -> bool + Send + Sync + 'static,
    {
        Self {
            function: Function1::total(function),
        }
    }

    /// Tests `value`.
    ///
    /// # Errors
    ///
    /// Propagates whatever signal the predicate raises.
    #[inline]
    pub fn test(&self, value: T) -> Outcome<bool> {
        self.function.apply(value)
    }

    /// Returns the underlying function.
    pub fn into_function(self) -> Function1<T, bool> {
        self.function
    }

    /// Returns the logical negation.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            function: self.function.negate(),
        }
    }

    /// Returns a predicate that holds when both this and `other` hold.
    ///
    /// `other` is not evaluated when this predicate is false.
    #[must_use]
    pub fn and<G>(&self, other: G) -> Self
    where
        T: Clone,
        G: PartialFn1<T, bool> + Send + Sync + 'static,
    {
        self.and_all([Self::new(other)])
    }

    /// Returns a predicate that holds when this and every one of `others`
    /// hold, evaluated left to right until the first `false`.
    #[must_use]
    pub fn and_all<I>(&self, others: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = Self>,
    {
        let first = self.clone();
        let others: Vec<Self> = others.into_iter().collect();
        Self::from(Function1::from_fn(move |value: T| {
            if !first.test(value.clone())? {
                return Ok(false);
            }
            for other in &others {
                if !other.test(value.clone())? {
                    return Ok(false);
                }
            }
            Ok(true)
        }))
    }

    /// Returns a predicate that holds when this or `other` holds.
    ///
    /// `other` is not evaluated when this predicate is true.
    #[must_use]
    pub fn or<G>(&self, other: G) -> Self
    where
        T: Clone,
        G: PartialFn1<T, bool> + Send + Sync + 'static,
    {
        self.or_all([Self::new(other)])
    }

    /// Returns a predicate that holds when this or any one of `others` holds,
    /// evaluated left to right until the first `true`.
    #[must_use]
    pub fn or_all<I>(&self, others: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = Self>,
    {
        let first = self.clone();
        let others: Vec<Self> = others.into_iter().collect();
        Self::from(Function1::from_fn(move |value: T| {
            if first.test(value.clone())? {
                return Ok(true);
            }
            for other in &others {
                if other.test(value.clone())? {
                    return Ok(true);
                }
            }
            Ok(false)
        }))
    }

    /// Returns a function applying `function` to values this predicate
    /// accepts, and `Absent` for the rest.
    pub fn if_then<R, G>(&self, function: G) -> Function1<T, Optional<R>>
    where
        T: Clone,
        R: 'static,
        G: PartialFn1<T, R> + Send + Sync + 'static,
    {
        let predicate = self.clone();
        Function1::from_fn(move |value: T| {
            if predicate.test(value.clone())? {
                function.apply(value).map(Optional::some)
            } else {
                Ok(Optional::none())
            }
        })
    }

    /// Returns a function applying `function` to values this predicate
    /// rejects, and `Absent` for the rest.
    pub fn else_then<R, G>(&self, function: G) -> Function1<T, Optional<R>>
    where
        T: Clone,
        R: 'static,
        G: PartialFn1<T, R> + Send + Sync + 'static,
    {
        self.negate().if_then(function)
    }
}

impl<T> Deref for Predicate<T> {
    type Target = Function1<T, bool>;

    fn deref(&self) -> &Self::Target {
        &self.function
    }
}

impl<T> PartialFn1<T, bool> for Predicate<T> {
    #[inline]
    fn apply(&self, value: T) -> Outcome<bool> {
        PartialFn1::apply(&self.function, value)
    }

    fn adapt(self) -> Function1<T, bool>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self.function
    }
}

impl<T> From<Function1<T, bool>> for Predicate<T> {
    fn from(function: Function1<T, bool>) -> Self {
        Self { function }
    }
}

impl<T> From<Predicate<T>> for Function1<T, bool> {
    fn from(predicate: Predicate<T>) -> Self {
        predicate.function
    }
}

static_assertions::assert_impl_all!(Predicate<String>: Send, Sync, Clone);
