//! Three-way orderings as function values.

use std::cmp::Ordering;
use std::ops::Deref;

use crate::function::{Function2, Outcome, PartialFn1, PartialFn2};

/// A binary function over two values of the same type, fixed to return an
/// [`Ordering`].
///
/// # Laws
///
/// ```text
/// c.reversed().compare(a, b)         == c.compare(b, a)
/// c.reversed().reversed().compare(a, b) == c.compare(a, b)
/// c.then_comparing(d).compare(a, b)  == Equal  iff both c and d return Equal
/// ```
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fnkit::specialized::Comparator;
///
/// let by_length = Comparator::by_key(|word: &'static str| Ok(word.len()));
/// let by_length_then_text = by_length.then_comparing(Comparator::natural());
///
/// assert_eq!(by_length_then_text.compare("pear", "fig").ok(), Some(Ordering::Greater));
/// assert_eq!(by_length_then_text.compare("fig", "kiw").ok(), Some(Ordering::Less));
/// assert_eq!(by_length.reversed().compare_to_int("pear", "fig").ok(), Some(-1));
/// ```
pub struct Comparator<T> {
    function: Function2<T, T, Ordering>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Comparator").finish_non_exhaustive()
    }
}

impl<T: 'static> Comparator<T> {
    /// Converts any ordering-valued binary function into a comparator.
    ///
    /// Passing a `Comparator` reuses the same function value.
    pub fn new<F>(function: F) -> Self
    where
        F: PartialFn2<T, T, Ordering> + Send + Sync + 'static,
    {
        Self {
            function: function.adapt(),
        }
    }

    /// Adapts a plain comparison over borrowed values, such as
    /// [`Ord::cmp`] or a closure given to `slice::sort_by`.
    pub fn from_ord_fn<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            function: Function2::total(move |left: T, right: T| compare(&left, &right)),
        }
    }

    /// The natural order of `T`.
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::from_ord_fn(T::cmp)
    }

    /// The reverse of the natural order of `T`.
    pub fn reverse() -> Self
    where
        T: Ord,
    {
        Self::from_ord_fn(|left: &T, right: &T| right.cmp(left))
    }

    /// Orders values by the natural order of a key extracted from each.
    pub fn by_key<K, G>(key: G) -> Self
    where
        K: Ord,
        G: PartialFn1<T, K> + Send + Sync + 'static,
    {
        Self {
            function: Function2::from_fn(move |left: T, right: T| {
                Ok(key.apply(left)?.cmp(&key.apply(right)?))
            }),
        }
    }

    /// Orders values by a key extracted from each, compared with
    /// `key_comparator`.
    pub fn by_key_with<K, G, C>(key: G, key_comparator: C) -> Self
    where
        K: 'static,
        G: PartialFn1<T, K> + Send + Sync + 'static,
        C: PartialFn2<K, K, Ordering> + Send + Sync + 'static,
    {
        Self {
            function: Function2::from_fn(move |left: T, right: T| {
                key_comparator.apply(key.apply(left)?, key.apply(right)?)
            }),
        }
    }

    /// Compares two values.
    ///
    /// # Errors
    ///
    /// Propagates whatever signal the comparison raises.
    #[inline]
    pub fn compare(&self, left: T, right: T) -> Outcome<Ordering> {
        self.function.apply(left, right)
    }

    /// Compares two values, reporting the result as `-1`, `0` or `1`.
    ///
    /// # Errors
    ///
    /// Propagates whatever signal the comparison raises.
    pub fn compare_to_int(&self, left: T, right: T) -> Outcome<i32> {
        self.compare(left, right).map(|ordering| ordering as i32)
    }

    /// Returns the opposite order, obtained by swapping the operands.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let comparator = self.clone();
        Self {
            function: Function2::from_fn(move |left: T, right: T| comparator.compare(right, left)),
        }
    }

    /// Breaks ties of this order with `other`.
    ///
    /// `other` is only consulted when this order reports `Equal`.
    #[must_use]
    pub fn then_comparing<C>(&self, other: C) -> Self
    where
        T: Clone,
        C: PartialFn2<T, T, Ordering> + Send + Sync + 'static,
    {
        let comparator = self.clone();
        Self {
            function: Function2::from_fn(move |left: T, right: T| {
                match comparator.compare(left.clone(), right.clone())? {
                    Ordering::Equal => other.apply(left, right),
                    decided => Ok(decided),
                }
            }),
        }
    }

    /// Breaks ties with the natural order of an extracted key.
    #[must_use]
    pub fn then_comparing_by_key<K, G>(&self, key: G) -> Self
    where
        T: Clone,
        K: Ord,
        G: PartialFn1<T, K> + Send + Sync + 'static,
    {
        self.then_comparing(Self::by_key(key))
    }

    /// Breaks ties by an extracted key compared with `key_comparator`.
    #[must_use]
    pub fn then_comparing_by_key_with<K, G, C>(&self, key: G, key_comparator: C) -> Self
    where
        T: Clone,
        K: 'static,
        G: PartialFn1<T, K> + Send + Sync + 'static,
        C: PartialFn2<K, K, Ordering> + Send + Sync + 'static,
    {
        self.then_comparing(Self::by_key_with(key, key_comparator))
    }

    /// Returns the underlying function.
    pub fn into_function(self) -> Function2<T, T, Ordering> {
        self.function
    }
}

impl<T> Deref for Comparator<T> {
    type Target = Function2<T, T, Ordering>;

    fn deref(&self) -> &Self::Target {
        &self.function
    }
}

impl<T> PartialFn2<T, T, Ordering> for Comparator<T> {
    #[inline]
    fn apply(&self, left: T, right: T) -> Outcome<Ordering> {
        PartialFn2::apply(&self.function, left, right)
    }

    fn adapt(self) -> Function2<T, T, Ordering>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self.function
    }
}

impl<T> From<Function2<T, T, Ordering>> for Comparator<T> {
    fn from(function: Function2<T, T, Ordering>) -> Self {
        Self { function }
    }
}

static_assertions::assert_impl_all!(Comparator<String>: Send, Sync, Clone);
