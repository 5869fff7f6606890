//! Prebuilt comparators.
//!
//! As with the prebuilt predicates, every call returns a freshly built
//! comparator; clones share it.

use std::cmp::Ordering;

use crate::function::{PartialFn1, PartialFn2};
use crate::specialized::Comparator;

/// The natural order of `T`.
///
/// Reversing it yields an order equivalent to [`reverse_order`].
pub fn natural_order<T: Ord + 'static>() -> Comparator<T> {
    Comparator::natural()
}

/// The reverse of the natural order of `T`.
pub fn reverse_order<T: Ord + 'static>() -> Comparator<T> {
    Comparator::reverse()
}

/// Orders values by the natural order of an extracted key.
///
/// ```rust
/// use fnkit::combinators::comparing;
/// use std::cmp::Ordering;
///
/// let by_length = comparing(|text: String| Ok(text.len()));
/// assert_eq!(by_length.compare("aa".into(), "b".into()).ok(), Some(Ordering::Greater));
/// ```
pub fn comparing<T, K, G>(key: G) -> Comparator<T>
where
    T: 'static,
    K: Ord,
    G: PartialFn1<T, K> + Send + Sync + 'static,
{
    Comparator::by_key(key)
}

/// Orders values by an extracted key compared with `key_comparator`.
pub fn comparing_with<T, K, G, C>(key: G, key_comparator: C) -> Comparator<T>
where
    T: 'static,
    K: 'static,
    G: PartialFn1<T, K> + Send + Sync + 'static,
    C: PartialFn2<K, K, Ordering> + Send + Sync + 'static,
{
    Comparator::by_key_with(key, key_comparator)
}
