//! Predicate- and comparator-driven queries over sequences.
//!
//! A predicate that is not applicable to an element counts as rejecting it.
//! Short-circuits and failures stop the query and are returned to the caller.

use std::cmp::Ordering;

use crate::function::{Outcome, PartialFn1, PartialFn2, Signal};
use crate::optional::Optional;

fn accepts<T, P>(predicate: &P, value: T) -> Outcome<bool>
where
    P: PartialFn1<T, bool>,
{
    match predicate.apply(value) {
        Err(Signal::NotApplicable) => Ok(false),
        outcome => outcome,
    }
}

/// Returns the first element `predicate` accepts, or `Absent`.
///
/// # Errors
///
/// Returns the first short-circuit or failure raised by `predicate`.
///
/// # Examples
///
/// ```rust
/// use fnkit::optional::Optional;
/// use fnkit::traverse::find_first;
///
/// let is_even = |value: i32| Ok(value % 2 == 0);
/// assert_eq!(find_first([1, 3, 4, 5], is_even).ok(), Some(Optional::some(4)));
/// assert_eq!(find_first([1, 3, 5], is_even).ok(), Some(Optional::none()));
/// ```
pub fn find_first<T, I, P>(items: I, predicate: P) -> Outcome<Optional<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    P: PartialFn1<T, bool>,
{
    for item in items {
        if accepts(&predicate, item.clone())? {
            return Ok(Optional::some(item));
        }
    }
    Ok(Optional::none())
}

/// Returns the elements `predicate` accepts, in order.
///
/// # Errors
///
/// Returns the first short-circuit or failure raised by `predicate`.
pub fn filter<T, I, P>(items: I, predicate: P) -> Outcome<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    P: PartialFn1<T, bool>,
{
    let mut accepted = Vec::new();
    for item in items {
        if accepts(&predicate, item.clone())? {
            accepted.push(item);
        }
    }
    Ok(accepted)
}

/// Returns `true` if `predicate` accepts at least one element.
///
/// # Errors
///
/// Returns the first short-circuit or failure raised by `predicate`.
pub fn any_match<T, I, P>(items: I, predicate: P) -> Outcome<bool>
where
    I: IntoIterator<Item = T>,
    P: PartialFn1<T, bool>,
{
    for item in items {
        if accepts(&predicate, item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns `true` if `predicate` accepts every element.
///
/// # Errors
///
/// Returns the first short-circuit or failure raised by `predicate`.
pub fn all_match<T, I, P>(items: I, predicate: P) -> Outcome<bool>
where
    I: IntoIterator<Item = T>,
    P: PartialFn1<T, bool>,
{
    for item in items {
        if !accepts(&predicate, item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` if `predicate` accepts no element.
///
/// # Errors
///
/// Returns the first short-circuit or failure raised by `predicate`.
pub fn none_match<T, I, P>(items: I, predicate: P) -> Outcome<bool>
where
    I: IntoIterator<Item = T>,
    P: PartialFn1<T, bool>,
{
    any_match(items, predicate).map(|found| !found)
}

/// Returns the elements stably sorted by `comparator`.
///
/// # Errors
///
/// Returns the first signal raised by `comparator`. Once a comparison has
/// signalled, the remaining comparisons are skipped.
pub fn sorted<T, I, C>(items: I, comparator: C) -> Outcome<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
    C: PartialFn2<T, T, Ordering>,
{
    let mut elements: Vec<T> = items.into_iter().collect();
    let mut raised: Option<Signal> = None;
    elements.sort_by(|left, right| {
        if raised.is_some() {
            return Ordering::Equal;
        }
        comparator.apply(left.clone(), right.clone()).unwrap_or_else(|signal| {
            raised = Some(signal);
            Ordering::Equal
        })
    });
    raised.map_or(Ok(elements), Err)
}
