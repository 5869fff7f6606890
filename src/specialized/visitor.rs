//! Side-effecting functions whose result is discarded.
//!
//! A [`Visitor`] is the callback of a traversal. Running it never yields a
//! value: the wrapped function's result is dropped and a
//! [`Signal::NotApplicable`] is absorbed. A [`Signal::ShortCircuit`] still
//! propagates so that the callback can end the traversal early, and a
//! [`Signal::Failure`] propagates as the genuine error it is.

use std::any::Any;
use std::ops::Deref;

use crate::function::{Function1, Function2, Outcome, PartialFn1, PartialFn2, Signal};

/// Drops a successful result and absorbs `NotApplicable`.
fn discard<X>(outcome: Outcome<X>) -> Outcome<()> {
    match outcome {
        Ok(_) | Err(Signal::NotApplicable) => Ok(()),
        Err(signal) => Err(signal),
    }
}

/// A unary function run for its side effect.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use fnkit::function::Signal;
/// use fnkit::specialized::Visitor;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let record = Visitor::new(move |value: i32| {
///     if value < 0 {
///         return Err(Signal::NotApplicable);
///     }
///     sink.lock().map_err(|_| Signal::NotApplicable)?.push(value);
///     Ok(value)
/// });
///
/// assert!(record.visit(3).is_ok());
/// assert!(record.visit(-1).is_ok());
/// assert_eq!(*seen.lock().unwrap(), vec![3]);
/// ```
pub struct Visitor<T> {
    function: Function1<T, ()>,
}

impl<T> Clone for Visitor<T> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Visitor<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Visitor").finish_non_exhaustive()
    }
}

impl<T: 'static> Visitor<T> {
    /// Converts any unary function into a visitor, discarding its result.
    ///
    /// Passing a `Visitor` returns a clone of it.
    pub fn new<X, F>(function: F) -> Self
    where
        X: 'static,
        F: PartialFn1<T, X> + Send + Sync + 'static,
    {
        if let Some(visitor) = (&function as &dyn Any).downcast_ref::<Self>() {
            return visitor.clone();
        }
        Self {
            function: Function1::from_fn(move |value: T| discard(function.apply(value))),
        }
    }

    /// Runs the visitor on `value`.
    ///
    /// # Errors
    ///
    /// Returns the short-circuit or failure raised by the wrapped function.
    #[inline]
    pub fn visit(&self, value: T) -> Outcome<()> {
        self.function.apply(value)
    }

    /// Returns a visitor that runs `visitor` only on values `predicate`
    /// accepts.
    pub fn guarded<X, G, V>(predicate: G, visitor: V) -> Self
    where
        T: Clone,
        X: 'static,
        G: PartialFn1<T, bool> + Send + Sync + 'static,
        V: PartialFn1<T, X> + Send + Sync + 'static,
    {
        Self {
            function: Function1::from_fn(move |value: T| {
                match predicate.apply(value.clone()) {
                    Ok(true) => discard(visitor.apply(value)),
                    other => discard(other),
                }
            }),
        }
    }

    /// Returns the underlying function.
    pub fn into_function(self) -> Function1<T, ()> {
        self.function
    }
}

impl<T> Deref for Visitor<T> {
    type Target = Function1<T, ()>;

    fn deref(&self) -> &Self::Target {
        &self.function
    }
}

impl<T> PartialFn1<T, ()> for Visitor<T> {
    #[inline]
    fn apply(&self, value: T) -> Outcome<()> {
        PartialFn1::apply(&self.function, value)
    }

    fn adapt(self) -> Function1<T, ()>
    where
        Self: Sized + Send + Sync + 'static,
        T: 'static,
    {
        self.function
    }
}

/// A binary visitor receiving an index (or key) along with each element.
///
/// The same signal rules as [`Visitor`] apply.
///
/// # Examples
///
/// ```rust
/// use fnkit::specialized::IndexedVisitor;
///
/// let print_odd_positions = IndexedVisitor::guarded_by_index(
///     |index: usize| Ok(index % 2 == 1),
///     |index: usize, name: &str| Ok(format!("{index}: {name}")),
/// );
/// assert!(print_odd_positions.visit(1, "b").is_ok());
/// ```
pub struct IndexedVisitor<K, T> {
    function: Function2<K, T, ()>,
}

impl<K, T> Clone for IndexedVisitor<K, T> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<K, T> std::fmt::Debug for IndexedVisitor<K, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IndexedVisitor").finish_non_exhaustive()
    }
}

impl<K: 'static, T: 'static> IndexedVisitor<K, T> {
    /// Converts any binary function into an indexed visitor, discarding its
    /// result.
    ///
    /// Passing an `IndexedVisitor` returns a clone of it.
    pub fn new<X, F>(function: F) -> Self
    where
        X: 'static,
        F: PartialFn2<K, T, X> + Send + Sync + 'static,
    {
        if let Some(visitor) = (&function as &dyn Any).downcast_ref::<Self>() {
            return visitor.clone();
        }
        Self {
            function: Function2::from_fn(move |key: K, value: T| discard(function.apply(key, value))),
        }
    }

    /// Runs the visitor on `key` and `value`.
    ///
    /// # Errors
    ///
    /// Returns the short-circuit or failure raised by the wrapped function.
    #[inline]
    pub fn visit(&self, key: K, value: T) -> Outcome<()> {
        self.function.apply(key, value)
    }

    /// Returns an indexed visitor that runs `visitor` only where
    /// `predicate` accepts the index.
    pub fn guarded_by_index<X, G, V>(predicate: G, visitor: V) -> Self
    where
        K: Clone,
        X: 'static,
        G: PartialFn1<K, bool> + Send + Sync + 'static,
        V: PartialFn2<K, T, X> + Send + Sync + 'static,
    {
        Self {
            function: Function2::from_fn(move |key: K, value: T| {
                match predicate.apply(key.clone()) {
                    Ok(true) => discard(visitor.apply(key, value)),
                    other => discard(other),
                }
            }),
        }
    }

    /// Returns a visitor that ignores the index.
    pub fn from_visitor(visitor: Visitor<T>) -> Self {
        Self {
            function: Function2::from_fn(move |_: K, value: T| visitor.visit(value)),
        }
    }
}

impl<K, T> Deref for IndexedVisitor<K, T> {
    type Target = Function2<K, T, ()>;

    fn deref(&self) -> &Self::Target {
        &self.function
    }
}

impl<K, T> PartialFn2<K, T, ()> for IndexedVisitor<K, T> {
    #[inline]
    fn apply(&self, key: K, value: T) -> Outcome<()> {
        PartialFn2::apply(&self.function, key, value)
    }

    fn adapt(self) -> Function2<K, T, ()>
    where
        Self: Sized + Send + Sync + 'static,
        K: 'static,
        T: 'static,
    {
        self.function
    }
}

static_assertions::assert_impl_all!(Visitor<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IndexedVisitor<usize, String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Failure;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn result_is_discarded() {
        let visitor = Visitor::new(|value: i32| Ok(value * 100));
        assert_eq!(visitor.visit(1).ok(), Some(()));
    }

    #[rstest]
    fn not_applicable_is_absorbed() {
        let visitor = Visitor::new(Function1::<i32, String>::undefined());
        assert!(visitor.visit(1).is_ok());
    }

    #[rstest]
    fn short_circuit_and_failure_propagate() {
        let breaking = Visitor::new(|value: i32| -> Outcome<()> { Err(Signal::short_circuit(value)) });
        let failing = Visitor::new(|_: i32| -> Outcome<()> { Err(Failure::message("disk full").into()) });
        assert!(breaking.visit(1).unwrap_err().is_short_circuit());
        assert!(failing.visit(1).unwrap_err().is_failure());
    }

    #[rstest]
    fn new_returns_an_existing_visitor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let visitor = Visitor::new(move |_: u8| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let again = Visitor::new(visitor.clone());
        again.visit(0).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(format!("{again:?}"), "Visitor { .. }");
    }

    #[rstest]
    #[case(4, 1)]
    #[case(5, 0)]
    fn guarded_visits_only_accepted_values(#[case] input: i32, #[case] expected_calls: usize) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let visitor = Visitor::guarded(
            |value: i32| Ok(value % 2 == 0),
            move |_: i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        );
        visitor.visit(input).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), expected_calls);
    }

    #[rstest]
    fn guarded_by_index_checks_the_key() {
        let visited = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&visited);
        let visitor = IndexedVisitor::guarded_by_index(
            |index: usize| Ok(index > 1),
            move |index: usize, _: char| {
                counter.fetch_add(index, Ordering::SeqCst);
                Ok(())
            },
        );
        for (index, value) in "abcd".chars().enumerate() {
            visitor.visit(index, value).unwrap();
        }
        assert_eq!(visited.load(Ordering::SeqCst), 2 + 3);
    }

    #[rstest]
    fn indexed_visitor_from_a_plain_visitor_ignores_the_key() {
        let breaking = Visitor::new(|value: &str| -> Outcome<()> { Err(Signal::short_circuit(value.len())) });
        let indexed = IndexedVisitor::<usize, &str>::from_visitor(breaking);
        let signal = indexed.visit(9, "four").unwrap_err();
        assert_eq!(signal.into_short_circuit().ok().and_then(|sc| sc.into_payload::<usize>().ok()), Some(4));
    }
}
