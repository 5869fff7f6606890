//! Visiting and folding: the traversals that intercept short-circuits.
//!
//! These are the only places in the crate where a [`Signal::ShortCircuit`]
//! is caught. Every interception is logged at `debug` level.

use std::any::Any;

use crate::function::{Outcome, PartialFn1, PartialFn2, ShortCircuit, Signal};
use crate::specialized::{IndexedVisitor, Visitor};

/// Runs `visitor` on every element in order.
///
/// Returns `Ok(None)` when every element was visited, and
/// `Ok(Some(short_circuit))` when the visitor ended the traversal early.
///
/// # Errors
///
/// Returns the first failure raised by the visitor.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinators::break_if_true;
/// use fnkit::traverse::for_each;
///
/// let stopped = for_each([1, 5, 12, 7], break_if_true(|value: i32| Ok(value > 10)))
///     .unwrap()
///     .and_then(|short_circuit| short_circuit.into_payload::<i32>().ok());
/// assert_eq!(stopped, Some(12));
/// ```
pub fn for_each<T, X, I, V>(items: I, visitor: V) -> Outcome<Option<ShortCircuit>>
where
    T: 'static,
    X: 'static,
    I: IntoIterator<Item = T>,
    V: PartialFn1<T, X> + Send + Sync + 'static,
{
    let visitor = Visitor::new(visitor);
    for (position, item) in items.into_iter().enumerate() {
        if let Err(signal) = visitor.visit(item) {
            return intercept(signal, position);
        }
    }
    Ok(None)
}

/// Runs `visitor` on every element together with its position.
///
/// # Errors
///
/// Returns the first failure raised by the visitor.
pub fn for_each_indexed<T, X, I, V>(items: I, visitor: V) -> Outcome<Option<ShortCircuit>>
where
    T: 'static,
    X: 'static,
    I: IntoIterator<Item = T>,
    V: PartialFn2<usize, T, X> + Send + Sync + 'static,
{
    let visitor = IndexedVisitor::new(visitor);
    for (position, item) in items.into_iter().enumerate() {
        if let Err(signal) = visitor.visit(position, item) {
            return intercept(signal, position);
        }
    }
    Ok(None)
}

fn intercept(signal: Signal, position: usize) -> Outcome<Option<ShortCircuit>> {
    let short_circuit = signal.into_short_circuit()?;
    tracing::debug!(position, "visit ended by short circuit");
    Ok(Some(short_circuit))
}

/// Folds the elements into an accumulator with `reducer`.
///
/// The reducer may end the fold early by raising a short-circuit whose
/// payload has the accumulator's type; that payload becomes the result.
///
/// # Errors
///
/// Returns any failure or not-applicable signal raised by `reducer`, and a
/// short-circuit whose payload is not an `A`.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::{break_out, Function2};
/// use fnkit::traverse::fold;
///
/// let capped_sum = Function2::from_fn(|total: u32, value: u32| {
///     let next = total + value;
///     if next > 10 { break_out(10_u32) } else { Ok(next) }
/// });
///
/// assert_eq!(fold([1, 2, 3], 0, capped_sum.clone()).ok(), Some(6));
/// assert_eq!(fold([4, 5, 6, 7], 0, capped_sum).ok(), Some(10));
/// ```
pub fn fold<T, A, I, F>(items: I, initial: A, reducer: F) -> Outcome<A>
where
    A: Any,
    I: IntoIterator<Item = T>,
    F: PartialFn2<A, T, A>,
{
    let mut accumulator = initial;
    for (position, item) in items.into_iter().enumerate() {
        match reducer.apply(accumulator, item) {
            Ok(next) => accumulator = next,
            Err(Signal::ShortCircuit(short_circuit)) => {
                return match short_circuit.into_payload::<A>() {
                    Ok(result) => {
                        tracing::debug!(position, "fold ended by short circuit");
                        Ok(result)
                    }
                    Err(foreign) => {
                        tracing::debug!(position, "fold short circuit carries a foreign payload");
                        Err(Signal::ShortCircuit(foreign))
                    }
                };
            }
            Err(signal) => return Err(signal),
        }
    }
    Ok(accumulator)
}
