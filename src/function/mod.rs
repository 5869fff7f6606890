//! First-class partial functions of arity 0 to 5.
//!
//! This module provides the function-abstraction core:
//!
//! - [`PartialFn0`] .. [`PartialFn5`]: the arity contracts. Every closure
//!   returning an [`Outcome`] satisfies the contract of its arity.
//! - [`Function0`] .. [`Function5`]: the default adapters, immutable function
//!   values carrying the combinator suite (`or_else`, `lift`, `run_with`,
//!   `and_then`, `compose`, `curry`, ...).
//! - [`Signal`]: the sum type threaded through every application, with
//!   [`Signal::NotApplicable`] for partiality, [`Signal::ShortCircuit`] for
//!   early exit from a traversal and [`Signal::Failure`] for everything else.
//!
//! # Laws
//!
//! For adapters `f`, `g` of the same arity and every input `x`:
//!
//! ```text
//! f.or_else(g)(x)   == f(x)            if f(x) is not NotApplicable
//! f.or_else(g)(x)   == g(x)            otherwise
//! f.lift()(x)       == Present(f(x))   if f(x) succeeds
//! f.lift()(x)       == Absent          if f(x) is NotApplicable
//! f.curry(b)(a)     == f(a, b)
//! f.and_then(g).and_then(h)(x) == f.and_then(g.and_then(h))(x)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function2;
//!
//! let add = Function2::total(|left: i32, right: i32| left + right);
//! let add_ten_then_double = add.curry(10).and_then(|sum: i32| Ok(sum * 2));
//!
//! assert_eq!(add_ten_then_double.apply(5).ok(), Some(30));
//! ```

mod arity;
mod compose;
mod curry;
mod signal;

pub use arity::{
    Function0, Function1, Function2, Function3, Function4, Function5, PartialFn0, PartialFn1,
    PartialFn2, PartialFn3, PartialFn4, PartialFn5,
};
pub use signal::{Failure, Outcome, ShortCircuit, Signal, break_out, failure, not_applicable};

/// Converts any unary function into a [`Function1`].
///
/// Passing a [`Function1`] returns it unchanged.
///
/// ```rust
/// use fnkit::function::f1;
///
/// let length = f1(|text: String| Ok(text.len()));
/// assert_eq!(length.apply("abc".to_string()).ok(), Some(3));
/// ```
pub fn f1<P1, R, F>(function: F) -> Function1<P1, R>
where
    P1: 'static,
    R: 'static,
    F: PartialFn1<P1, R> + Send + Sync + 'static,
{
    Function1::new(function)
}

/// Converts any function of no parameters into a [`Function0`].
pub fn f0<R, F>(function: F) -> Function0<R>
where
    R: 'static,
    F: PartialFn0<R> + Send + Sync + 'static,
{
    Function0::new(function)
}

/// Converts any binary function into a [`Function2`].
pub fn f2<P1, P2, R, F>(function: F) -> Function2<P1, P2, R>
where
    P1: 'static,
    P2: 'static,
    R: 'static,
    F: PartialFn2<P1, P2, R> + Send + Sync + 'static,
{
    Function2::new(function)
}

/// Converts any ternary function into a [`Function3`].
pub fn f3<P1, P2, P3, R, F>(function: F) -> Function3<P1, P2, P3, R>
where
    P1: 'static,
    P2: 'static,
    P3: 'static,
    R: 'static,
    F: PartialFn3<P1, P2, P3, R> + Send + Sync + 'static,
{
    Function3::new(function)
}

/// Converts any four-parameter function into a [`Function4`].
pub fn f4<P1, P2, P3, P4, R, F>(function: F) -> Function4<P1, P2, P3, P4, R>
where
    P1: 'static,
    P2: 'static,
    P3: 'static,
    P4: 'static,
    R: 'static,
    F: PartialFn4<P1, P2, P3, P4, R> + Send + Sync + 'static,
{
    Function4::new(function)
}

/// Converts any five-parameter function into a [`Function5`].
pub fn f5<P1, P2, P3, P4, P5, R, F>(function: F) -> Function5<P1, P2, P3, P4, P5, R>
where
    P1: 'static,
    P2: 'static,
    P3: 'static,
    P4: 'static,
    P5: 'static,
    R: 'static,
    F: PartialFn5<P1, P2, P3, P4, P5, R> + Send + Sync + 'static,
{
    Function5::new(function)
}
