//! Adapters whose result type is fixed.
//!
//! - [`Predicate`]: unary, returns `bool`; logical combinators.
//! - [`Visitor`] and [`IndexedVisitor`]: unary and binary callbacks whose
//!   result is discarded.
//! - [`Comparator`]: binary over one type, returns [`std::cmp::Ordering`].
//!
//! Each constructor accepts any function of the right shape and reuses the
//! function value when given an already-specialized one. Every combinator
//! here leaves [`Signal::ShortCircuit`](crate::function::Signal::ShortCircuit)
//! untouched.

mod comparator;
mod predicate;
mod visitor;

pub use comparator::Comparator;
pub use predicate::Predicate;
pub use visitor::{IndexedVisitor, Visitor};
