//! Consumers that drive functions over sequences.
//!
//! These traversals are where the signals raised by predicates, visitors,
//! comparators and reducers meet a loop:
//!
//! - [`find_first`], [`filter`], [`any_match`], [`all_match`], [`none_match`]
//!   treat a not-applicable predicate as a rejection;
//! - [`for_each`], [`for_each_indexed`] and [`fold`] intercept
//!   [`Signal::ShortCircuit`](crate::function::Signal::ShortCircuit) and end
//!   the traversal early;
//! - [`sorted`] surfaces the first signal raised by its comparator.

mod sequence;
mod visit;

pub use sequence::{all_match, any_match, filter, find_first, none_match, sorted};
pub use visit::{fold, for_each, for_each_indexed};
