//! A library of ready-made function values.
//!
//! Every combinator is a pure function returning a fresh, immutable value.
//! None of them keeps state between calls, so they can be built wherever they
//! are needed and shared freely across threads.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::combinators::{all_of, gte, lt, natural_order};
//!
//! let in_range = all_of([gte(10), lt(20)]);
//! assert_eq!(in_range.test(15).ok(), Some(true));
//! assert_eq!(in_range.test(20).ok(), Some(false));
//!
//! let descending = natural_order::<i32>().reversed();
//! assert!(descending.compare(1, 2).is_ok_and(|ordering| ordering.is_gt()));
//! ```

mod breaking;
mod ordering;
mod predicates;
mod relational;

pub use breaking::{
    break_if, break_if_indexed, break_if_true, break_if_true_indexed, break_if_true2,
    break_if_true3, break_if_true4, break_if_true5, break_if2, break_if3, break_if4, break_if5,
};
pub use ordering::{comparing, comparing_with, natural_order, reverse_order};
pub use predicates::{
    Nullable, all_of, any_of, equal_to, identity, is_null, no, none_of, not_equal_to, not_null,
    yes,
};
pub use relational::{
    eq, greater_than, greater_than_or_equal, gt, gt_by, gte, gte_by, less_than, less_than_or_equal,
    lt, lt_by, lte, lte_by, ne,
};
