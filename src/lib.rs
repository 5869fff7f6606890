//! # fnkit
//!
//! First-class partial functions, an optional container and a small
//! combinator library for Rust.
//!
//! ## Overview
//!
//! - **Functions**: `Function0` to `Function5`, immutable function values of
//!   arity 0 to 5 with currying, composition, fallback chaining and lifting
//! - **Signals**: every application returns a value or a `Signal`
//!   (`NotApplicable`, `ShortCircuit` or `Failure`)
//! - **Optional**: `Present(value)` or `Absent`, driven by partial functions
//! - **Specializations**: `Predicate`, `Visitor`, `IndexedVisitor` and
//!   `Comparator`
//! - **Combinators**: ready-made predicates, relations and orderings
//! - **Traversals**: find, filter, visit, fold and sort over sequences,
//!   intercepting short-circuits
//!
//! ## Feature Flags
//!
//! - `specialized`: Predicate, Visitor and Comparator
//! - `combinators`: the combinator library (implies `specialized`)
//! - `traverse`: sequence traversals (implies `specialized`)
//! - `serde`: `Serialize`/`Deserialize` for `Optional`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let add = Function2::total(|left: i32, right: i32| left + right);
//! assert_eq!(add.curry(10).and_then(|sum: i32| Ok(sum * 2)).apply(5).ok(), Some(30));
//!
//! let is_even = Predicate::from_fn(|value: i32| value % 2 == 0);
//! assert_eq!(find_first([1, 3, 4, 5], is_even).ok(), Some(Optional::some(4)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;
    pub use crate::optional::*;

    #[cfg(feature = "specialized")]
    pub use crate::specialized::*;

    #[cfg(feature = "combinators")]
    pub use crate::combinators::*;

    #[cfg(feature = "traverse")]
    pub use crate::traverse::*;
}

pub mod function;
pub mod optional;

#[cfg(feature = "specialized")]
pub mod specialized;

#[cfg(feature = "combinators")]
pub mod combinators;

#[cfg(feature = "traverse")]
pub mod traverse;
