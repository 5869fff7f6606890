//! A value that may be absent, and its lazily evaluated counterpart.
//!
//! - [`Optional`]: `Present(value)` or `Absent`, with transformations driven
//!   by partial functions.
//! - [`Deferred`]: the same operations returned as [`Function0`] thunks.
//! - [`ElementMissing`]: the error for reading an absent value.
//!
//! [`Function0`]: crate::function::Function0
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function1;
//! use fnkit::optional::Optional;
//!
//! let parse = Function1::from_fn(|text: &str| {
//!     text.parse::<i32>().map_err(|_| fnkit::function::Signal::NotApplicable)
//! });
//!
//! assert_eq!(Optional::some("12").map(parse.clone()).ok(), Some(Optional::some(12)));
//! assert_eq!(Optional::some("twelve").map(parse).ok(), Some(Optional::none()));
//! ```

mod container;
mod deferred;
mod error;

pub use container::Optional;
pub use deferred::Deferred;
pub use error::ElementMissing;
