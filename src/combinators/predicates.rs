//! Prebuilt predicates and predicate composition.
//!
//! Rust has no generic statics, so `identity`, `yes` and `no` cannot be
//! single shared instances per element type. Each call builds one small
//! immutable value; keep and clone it where it is used repeatedly.

use crate::function::Function1;
use crate::optional::Optional;
use crate::specialized::Predicate;

/// The identity function.
///
/// ```rust
/// use fnkit::combinators::identity;
///
/// assert_eq!(identity().apply("same").ok(), Some("same"));
/// ```
pub fn identity<T: 'static>() -> Function1<T, T> {
    Function1::total(|value: T| value)
}

/// The predicate that accepts everything.
pub fn yes<T: 'static>() -> Predicate<T> {
    Predicate::from_fn(|_: T| true)
}

/// The predicate that rejects everything.
pub fn no<T: 'static>() -> Predicate<T> {
    yes().negate()
}

/// Values that may stand for "nothing".
pub trait Nullable {
    /// Returns `true` if this value holds nothing.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for Optional<T> {
    fn is_null(&self) -> bool {
        self.not_defined()
    }
}

/// Accepts values that hold nothing.
///
/// ```rust
/// use fnkit::combinators::is_null;
///
/// assert_eq!(is_null().test(None::<i32>).ok(), Some(true));
/// assert_eq!(is_null().test(Some(1)).ok(), Some(false));
/// ```
pub fn is_null<T: Nullable + 'static>() -> Predicate<T> {
    Predicate::from_fn(|value: T| value.is_null())
}

/// Accepts values that hold something.
pub fn not_null<T: Nullable + 'static>() -> Predicate<T> {
    is_null().negate()
}

/// Accepts values that every one of `predicates` accepts; accepts
/// everything when `predicates` is empty.
pub fn all_of<T, I>(predicates: I) -> Predicate<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    yes().and_all(predicates)
}

/// Accepts values that at least one of `predicates` accepts; rejects
/// everything when `predicates` is empty.
pub fn any_of<T, I>(predicates: I) -> Predicate<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    no().or_all(predicates)
}

/// Accepts values that none of `predicates` accepts.
pub fn none_of<T, I>(predicates: I) -> Predicate<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    any_of(predicates).negate()
}

/// Accepts values equal to `expected`.
///
/// ```rust
/// use fnkit::combinators::equal_to;
///
/// let is_admin = equal_to("admin");
/// assert_eq!(is_admin.test("admin").ok(), Some(true));
/// ```
pub fn equal_to<T>(expected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Predicate::from_fn(move |value: T| value == expected)
}

/// Accepts values different from `unexpected`.
pub fn not_equal_to<T>(unexpected: T) -> Predicate<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    equal_to(unexpected).negate()
}
