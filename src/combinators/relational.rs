//! Relational comparisons as function values.
//!
//! Each relation comes in three shapes:
//!
//! - `lt(bound)`: a [`Predicate`] testing `value < bound`;
//! - `less_than()`: a binary function testing `left < right` by natural order;
//! - `lt_by(comparator)`: a binary function testing `left < right` by the
//!   given comparator, propagating its signals.
//!
//! The same holds for `gt`, `lte` and `gte`.

use std::cmp::Ordering;

use crate::function::{Function2, PartialFn2};
use crate::specialized::Predicate;

macro_rules! relation {
    ($($short:ident, $long:ident => $holds:expr, $text:literal;)*) => {
        paste::paste! {
            $(
                #[doc = concat!("Returns a predicate accepting values ", $text, " `bound`.")]
                pub fn $short<T>(bound: T) -> Predicate<T>
                where
                    T: Ord + Send + Sync + 'static,
                {
                    Predicate::from_fn(move |value: T| $holds(value.cmp(&bound)))
                }

                #[doc = concat!("Returns a function testing whether `left` is ", $text, " `right`.")]
                pub fn $long<T: Ord + 'static>() -> Function2<T, T, bool> {
                    Function2::total(|left: T, right: T| $holds(left.cmp(&right)))
                }

                #[doc = concat!(
                    "Returns a function testing whether `left` is ",
                    $text,
                    " `right` according to `comparator`."
                )]
                pub fn [<$short _by>]<T, C>(comparator: C) -> Function2<T, T, bool>
                where
                    T: 'static,
                    C: PartialFn2<T, T, Ordering> + Send + Sync + 'static,
                {
                    Function2::from_fn(move |left: T, right: T| comparator.apply(left, right).map($holds))
                }
            )*
        }
    };
}

relation! {
    lt, less_than => Ordering::is_lt, "less than";
    gt, greater_than => Ordering::is_gt, "greater than";
    lte, less_than_or_equal => Ordering::is_le, "less than or equal to";
    gte, greater_than_or_equal => Ordering::is_ge, "greater than or equal to";
}

/// Returns a function testing two values for equality.
pub fn eq<T: PartialEq + 'static>() -> Function2<T, T, bool> {
    Function2::total(|left: T, right: T| left == right)
}

/// Returns a function testing two values for inequality.
pub fn ne<T: PartialEq + 'static>() -> Function2<T, T, bool> {
    eq().negate()
}
