//! Pre-composition: running other functions first and feeding this one.
//!
//! For a unary function, `compose` accepts a `before` of any arity and the
//! result takes the parameters of `before`:
//!
//! ```text
//! f.compose(g)(x)        == f(g(x))
//! f.compose0(g)()        == f(g())
//! f.compose2(g)(x1, x2)  == f(g(x1, x2))
//! ```
//!
//! For arities two to five, `compose` takes one unary `before` per parameter
//! and transforms each argument independently:
//!
//! ```text
//! f.compose(g1, g2)(x1, x2) == f(g1(x1), g2(x2))
//! ```
//!
//! Befores run left to right; the first signal stops the application.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::{Function1, Function2};
//!
//! let shout = Function1::total(|text: String| text.to_uppercase());
//! let greeting = shout.compose2(|greeting: &'static str, name: &'static str| {
//!     Ok(format!("{greeting}, {name}"))
//! });
//! assert_eq!(greeting.apply("hello", "world").ok().as_deref(), Some("HELLO, WORLD"));
//!
//! let add = Function2::total(|left: i32, right: i32| left + right);
//! let add_lengths = add.compose(
//!     |text: String| Ok(i32::try_from(text.len()).unwrap_or(i32::MAX)),
//!     |flag: bool| Ok(i32::from(flag)),
//! );
//! assert_eq!(add_lengths.apply("abc".to_string(), true).ok(), Some(4));
//! ```

use super::arity::{
    Function0, Function1, Function2, Function3, Function4, Function5, PartialFn0, PartialFn1,
    PartialFn2, PartialFn3, PartialFn4, PartialFn5,
};

macro_rules! impl_unary_compose {
    ($($method:ident => $Before:ident $Result:ident [$($X:ident $x:ident),*];)*) => {
        impl<P1: 'static, R: 'static> Function1<P1, R> {
            $(
                #[doc = concat!(
                    "Returns a `",
                    stringify!($Result),
                    "` that applies `before` and feeds its result to this function."
                )]
                pub fn $method<$($X,)* G>(&self, before: G) -> $Result<$($X,)* R>
                where
                    $($X: 'static,)*
                    G: $Before<$($X,)* P1> + Send + Sync + 'static,
                {
                    let function = self.clone();
                    $Result::from_fn(move |$($x: $X),*| function.apply(before.apply($($x),*)?))
                }
            )*
        }
    };
}

impl_unary_compose! {
    compose0 => PartialFn0 Function0 [];
    compose => PartialFn1 Function1 [X1 x1];
    compose2 => PartialFn2 Function2 [X1 x1, X2 x2];
    compose3 => PartialFn3 Function3 [X1 x1, X2 x2, X3 x3];
    compose4 => PartialFn4 Function4 [X1 x1, X2 x2, X3 x3, X4 x4];
    compose5 => PartialFn5 Function5 [X1 x1, X2 x2, X3 x3, X4 x4, X5 x5];
}

macro_rules! impl_parameterwise_compose {
    ($Adapter:ident [$(($P:ident, $X:ident, $G:ident, $before:ident, $x:ident)),*]) => {
        impl<$($P: 'static,)* R: 'static> $Adapter<$($P,)* R> {
            /// Returns a function that transforms each argument with its own
            /// `before` and applies this function to the results.
            pub fn compose<$($X,)* $($G,)*>(&self, $($before: $G),*) -> $Adapter<$($X,)* R>
            where
                $($X: 'static,)*
                $($G: PartialFn1<$X, $P> + Send + Sync + 'static,)*
            {
                let function = self.clone();
                $Adapter::from_fn(move |$($x: $X),*| function.apply($($before.apply($x)?),*))
            }
        }
    };
}

impl_parameterwise_compose!(Function2 [(P1, X1, G1, before1, x1), (P2, X2, G2, before2, x2)]);
impl_parameterwise_compose!(Function3 [
    (P1, X1, G1, before1, x1),
    (P2, X2, G2, before2, x2),
    (P3, X3, G3, before3, x3)
]);
impl_parameterwise_compose!(Function4 [
    (P1, X1, G1, before1, x1),
    (P2, X2, G2, before2, x2),
    (P3, X3, G3, before3, x3),
    (P4, X4, G4, before4, x4)
]);
impl_parameterwise_compose!(Function5 [
    (P1, X1, G1, before1, x1),
    (P2, X2, G2, before2, x2),
    (P3, X3, G3, before3, x3),
    (P4, X4, G4, before4, x4),
    (P5, X5, G5, before5, x5)
]);
