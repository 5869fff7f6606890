//! Arity contracts and their default adapters.
//!
//! For every arity from 0 to 5 this module defines
//!
//! - a contract trait `PartialFnN`, implemented by every
//!   `Fn(P1, .., PN) -> Outcome<R>` closure and by the adapter itself, and
//! - a default adapter `FunctionN`, an immutable, cheaply clonable function
//!   value exposing the combinator suite shared by all arities.
//!
//! The six shapes are generated by [`define_arity!`] so that the combinator
//! rules are written once. Currying lives in `curry.rs` and composition with
//! preceding functions in `compose.rs`.
//!
//! # Signal interception
//!
//! `apply_or_else`, `or_else`, `lift` and `run_with` intercept
//! [`Signal::NotApplicable`] and nothing else. A [`Signal::ShortCircuit`] or
//! [`Signal::Failure`] passes through every combinator untouched.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::{Function2, Signal};
//!
//! let divide = Function2::from_fn(|numerator: i32, denominator: i32| {
//!     if denominator == 0 {
//!         Err(Signal::NotApplicable)
//!     } else {
//!         Ok(numerator / denominator)
//!     }
//! });
//! let safe_divide = divide.or_else(Function2::total(|_: i32, _: i32| 0));
//!
//! assert_eq!(safe_divide.apply(10, 2).ok(), Some(5));
//! assert_eq!(safe_divide.apply(10, 0).ok(), Some(0));
//! assert!(divide.lift().apply(1, 0).ok().is_some_and(|result| result.not_defined()));
//! ```

use std::fmt;
use std::sync::Arc;

use super::signal::{Outcome, Signal};
use crate::optional::Optional;

/// Generates the contract trait, its blanket implementation for closures,
/// the default adapter and the combinators shared by every arity.
macro_rules! define_arity {
    (
        $(#[$trait_meta:meta])*
        trait $Trait:ident;
        $(#[$adapter_meta:meta])*
        struct $Adapter:ident;
        arity $arity:literal;
        params [$($P:ident $p:ident),*];
    ) => {
        $(#[$trait_meta])*
        pub trait $Trait<$($P,)* R> {
            /// Applies the function to its parameters.
            ///
            /// # Errors
            ///
            /// Returns [`Signal::NotApplicable`] outside the function's domain,
            /// [`Signal::ShortCircuit`] to abort an enclosing traversal, or
            /// [`Signal::Failure`] for any other error.
            fn apply(&self, $($p: $P),*) -> Outcome<R>;

            /// Converts this function into its default adapter.
            ///
            /// An adapter converts into itself without another layer of
            /// indirection.
            fn adapt(self) -> $Adapter<$($P,)* R>
            where
                Self: Sized + Send + Sync + 'static,
                $($P: 'static,)*
                R: 'static,
            {
                $Adapter {
                    function: Arc::new(self),
                }
            }
        }

        impl<$($P,)* R, F> $Trait<$($P,)* R> for F
        where
            F: Fn($($P),*) -> Outcome<R>,
        {
            #[inline]
            fn apply(&self, $($p: $P),*) -> Outcome<R> {
                self($($p),*)
            }
        }

        $(#[$adapter_meta])*
        pub struct $Adapter<$($P,)* R> {
            function: Arc<dyn $Trait<$($P,)* R> + Send + Sync>,
        }

        impl<$($P,)* R> Clone for $Adapter<$($P,)* R> {
            fn clone(&self) -> Self {
                Self {
                    function: Arc::clone(&self.function),
                }
            }
        }

        impl<$($P,)* R> fmt::Debug for $Adapter<$($P,)* R> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($Adapter))
                    .field("arity", &$arity)
                    .finish_non_exhaustive()
            }
        }

        impl<$($P,)* R> $Trait<$($P,)* R> for $Adapter<$($P,)* R> {
            #[inline]
            fn apply(&self, $($p: $P),*) -> Outcome<R> {
                self.function.apply($($p),*)
            }

            fn adapt(self) -> Self
            where
                Self: Sized + Send + Sync + 'static,
                $($P: 'static,)*
                R: 'static,
            {
                self
            }
        }

        impl<$($P: 'static,)* R: 'static> $Adapter<$($P,)* R> {
            /// Converts any function of this arity into the adapter.
            ///
            /// Passing an adapter returns it unchanged.
            pub fn new<F>(function: F) -> Self
            where
                F: $Trait<$($P,)* R> + Send + Sync + 'static,
            {
                function.adapt()
            }

            /// Wraps a closure that may signal.
            pub fn from_fn<F>(function: F) -> Self
            where
                F: Fn($($P),*) -> Outcome<R> + Send + Sync + 'static,
            {
                Self {
                    function: Arc::new(function),
                }
            }

            /// Wraps a closure that is defined for every input.
            pub fn total<F>(function: F) -> Self
            where
                F: Fn($($P),*) -> R + Send + Sync + 'static,
            {
                Self::from_fn(move |$($p: $P),*| Ok(function($($p),*)))
            }

            /// The function defined nowhere: always signals
            /// [`Signal::NotApplicable`].
            pub fn undefined() -> Self {
                Self::from_fn(|$(_: $P),*| Err(Signal::NotApplicable))
            }

            /// Applies the function.
            ///
            /// # Errors
            ///
            /// Propagates whatever signal the wrapped function raises.
            #[inline]
            pub fn apply(&self, $($p: $P),*) -> Outcome<R> {
                self.function.apply($($p),*)
            }

            /// Applies this function, falling back to `fallback` with the same
            /// arguments when this one is not applicable.
            ///
            /// # Errors
            ///
            /// Propagates short-circuits and failures from this function, and
            /// every signal from `fallback`.
            pub fn apply_or_else<G>(&self, $($p: $P,)* fallback: &G) -> Outcome<R>
            where
                G: $Trait<$($P,)* R> + ?Sized,
                $($P: Clone,)*
            {
                match self.function.apply($($p.clone()),*) {
                    Err(Signal::NotApplicable) => fallback.apply($($p),*),
                    outcome => outcome,
                }
            }

            /// Returns a function applying [`Self::apply_or_else`] with `fallback`.
            pub fn or_else<G>(&self, fallback: G) -> Self
            where
                G: $Trait<$($P,)* R> + Send + Sync + 'static,
                $($P: Clone,)*
            {
                let function = self.clone();
                Self::from_fn(move |$($p: $P),*| function.apply_or_else($($p,)* &fallback))
            }

            /// Turns this partial function into a total one returning
            /// [`Optional`]: `Present(result)` where defined, `Absent` where
            /// not applicable.
            pub fn lift(&self) -> $Adapter<$($P,)* Optional<R>> {
                let function = self.clone();
                $Adapter::from_fn(move |$($p: $P),*| match function.apply($($p),*) {
                    Ok(value) => Ok(Optional::some(value)),
                    Err(Signal::NotApplicable) => Ok(Optional::none()),
                    Err(signal) => Err(signal),
                })
            }

            /// Feeds the result to `action` for its side effect.
            ///
            /// The returned function yields `true` when both applications
            /// succeeded and `false` when either was not applicable.
            pub fn run_with<X, G>(&self, action: G) -> $Adapter<$($P,)* bool>
            where
                G: PartialFn1<R, X> + Send + Sync + 'static,
            {
                let function = self.clone();
                $Adapter::from_fn(move |$($p: $P),*| {
                    match function.apply($($p),*).and_then(|value| action.apply(value)) {
                        Ok(_) => Ok(true),
                        Err(Signal::NotApplicable) => Ok(false),
                        Err(signal) => Err(signal),
                    }
                })
            }

            /// Returns `after(self(..))`.
            pub fn and_then<T, G>(&self, after: G) -> $Adapter<$($P,)* T>
            where
                T: 'static,
                G: PartialFn1<R, T> + Send + Sync + 'static,
            {
                let function = self.clone();
                $Adapter::from_fn(move |$($p: $P),*| after.apply(function.apply($($p),*)?))
            }

            /// Returns `transform(self(..))` for a transform defined everywhere.
            pub fn map<T, G>(&self, transform: G) -> $Adapter<$($P,)* T>
            where
                T: 'static,
                G: Fn(R) -> T + Send + Sync + 'static,
            {
                let function = self.clone();
                $Adapter::from_fn(move |$($p: $P),*| function.apply($($p),*).map(&transform))
            }

            /// Applies this function and then each of `others` to the same
            /// arguments, returning the last result.
            ///
            /// Intermediate results are discarded; use this only for chains
            /// run for their side effects. The first signal stops the chain.
            pub fn apply_all_for_effect<I>(&self, others: I) -> Self
            where
                I: IntoIterator<Item = Self>,
                $($P: Clone,)*
            {
                let others: Vec<Self> = others.into_iter().collect();
                if others.is_empty() {
                    return self.clone();
                }
                let function = self.clone();
                Self::from_fn(move |$($p: $P),*| {
                    let mut result = function.apply($($p.clone()),*)?;
                    for other in &others {
                        result = other.apply($($p.clone()),*)?;
                    }
                    Ok(result)
                })
            }
        }

        impl<$($P: 'static),*> $Adapter<$($P,)* bool> {
            /// Returns the logical negation of this boolean function.
            pub fn negate(&self) -> Self {
                let function = self.clone();
                Self::from_fn(move |$($p: $P),*| function.apply($($p),*).map(|value| !value))
            }
        }
    };
}

define_arity! {
    /// Contract of a function taking no parameters.
    trait PartialFn0;
    /// Default adapter for functions taking no parameters.
    ///
    /// ```rust
    /// use fnkit::function::Function0;
    ///
    /// let answer = Function0::constant(42);
    /// assert_eq!(answer.map(|value| value + 1).apply().ok(), Some(43));
    /// ```
    struct Function0;
    arity 0;
    params [];
}

define_arity! {
    /// Contract of a function taking one parameter.
    trait PartialFn1;
    /// Default adapter for functions taking one parameter.
    ///
    /// ```rust
    /// use fnkit::function::Function1;
    ///
    /// let double = Function1::total(|value: i32| value * 2);
    /// let describe = double.and_then(|value: i32| Ok(format!("got {value}")));
    /// assert_eq!(describe.apply(4).ok().as_deref(), Some("got 8"));
    /// ```
    struct Function1;
    arity 1;
    params [P1 p1];
}

define_arity! {
    /// Contract of a function taking two parameters.
    trait PartialFn2;
    /// Default adapter for functions taking two parameters.
    struct Function2;
    arity 2;
    params [P1 p1, P2 p2];
}

define_arity! {
    /// Contract of a function taking three parameters.
    trait PartialFn3;
    /// Default adapter for functions taking three parameters.
    struct Function3;
    arity 3;
    params [P1 p1, P2 p2, P3 p3];
}

define_arity! {
    /// Contract of a function taking four parameters.
    trait PartialFn4;
    /// Default adapter for functions taking four parameters.
    struct Function4;
    arity 4;
    params [P1 p1, P2 p2, P3 p3, P4 p4];
}

define_arity! {
    /// Contract of a function taking five parameters.
    trait PartialFn5;
    /// Default adapter for functions taking five parameters.
    struct Function5;
    arity 5;
    params [P1 p1, P2 p2, P3 p3, P4 p4, P5 p5];
}

impl<R> Function0<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// A function returning a clone of `value` on every application.
    pub fn constant(value: R) -> Self {
        Self::from_fn(move || Ok(value.clone()))
    }
}

static_assertions::assert_impl_all!(Function0<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function1<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function5<u8, u16, u32, u64, String, bool>: Send, Sync, Clone);
