//! Currying: fixing parameters to obtain a function of lower arity.
//!
//! `curry` fixes the last parameter, `curry2` the last two, and so on up to
//! `curryN`, which fixes all of them and yields a [`Function0`]. Fixing always
//! proceeds from the end so that the curried function still consumes the
//! leading parameters in their original order. `curry_first` fixes the
//! leading parameter instead.
//!
//! Fixed values are cloned on each application, so they must be `Clone`.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function3;
//!
//! let volume = Function3::total(|width: u32, height: u32, depth: u32| width * height * depth);
//!
//! assert_eq!(volume.curry(4).apply(2, 3).ok(), Some(24));
//! assert_eq!(volume.curry2(3, 4).apply(2).ok(), Some(24));
//! assert_eq!(volume.curry3(2, 3, 4).apply().ok(), Some(24));
//! assert_eq!(volume.curry_first(2).apply(3, 4).ok(), Some(24));
//! ```

use super::arity::{Function0, Function1, Function2, Function3, Function4, Function5};

macro_rules! impl_curry {
    (
        $Adapter:ident [$($P:ident),*] {
            $(
                $method:ident => $Lower:ident [$($K:ident $k:ident),*] fixing [$($F:ident $f:ident),*];
            )*
        }
        $(first $First:ident $first:ident => $LowerFirst:ident [$($Rest:ident $rest:ident),*];)?
    ) => {
        impl<$($P: 'static,)* R: 'static> $Adapter<$($P,)* R> {
            $(
                #[doc = concat!(
                    "Fixes the trailing parameters (",
                    stringify!($($f),*),
                    "), returning a `",
                    stringify!($Lower),
                    "` over the remaining ones."
                )]
                pub fn $method(&self, $($f: $F),*) -> $Lower<$($K,)* R>
                where
                    $($F: Clone + Send + Sync,)*
                {
                    let function = self.clone();
                    $Lower::from_fn(move |$($k: $K),*| function.apply($($k,)* $($f.clone()),*))
                }
            )*

            $(
                /// Fixes the leading parameter, returning a function over the
                /// remaining ones.
                pub fn curry_first(&self, $first: $First) -> $LowerFirst<$($Rest,)* R>
                where
                    $First: Clone + Send + Sync,
                {
                    let function = self.clone();
                    $LowerFirst::from_fn(move |$($rest: $Rest),*| function.apply($first.clone(), $($rest),*))
                }
            )?
        }
    };
}

impl_curry! {
    Function1 [P1] {
        curry => Function0 [] fixing [P1 p1];
    }
}

impl_curry! {
    Function2 [P1, P2] {
        curry => Function1 [P1 p1] fixing [P2 p2];
        curry2 => Function0 [] fixing [P1 p1, P2 p2];
    }
    first P1 p1 => Function1 [P2 p2];
}

impl_curry! {
    Function3 [P1, P2, P3] {
        curry => Function2 [P1 p1, P2 p2] fixing [P3 p3];
        curry2 => Function1 [P1 p1] fixing [P2 p2, P3 p3];
        curry3 => Function0 [] fixing [P1 p1, P2 p2, P3 p3];
    }
    first P1 p1 => Function2 [P2 p2, P3 p3];
}

impl_curry! {
    Function4 [P1, P2, P3, P4] {
        curry => Function3 [P1 p1, P2 p2, P3 p3] fixing [P4 p4];
        curry2 => Function2 [P1 p1, P2 p2] fixing [P3 p3, P4 p4];
        curry3 => Function1 [P1 p1] fixing [P2 p2, P3 p3, P4 p4];
        curry4 => Function0 [] fixing [P1 p1, P2 p2, P3 p3, P4 p4];
    }
    first P1 p1 => Function3 [P2 p2, P3 p3, P4 p4];
}

impl_curry! {
    Function5 [P1, P2, P3, P4, P5] {
        curry => Function4 [P1 p1, P2 p2, P3 p3, P4 p4] fixing [P5 p5];
        curry2 => Function3 [P1 p1, P2 p2, P3 p3] fixing [P4 p4, P5 p5];
        curry3 => Function2 [P1 p1, P2 p2] fixing [P3 p3, P4 p4, P5 p5];
        curry4 => Function1 [P1 p1] fixing [P2 p2, P3 p3, P4 p4, P5 p5];
        curry5 => Function0 [] fixing [P1 p1, P2 p2, P3 p3, P4 p4, P5 p5];
    }
    first P1 p1 => Function4 [P2 p2, P3 p3, P4 p4, P5 p5];
}
