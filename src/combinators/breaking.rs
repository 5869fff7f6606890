//! Visitors that end a traversal early.

use std::any::Any;

use crate::function::{
    Function2, Function3, Function4, Function5, Outcome, PartialFn1, PartialFn2, PartialFn3,
    PartialFn4, PartialFn5, break_out,
};
use crate::specialized::{IndexedVisitor, Visitor};

/// Returns a visitor raising a short-circuit carrying `payload` as soon as
/// `predicate` accepts a visited value.
///
/// ```rust
/// use fnkit::combinators::break_if;
///
/// let stop_at_negative = break_if(|value: i32| Ok(value < 0), "negative");
/// assert!(stop_at_negative.visit(1).is_ok());
///
/// let signal = stop_at_negative.visit(-1).unwrap_err();
/// let short_circuit = signal.into_short_circuit().unwrap();
/// assert_eq!(short_circuit.payload::<&str>(), Some(&"negative"));
/// ```
pub fn break_if<T, P, G>(predicate: G, payload: P) -> Visitor<T>
where
    T: 'static,
    P: Any + Clone + Send + Sync,
    G: PartialFn1<T, bool> + Send + Sync + 'static,
{
    Visitor::new(move |value: T| -> Outcome<()> {
        if predicate.apply(value)? {
            break_out(payload.clone())
        } else {
            Ok(())
        }
    })
}

/// Returns a visitor raising a short-circuit carrying the visited value
/// itself as soon as `predicate` accepts it.
pub fn break_if_true<T, G>(predicate: G) -> Visitor<T>
where
    T: Any + Clone + Send + Sync,
    G: PartialFn1<T, bool> + Send + Sync + 'static,
{
    Visitor::new(move |value: T| -> Outcome<()> {
        if predicate.apply(value.clone())? {
            break_out(value)
        } else {
            Ok(())
        }
    })
}

/// Generates the breaking visitors for functions of two or more parameters.
///
/// With no payload of their own these raise a short-circuit carrying `true`.
macro_rules! define_break_if {
    ($(
        $break_if:ident, $break_if_true:ident, $Trait:ident, $Adapter:ident, $arity:literal, [$($P:ident $p:ident),+];
    )*) => {$(
        #[doc = concat!(
            "Returns a ", $arity, "-parameter visitor raising a short-circuit carrying `payload` ",
            "as soon as `predicate` accepts its arguments."
        )]
        pub fn $break_if<$($P,)+ X, G>(predicate: G, payload: X) -> $Adapter<$($P,)+ ()>
        where
            $($P: 'static,)+
            X: Any + Clone + Send + Sync,
            G: $Trait<$($P,)+ bool> + Send + Sync + 'static,
        {
            $Adapter::from_fn(move |$($p: $P),+| -> Outcome<()> {
                if predicate.apply($($p),+)? {
                    break_out(payload.clone())
                } else {
                    Ok(())
                }
            })
        }

        #[doc = concat!(
            "Returns a ", $arity, "-parameter visitor raising a short-circuit carrying `true` ",
            "as soon as `predicate` accepts its arguments."
        )]
        pub fn $break_if_true<$($P,)+ G>(predicate: G) -> $Adapter<$($P,)+ ()>
        where
            $($P: 'static,)+
            G: $Trait<$($P,)+ bool> + Send + Sync + 'static,
        {
            $break_if(predicate, true)
        }
    )*};
}

define_break_if! {
    break_if2, break_if_true2, PartialFn2, Function2, "2", [P1 p1, P2 p2];
    break_if3, break_if_true3, PartialFn3, Function3, "3", [P1 p1, P2 p2, P3 p3];
    break_if4, break_if_true4, PartialFn4, Function4, "4", [P1 p1, P2 p2, P3 p3, P4 p4];
    break_if5, break_if_true5, PartialFn5, Function5, "5", [P1 p1, P2 p2, P3 p3, P4 p4, P5 p5];
}

/// Returns an indexed visitor raising a short-circuit carrying `payload` as
/// soon as `predicate` accepts a key and its value.
///
/// ```rust
/// use fnkit::combinators::break_if_indexed;
/// use fnkit::traverse::for_each_indexed;
///
/// let stopped = for_each_indexed(
///     ["a", "bb", "ccc"],
///     break_if_indexed(|index: usize, text: &str| Ok(index + text.len() > 3), "too long"),
/// )
/// .unwrap()
/// .and_then(|short_circuit| short_circuit.into_payload::<&str>().ok());
/// assert_eq!(stopped, Some("too long"));
/// ```
pub fn break_if_indexed<K, T, X, G>(predicate: G, payload: X) -> IndexedVisitor<K, T>
where
    K: 'static,
    T: 'static,
    X: Any + Clone + Send + Sync,
    G: PartialFn2<K, T, bool> + Send + Sync + 'static,
{
    IndexedVisitor::new(break_if2(predicate, payload))
}

/// Returns an indexed visitor raising a short-circuit carrying the visited
/// key as soon as `predicate` accepts a key and its value.
pub fn break_if_true_indexed<K, T, G>(predicate: G) -> IndexedVisitor<K, T>
where
    K: Any + Clone + Send + Sync,
    T: 'static,
    G: PartialFn2<K, T, bool> + Send + Sync + 'static,
{
    IndexedVisitor::new(move |key: K, value: T| -> Outcome<()> {
        if predicate.apply(key.clone(), value)? {
            break_out(key)
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn break_if_true_carries_the_element() {
        let first_long_word = break_if_true(|word: String| Ok(word.len() > 3));
        assert!(first_long_word.visit("cat".to_string()).is_ok());

        let payload = first_long_word
            .visit("horse".to_string())
            .unwrap_err()
            .into_short_circuit()
            .ok()
            .and_then(|short_circuit| short_circuit.into_payload::<String>().ok());
        assert_eq!(payload.as_deref(), Some("horse"));
    }

    fn payload_of<P: Any>(outcome: Outcome<()>) -> Option<P> {
        outcome
            .unwrap_err()
            .into_short_circuit()
            .ok()
            .and_then(|short_circuit| short_circuit.into_payload::<P>().ok())
    }

    #[rstest]
    fn break_if2_carries_the_payload() {
        let same = break_if2(|left: i32, right: i32| Ok(left == right), "same");
        assert!(same.apply(1, 2).is_ok());
        assert_eq!(payload_of::<&'static str>(same.apply(2, 2)), Some("same"));
    }

    #[rstest]
    #[case(break_if_true3(|a: u8, b: u8, c: u8| Ok(a + b == c)).apply(1, 2, 3))]
    #[case(break_if_true4(|a: u8, b: u8, c: u8, d: u8| Ok(a + b + c == d)).apply(1, 1, 1, 3))]
    #[case(break_if_true5(|a: u8, b: u8, c: u8, d: u8, e: u8| Ok(a + b + c + d == e)).apply(1, 1, 1, 1, 4))]
    fn break_if_true_at_higher_arities_carries_true(#[case] outcome: Outcome<()>) {
        assert_eq!(payload_of::<bool>(outcome), Some(true));
    }

    #[rstest]
    fn higher_arities_pass_when_the_predicate_rejects() {
        assert!(break_if3(|_: u8, _: u8, _: u8| Ok(false), ()).apply(1, 2, 3).is_ok());
        assert!(break_if_true2(|_: u8, _: u8| Ok(false)).apply(1, 2).is_ok());
    }

    #[rstest]
    fn break_if_true_indexed_carries_the_key() {
        let first_blank = break_if_true_indexed(|_: usize, text: &'static str| Ok(text.is_empty()));
        assert!(first_blank.visit(0, "x").is_ok());
        assert_eq!(payload_of::<usize>(first_blank.visit(4, "")), Some(4));
    }

    #[rstest]
    fn inapplicable_predicate_does_not_break() {
        let guarded = break_if(crate::function::Function1::<u8, bool>::undefined(), ());
        assert!(guarded.visit(0).is_ok());
    }
}
