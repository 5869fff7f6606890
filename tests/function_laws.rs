//! Property-based tests for the function adapter laws.
//!
//! ## Fallback Laws
//! - `f.or_else(g)(x) == f(x)` where `f` is defined at `x`
//! - `f.or_else(g)(x) == g(x)` where `f` is not applicable at `x`
//!
//! ## Lift Laws
//! - `f.lift()(x) == Present(f(x))` where `f` is defined at `x`
//! - `f.lift()(x) == Absent` where `f` is not applicable at `x`
//!
//! ## Curry Laws
//! - `f.curry(b)(a) == f(a, b)`
//! - `f.curry_first(a)(b) == f(a, b)`
//!
//! ## Composition Laws
//! - `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))`
//! - `f.compose(g) == g.and_then(f)`

use fnkit::function::{Function1, Function2, Function3, Outcome, Signal};
use fnkit::optional::Optional;
use proptest::prelude::*;

fn defined_on_non_negative() -> Function1<i64, i64> {
    Function1::from_fn(|value: i64| -> Outcome<i64> {
        if value >= 0 {
            Ok(value.wrapping_mul(3))
        } else {
            Err(Signal::NotApplicable)
        }
    })
}

fn negate_value() -> Function1<i64, i64> {
    Function1::total(|value: i64| value.wrapping_neg())
}

// =============================================================================
// Fallback Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_or_else_prefers_the_primary(x in any::<i64>()) {
        let primary = defined_on_non_negative();
        let combined = primary.or_else(negate_value());

        let expected = match primary.apply(x) {
            Ok(value) => value,
            Err(_) => negate_value().apply(x).unwrap(),
        };
        prop_assert_eq!(combined.apply(x).ok(), Some(expected));
    }

    #[test]
    fn prop_apply_or_else_matches_or_else(x in any::<i64>()) {
        let primary = defined_on_non_negative();
        let fallback = negate_value();
        prop_assert_eq!(
            primary.apply_or_else(x, &fallback).ok(),
            primary.or_else(fallback.clone()).apply(x).ok()
        );
    }
}

// =============================================================================
// Lift Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_lift_wraps_defined_results(x in any::<i64>()) {
        let function = defined_on_non_negative();
        let lifted = function.lift().apply(x).unwrap();
        match function.apply(x) {
            Ok(value) => prop_assert_eq!(lifted, Optional::some(value)),
            Err(signal) => {
                prop_assert!(signal.is_not_applicable());
                prop_assert_eq!(lifted, Optional::none());
            }
        }
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_fixes_the_last_parameter(a in any::<i32>(), b in any::<i32>()) {
        let subtract = Function2::total(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(subtract.curry(b).apply(a).ok(), subtract.apply(a, b).ok());
    }

    #[test]
    fn prop_curry_first_fixes_the_first_parameter(a in any::<i32>(), b in any::<i32>()) {
        let subtract = Function2::total(|left: i32, right: i32| left.wrapping_sub(right));
        prop_assert_eq!(subtract.curry_first(a).apply(b).ok(), subtract.apply(a, b).ok());
    }

    #[test]
    fn prop_curry_suffixes_agree(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let combine = Function3::total(|a: u8, b: u8, c: u8| (u32::from(a) << 16) | (u32::from(b) << 8) | u32::from(c));
        let expected = combine.apply(a, b, c).ok();
        prop_assert_eq!(combine.curry(c).apply(a, b).ok(), expected);
        prop_assert_eq!(combine.curry2(b, c).apply(a).ok(), expected);
        prop_assert_eq!(combine.curry3(a, b, c).apply().ok(), expected);
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_and_then_is_associative(x in any::<i64>()) {
        let f = Function1::total(|value: i64| value.wrapping_add(1));
        let g = Function1::total(|value: i64| value.wrapping_mul(2));
        let h = Function1::total(|value: i64| value.wrapping_sub(7));

        let left = f.and_then(g.clone()).and_then(h.clone());
        let right = f.and_then(g.and_then(h));
        prop_assert_eq!(left.apply(x).ok(), right.apply(x).ok());
    }

    #[test]
    fn prop_compose_is_and_then_reversed(x in any::<i64>()) {
        let f = negate_value();
        let g = defined_on_non_negative();
        let composed = f.compose(g.clone()).apply(x);
        let chained = g.and_then(f).apply(x);
        prop_assert_eq!(composed.is_ok(), chained.is_ok());
        prop_assert_eq!(composed.ok(), chained.ok());
    }

    #[test]
    fn prop_map_agrees_with_and_then(x in any::<i64>()) {
        let function = defined_on_non_negative();
        let mapped = function.map(|value: i64| value.to_string());
        let chained = function.and_then(|value: i64| Ok(value.to_string()));
        prop_assert_eq!(mapped.apply(x).ok(), chained.apply(x).ok());
    }
}

// =============================================================================
// Signal propagation
// =============================================================================

proptest! {
    #[test]
    fn prop_short_circuit_passes_every_combinator(x in any::<i64>()) {
        let breaking = Function1::from_fn(|value: i64| -> Outcome<i64> { Err(Signal::short_circuit(value)) });
        let wrapped = breaking
            .or_else(negate_value())
            .and_then(negate_value())
            .compose(negate_value())
            .lift();

        let signal = wrapped.apply(x).unwrap_err();
        let payload = signal.into_short_circuit().ok().and_then(|sc| sc.into_payload::<i64>().ok());
        prop_assert_eq!(payload, Some(x.wrapping_neg()));
    }
}

#[test]
fn curry_then_and_then_end_to_end() {
    let add = Function2::total(|left: i32, right: i32| left + right);
    assert_eq!(add.curry(10).and_then(|sum: i32| Ok(sum * 2)).apply(5).ok(), Some(30));
}
