#![cfg(all(feature = "traverse", feature = "combinators"))]
//! End-to-end scenarios combining functions, predicates, the optional
//! container and the traversal layer.

use std::sync::{Arc, Mutex};

use fnkit::combinators::{break_if, break_if_true, comparing, equal_to, natural_order};
use fnkit::function::{Failure, Function2, Outcome, Signal, break_out};
use fnkit::optional::Optional;
use fnkit::specialized::{IndexedVisitor, Predicate, Visitor};
use fnkit::traverse::{
    all_match, any_match, filter, find_first, fold, for_each, for_each_indexed, none_match, sorted,
};
use rstest::{fixture, rstest};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn is_even() -> Predicate<i32> {
    Predicate::from_fn(|value: i32| value % 2 == 0)
}

// =============================================================================
// Finding
// =============================================================================

#[rstest]
fn find_first_even(is_even: Predicate<i32>) {
    assert_eq!(find_first([1, 3, 4, 5], is_even.clone()).ok(), Some(Optional::some(4)));
    assert_eq!(find_first([1, 3, 5], is_even).ok(), Some(Optional::none()));
}

#[rstest]
fn found_values_feed_optional_pipelines(is_even: Predicate<i32>) {
    let description = find_first([7, 9, 10], is_even)
        .and_then(|found| found.map(|value: i32| Ok(format!("found {value}"))))
        .map(|found| found.or_else(String::from("nothing")));
    assert_eq!(description.ok().as_deref(), Some("found 10"));
}

#[rstest]
fn matching_family(is_even: Predicate<i32>) {
    let numbers = [2, 4, 5];
    assert_eq!(filter(numbers, is_even.clone()).ok(), Some(vec![2, 4]));
    assert_eq!(any_match(numbers, is_even.clone()).ok(), Some(true));
    assert_eq!(all_match(numbers, is_even.clone()).ok(), Some(false));
    assert_eq!(none_match(numbers, is_even).ok(), Some(false));
}

// =============================================================================
// Visiting
// =============================================================================

#[rstest]
fn for_each_stops_at_the_break_payload() {
    init_tracing();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let record = Visitor::new(move |word: &'static str| -> Outcome<()> {
        sink.lock().map_err(|_| Failure::message("poisoned"))?.push(word);
        Ok(())
    });
    let stop = break_if(equal_to("stop"), "stopped early");
    let visitor = Visitor::new(move |word: &'static str| -> Outcome<()> {
        stop.visit(word)?;
        record.visit(word)
    });

    let interrupted = for_each(["go", "on", "stop", "never"], visitor).unwrap();
    let payload = interrupted.and_then(|short_circuit| short_circuit.into_payload::<&str>().ok());

    assert_eq!(payload, Some("stopped early"));
    assert_eq!(*seen.lock().unwrap(), vec!["go", "on"]);
}

#[rstest]
fn for_each_runs_to_completion_without_a_break() {
    let never = break_if_true(|value: u8| Ok(value > 100));
    assert!(for_each(0..=100, never).unwrap().is_none());
}

#[rstest]
fn indexed_visit_reports_positions() {
    let positions = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&positions);
    let visitor = IndexedVisitor::guarded_by_index(
        |index: usize| Ok(index % 2 == 0),
        move |index: usize, value: char| -> Outcome<()> {
            sink.lock()
                .map_err(|_| Failure::message("poisoned"))?
                .push((index, value));
            Ok(())
        },
    );
    assert!(for_each_indexed("abcde".chars(), visitor).unwrap().is_none());
    assert_eq!(*positions.lock().unwrap(), vec![(0, 'a'), (2, 'c'), (4, 'e')]);
}

// =============================================================================
// Folding
// =============================================================================

#[rstest]
fn fold_with_early_exit() {
    init_tracing();
    let first_over_limit = Function2::from_fn(|total: i32, value: i32| {
        let next = total + value;
        if next > 100 { break_out(next) } else { Ok(next) }
    });
    assert_eq!(fold(1..=1000, 0, first_over_limit).ok(), Some(105));
}

#[rstest]
fn fold_propagates_failures() {
    let reducer = Function2::from_fn(|total: u32, value: u32| {
        total
            .checked_add(value)
            .ok_or_else(|| Signal::from(Failure::message("overflow")))
    });
    assert!(fold([u32::MAX, 1], 0, reducer).unwrap_err().is_failure());
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
#[case(vec!["ccc", "a", "bb"], vec!["a", "bb", "ccc"])]
#[case(vec!["xy", "ab", "z"], vec!["z", "ab", "xy"])]
fn sorted_by_length_then_text(#[case] words: Vec<&'static str>, #[case] expected: Vec<&'static str>) {
    let comparator = comparing(|word: &'static str| Ok(word.len())).then_comparing(natural_order());
    assert_eq!(sorted(words, comparator).ok(), Some(expected));
}

#[rstest]
fn curry_then_and_then() {
    let add = Function2::total(|left: i32, right: i32| left + right);
    let add_ten_and_double = add.curry(10).and_then(|sum: i32| Ok(sum * 2));
    assert_eq!(add_ten_and_double.apply(5).ok(), Some(30));
}
