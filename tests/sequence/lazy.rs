use std::cell::Cell;

use sequence_rail::sequence::{process_outcomes, sequence_lazy, traverse};
use sequence_rail::{FallibleUnit, Outcome};

use crate::common::{with_failure_at, Probe};

#[test]
fn lazy_matches_eager_on_success() {
    let units = (1..=5).map(|n| move || Outcome::<i32, &str>::success(n * n));
    assert_eq!(sequence_lazy(units), Outcome::Success(vec![1, 4, 9, 16, 25]));
}

#[test]
fn lazy_stops_invoking_after_failure() {
    let probe = Probe::new();
    let units = probe.units(&with_failure_at(10, 3));

    assert_eq!(sequence_lazy(units), Outcome::Failure("unit 3 failed".to_string()));
    assert_eq!(probe.started(), vec![0, 1, 2, 3]);
}

#[test]
fn producer_is_not_advanced_past_failure() {
    let produced = Cell::new(0);
    let units = (0..).map(|i| {
        produced.set(produced.get() + 1);
        move || {
            if i < 4 {
                Outcome::success(i)
            } else {
                Outcome::failure(i)
            }
        }
    });

    assert_eq!(sequence_lazy(units), Outcome::<Vec<i32>, i32>::Failure(4));
    assert_eq!(produced.get(), 5);
}

#[test]
fn process_outcomes_streams_without_buffer() {
    let probe = Probe::new();
    let outcomes = probe
        .units(&(0..10).map(Outcome::<u32, String>::success).collect::<Vec<_>>())
        .into_iter()
        .map(|unit| unit.run());

    let even_sum = process_outcomes(outcomes, |values| values.filter(|v| v % 2 == 0).sum::<u32>());
    assert_eq!(even_sum, Outcome::Success(20));
    assert_eq!(probe.calls(), 10);
}

#[test]
fn process_outcomes_failure_replaces_processor_result() {
    let outcomes = with_failure_at(8, 5).into_iter();
    let seen = process_outcomes(outcomes, |values| values.count());
    assert_eq!(seen, Outcome::Failure("unit 5 failed".to_string()));
}

#[test]
fn processor_may_stop_early() {
    let pulled = Cell::new(0);
    let outcomes = with_failure_at(8, 5)
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

    let first_two = process_outcomes(outcomes, |values| values.take(2).collect::<Vec<_>>());
    assert_eq!(first_two, Outcome::Success(vec![0, 1]));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn traverse_applies_function_in_order() {
    let calls = Cell::new(0);
    let lookup = |id: u32| {
        calls.set(calls.get() + 1);
        if id % 17 == 0 {
            Outcome::failure(format!("item {id} missing"))
        } else {
            Outcome::success(id * 2)
        }
    };

    assert_eq!(traverse(1..=3, lookup), Outcome::Success(vec![2, 4, 6]));
    assert_eq!(traverse(10..40, lookup), Outcome::Failure("item 17 missing".to_string()));
    assert_eq!(calls.get(), 3 + 8);
}
