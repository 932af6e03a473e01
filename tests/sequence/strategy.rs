use sequence_rail::sequence::{RecursionBudget, Strategy};
use sequence_rail::{Outcome, StackOverrun};

use crate::common::{with_failure_at, Probe};

#[test]
fn names_and_display() {
    let names: Vec<String> = Strategy::all().iter().map(ToString::to_string).collect();
    assert_eq!(names, ["fold", "lazy", "stepwise", "recursive(limit=1024)"]);
    assert_eq!(Strategy::Recursive(RecursionBudget::new()).name(), "recursive");
}

#[test]
fn only_recursive_is_unsafe() {
    assert!(Strategy::STACK_SAFE.iter().all(Strategy::is_stack_safe));
    assert!(!Strategy::Recursive(RecursionBudget::default()).is_stack_safe());
}

#[test]
fn every_strategy_reports_the_same_outcome() {
    let scenarios = [
        vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)],
        vec![Outcome::success(1), Outcome::failure("bad"), Outcome::success(3)],
        vec![],
        vec![Outcome::failure("first"), Outcome::failure("second")],
    ];
    let expected = [
        Outcome::Success(vec![1, 2, 3]),
        Outcome::Failure("bad"),
        Outcome::Success(vec![]),
        Outcome::Failure("first"),
    ];

    for strategy in Strategy::all() {
        for (units, expected) in scenarios.iter().zip(&expected) {
            assert_eq!(strategy.run(units.clone()).as_ref(), Ok(expected), "{strategy}");
        }
    }
}

#[test]
fn every_strategy_invokes_the_same_prefix() {
    for strategy in Strategy::all() {
        let probe = Probe::new();
        let outcome = strategy.run(probe.units(&with_failure_at(40, 17)));

        assert_eq!(outcome, Ok(Outcome::Failure("unit 17 failed".to_string())), "{strategy}");
        assert_eq!(probe.started(), (0..=17).collect::<Vec<_>>(), "{strategy}");
    }
}

#[test]
fn stack_safe_strategies_handle_hundred_thousand_units() {
    for strategy in Strategy::STACK_SAFE {
        let probe = Probe::new();
        let outcome = strategy.run(probe.units(&with_failure_at(100_000, 50_000)));

        assert_eq!(outcome, Ok(Outcome::Failure("unit 50000 failed".to_string())), "{strategy}");
        assert_eq!(probe.calls(), 50_001, "{strategy}");

        let values = strategy
            .run((0..100_000).map(Outcome::<u32, String>::success))
            .expect("stack-safe strategies never overrun");
        assert_eq!(values.map(|v| v.len()), Outcome::Success(100_000), "{strategy}");
    }
}

#[test]
fn huge_size_hint_with_early_failure() {
    for strategy in Strategy::all() {
        let units = (0..usize::MAX).map(|i| {
            move || {
                if i == 3 {
                    Outcome::failure("bad")
                } else {
                    Outcome::success(i)
                }
            }
        });
        assert_eq!(strategy.run(units), Ok(Outcome::Failure("bad")), "{strategy}");
    }
}

#[test]
fn recursive_strategy_overruns_on_hundred_thousand_units() {
    let strategy = Strategy::Recursive(RecursionBudget::default());
    let outcome = strategy.run((0..100_000).map(Outcome::<u32, String>::success));
    assert_eq!(outcome, Err(StackOverrun::new(1_024, 1_024)));
}
