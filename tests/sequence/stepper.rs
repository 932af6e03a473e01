use sequence_rail::sequence::{sequence_stepwise, Step, Stepper};
use sequence_rail::Outcome;

use crate::common::{with_failure_at, Probe};

#[test]
fn each_resume_runs_exactly_one_unit() {
    let probe = Probe::new();
    let stepper = Stepper::new(probe.units(&[Outcome::<u8, String>::success(1), Outcome::success(2)]));
    assert_eq!(probe.calls(), 0);

    let Step::Suspended(stepper) = stepper.resume() else {
        panic!("expected suspension after first unit");
    };
    assert_eq!(probe.calls(), 1);
    assert_eq!(stepper.completed(), 1);

    let Step::Suspended(stepper) = stepper.resume() else {
        panic!("expected suspension after second unit");
    };
    assert_eq!(probe.calls(), 2);

    match stepper.resume() {
        Step::Done(outcome) => assert_eq!(outcome, Outcome::Success(vec![1, 2])),
        Step::Suspended(_) => panic!("expected completion"),
    }
    assert_eq!(probe.calls(), 2);
}

#[test]
fn failure_finishes_immediately() {
    let probe = Probe::new();
    let stepper = Stepper::new(probe.units(&with_failure_at(4, 0)));

    let step = stepper.resume();
    assert!(step.is_done());
    match step {
        Step::Done(outcome) => assert_eq!(outcome, Outcome::Failure("unit 0 failed".to_string())),
        Step::Suspended(_) => unreachable!(),
    }
    assert_eq!(probe.calls(), 1);
}

#[test]
fn dropping_a_suspended_stepper_starts_nothing_more() {
    let probe = Probe::new();
    let stepper = Stepper::new(probe.units(&with_failure_at(5, 4)));

    let Step::Suspended(stepper) = stepper.resume() else {
        panic!("expected suspension");
    };
    drop(stepper);
    assert_eq!(probe.started(), vec![0]);
}

#[test]
fn stepwise_handles_large_inputs() {
    let probe = Probe::new();
    let units = probe.units(&with_failure_at(100_000, 99_999));

    assert_eq!(sequence_stepwise(units), Outcome::Failure("unit 99999 failed".to_string()));
    assert_eq!(probe.calls(), 100_000);
}

#[test]
fn empty_stepper_is_done_on_first_resume() {
    let stepper = Stepper::new(Vec::<Outcome<u8, ()>>::new());
    match stepper.resume() {
        Step::Done(outcome) => assert_eq!(outcome, Outcome::Success(vec![])),
        Step::Suspended(_) => panic!("nothing to run"),
    }
}
