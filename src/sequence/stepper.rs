use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::outcome::Outcome;
use crate::sequence::eager::presized;
use crate::sequence::observe;
use crate::traits::FallibleUnit;

/// Result of resuming a [`Stepper`] once.
#[must_use]
#[derive(Debug)]
pub enum Step<S, T, E> {
    /// One unit succeeded; resume the continuation to run the next one.
    Suspended(S),
    /// Sequencing finished, successfully or at the first failure.
    Done(Outcome<Vec<T>, E>),
}

impl<S, T, E> Step<S, T, E> {
    /// Returns `true` once sequencing has finished.
    #[must_use]
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Explicit sequential scheduler that runs one unit per resumption.
///
/// A `Stepper` is a continuation: [`resume`](Stepper::resume) consumes it,
/// invokes exactly one unit and hands back either the next continuation or the
/// final outcome. The caller decides when, and whether, to resume. Unit `k + 1`
/// is never started before unit `k` has produced its outcome, and dropping a
/// suspended stepper starts nothing further.
///
/// Because each step returns to the caller, driving a stepper to completion
/// never nests frames: the stack stays flat whatever the number of units.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::{Step, Stepper};
/// use sequence_rail::Outcome;
///
/// let units = [1, 2, 3].map(|n| move || Outcome::<i32, &str>::success(n));
/// let mut step = Stepper::new(units).resume();
/// let outcome = loop {
///     match step {
///         Step::Suspended(next) => step = next.resume(),
///         Step::Done(outcome) => break outcome,
///     }
/// };
/// assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
/// ```
#[must_use = "a stepper does nothing unless resumed"]
pub struct Stepper<I, T, E> {
    units: I,
    values: Vec<T>,
    _failure: PhantomData<fn() -> E>,
}

impl<I, U, T, E> Stepper<I, T, E>
where
    I: Iterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    /// Creates a stepper positioned before the first unit.
    pub fn new<S>(units: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let units = units.into_iter();
        let values = presized(units.size_hint());
        Self {
            units,
            values,
            _failure: PhantomData,
        }
    }

    /// Number of units that have succeeded so far.
    #[must_use]
    #[inline]
    pub fn completed(&self) -> usize {
        self.values.len()
    }

    /// Runs the next unit.
    pub fn resume(mut self) -> Step<Self, T, E> {
        let Some(unit) = self.units.next() else {
            observe::completed(self.values.len());
            return Step::Done(Outcome::Success(self.values));
        };

        match unit.run() {
            Outcome::Success(value) => {
                self.values.push(value);
                Step::Suspended(self)
            }
            Outcome::Failure(error) => {
                observe::short_circuited(self.values.len());
                Step::Done(Outcome::Failure(error))
            }
        }
    }

    /// Resumes until done.
    pub fn run_to_completion(self) -> Outcome<Vec<T>, E> {
        let mut step = self.resume();
        loop {
            match step {
                Step::Suspended(next) => step = next.resume(),
                Step::Done(outcome) => return outcome,
            }
        }
    }
}

/// Sequences `units` by driving a [`Stepper`] to completion.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::sequence_stepwise;
/// use sequence_rail::Outcome;
///
/// let units = vec![Outcome::success(1), Outcome::failure("bad"), Outcome::success(3)];
/// assert_eq!(sequence_stepwise(units), Outcome::<Vec<i32>, _>::Failure("bad"));
/// ```
pub fn sequence_stepwise<I, U, T, E>(units: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    Stepper::new(units).run_to_completion()
}
