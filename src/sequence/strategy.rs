use alloc::vec::Vec;
use core::fmt;

use crate::error::StackOverrun;
use crate::outcome::Outcome;
use crate::sequence::{
    sequence, sequence_lazy, sequence_recursive, sequence_stepwise, RecursionBudget,
};
use crate::traits::FallibleUnit;

/// Every way this crate can sequence units.
///
/// All strategies compute the same outcome for the same input. They differ in
/// how they get there, and only [`Recursive`](Strategy::Recursive) can run out
/// of stack.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::Strategy;
/// use sequence_rail::Outcome;
///
/// for strategy in Strategy::all() {
///     let units = vec![Outcome::<i32, &str>::success(1), Outcome::success(2)];
///     assert_eq!(strategy.run(units), Ok(Outcome::Success(vec![1, 2])), "{strategy}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Eager fold into a pre-sized buffer.
    Fold,
    /// Streaming collection through an [`OutcomeShunt`](crate::sequence::OutcomeShunt).
    Lazy,
    /// Continuation resumed one unit at a time.
    Stepwise,
    /// One nested bind per unit, bounded by a frame budget. Reference only.
    Recursive(RecursionBudget),
}

impl Strategy {
    /// The strategies whose stack depth is independent of input length.
    pub const STACK_SAFE: [Strategy; 3] = [Strategy::Fold, Strategy::Lazy, Strategy::Stepwise];

    /// Every strategy, the recursive one with its default budget.
    pub fn all() -> [Strategy; 4] {
        [
            Strategy::Fold,
            Strategy::Lazy,
            Strategy::Stepwise,
            Strategy::Recursive(RecursionBudget::default()),
        ]
    }

    /// Returns `true` unless this is [`Recursive`](Strategy::Recursive).
    #[must_use]
    #[inline]
    pub fn is_stack_safe(&self) -> bool {
        !matches!(self, Strategy::Recursive(_))
    }

    /// Short name, also used as the benchmark id.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Fold => "fold",
            Strategy::Lazy => "lazy",
            Strategy::Stepwise => "stepwise",
            Strategy::Recursive(_) => "recursive",
        }
    }

    /// Sequences `units` with this strategy.
    ///
    /// Stack-safe strategies always return `Ok`.
    pub fn run<I, U, T, E>(self, units: I) -> Result<Outcome<Vec<T>, E>, StackOverrun>
    where
        I: IntoIterator<Item = U>,
        U: FallibleUnit<T, E>,
    {
        match self {
            Strategy::Fold => Ok(sequence(units)),
            Strategy::Lazy => Ok(sequence_lazy(units)),
            Strategy::Stepwise => Ok(sequence_stepwise(units)),
            Strategy::Recursive(budget) => sequence_recursive(units, budget),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive(budget) => write!(f, "recursive(limit={})", budget.limit()),
            other => f.write_str(other.name()),
        }
    }
}
