use alloc::vec::Vec;

use crate::error::StackOverrun;
use crate::outcome::Outcome;
use crate::sequence::observe;
use crate::traits::FallibleUnit;

/// Frame budget for [`sequence_recursive`].
///
/// The recursive reference strategy spends one call frame per unit. The budget
/// turns what would otherwise be a fatal stack overflow into a reportable
/// [`StackOverrun`].
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::RecursionBudget;
///
/// let budget = RecursionBudget::new().with_limit(256);
/// assert_eq!(budget.limit(), 256);
/// assert_eq!(RecursionBudget::default().limit(), RecursionBudget::DEFAULT_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecursionBudget {
    limit: usize,
}

impl RecursionBudget {
    /// Frames allowed by default. Comfortably inside a 2 MiB thread stack.
    pub const DEFAULT_LIMIT: usize = 1_024;

    /// Budget of [`DEFAULT_LIMIT`](Self::DEFAULT_LIMIT) frames.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum recursion depth.
    #[inline]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Maximum recursion depth.
    #[must_use]
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for RecursionBudget {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Naive recursive binding: one nested `flat_map` per unit.
///
/// Kept as the reference the iterative strategies are measured and checked
/// against. It computes the same outcome as [`sequence`](crate::sequence::sequence)
/// whenever the input fits the budget, but its stack depth grows linearly with
/// the number of units. Once the depth reaches `budget.limit()` it stops
/// without pulling another unit from `units` and reports [`StackOverrun`],
/// unless the source's size hint already shows it exhausted. Units that ran
/// before that point are not rolled back.
///
/// Not for production use.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::{sequence_recursive, RecursionBudget};
/// use sequence_rail::Outcome;
///
/// let small = (0..10).map(Outcome::<i32, &str>::success);
/// let outcome = sequence_recursive(small, RecursionBudget::default());
/// assert_eq!(outcome, Ok(Outcome::Success((0..10).collect::<Vec<_>>())));
///
/// let large = (0..10_000).map(Outcome::<i32, &str>::success);
/// let overrun = sequence_recursive(large, RecursionBudget::new().with_limit(100)).unwrap_err();
/// assert_eq!(overrun.depth(), 100);
/// ```
pub fn sequence_recursive<I, U, T, E>(
    units: I,
    budget: RecursionBudget,
) -> Result<Outcome<Vec<T>, E>, StackOverrun>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    let mut units = units.into_iter();
    bind(&mut units, Vec::new(), 0, budget.limit())
}

fn bind<I, U, T, E>(
    units: &mut I,
    prefix: Vec<T>,
    depth: usize,
    limit: usize,
) -> Result<Outcome<Vec<T>, E>, StackOverrun>
where
    I: Iterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    // A source that reports itself exhausted finishes even at the limit.
    if depth >= limit && units.size_hint().1 != Some(0) {
        observe::overrun(depth);
        return Err(StackOverrun::new(depth, limit));
    }
    let Some(unit) = units.next() else {
        observe::completed(prefix.len());
        return Ok(Outcome::Success(prefix));
    };
    if depth >= limit {
        // The size hint was wrong; the pulled unit is dropped without running.
        observe::overrun(depth);
        return Err(StackOverrun::new(depth, limit));
    }

    let ran = unit.run();
    if ran.is_failure() {
        observe::short_circuited(depth);
    }

    let mut overrun = None;
    let outcome = ran.flat_map(|value| {
        let mut prefix = prefix;
        prefix.push(value);
        // The rest of the sequence is bound inside this closure's frame.
        bind(units, prefix, depth + 1, limit).unwrap_or_else(|err| {
            overrun = Some(err);
            Outcome::Success(Vec::new())
        })
    });

    match overrun {
        Some(err) => Err(err),
        None => Ok(outcome),
    }
}
