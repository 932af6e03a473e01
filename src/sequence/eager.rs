use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::outcome::Outcome;
use crate::sequence::observe;
use crate::traits::FallibleUnit;

/// Most values reserved up front from a size hint. The buffer grows past this
/// as units succeed.
pub(crate) const MAX_PRESIZE: usize = 4_096;

/// Empty buffer sized from the hint's lower bound, capped at [`MAX_PRESIZE`].
#[inline]
pub(crate) fn presized<T>(size_hint: (usize, Option<usize>)) -> Vec<T> {
    Vec::with_capacity(size_hint.0.min(MAX_PRESIZE))
}

/// Runs every unit in order and collects their values, failing fast.
///
/// This is the eager fold: the accumulator is a buffer pre-sized from the
/// input's size hint (up to a fixed cap) and threaded through [`Iterator::try_fold`]. The first
/// `Failure` breaks the fold, so no later unit is invoked. Stack depth does not
/// depend on the number of units.
///
/// # Arguments
///
/// * `units` - Ordered unit computations
///
/// # Returns
///
/// * `Success(values)` in input order when every unit succeeds (empty for no units)
/// * `Failure(error)` of the first failing unit, verbatim
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::sequence;
/// use sequence_rail::Outcome;
///
/// let ids = [1, 2, 3];
/// let units = ids.map(|id| move || Outcome::<i32, &str>::success(id * 10));
/// assert_eq!(sequence(units), Outcome::Success(vec![10, 20, 30]));
///
/// let none: Vec<Outcome<i32, &str>> = Vec::new();
/// assert_eq!(sequence(none), Outcome::Success(vec![]));
/// ```
pub fn sequence<I, U, T, E>(units: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    let mut units = units.into_iter();
    let buffer = presized(units.size_hint());

    let folded = units.try_fold(buffer, |mut values, unit| match unit.run() {
        Outcome::Success(value) => {
            values.push(value);
            ControlFlow::Continue(values)
        }
        Outcome::Failure(error) => ControlFlow::Break((values.len(), error)),
    });

    match folded {
        ControlFlow::Continue(values) => {
            observe::completed(values.len());
            Outcome::Success(values)
        }
        ControlFlow::Break((index, error)) => {
            observe::short_circuited(index);
            Outcome::Failure(error)
        }
    }
}

/// [`sequence`] for units that return a standard [`Result`].
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::sequence_results;
///
/// let inputs = ["4", "x", "6"];
/// let parsed = sequence_results(inputs.map(|s| move || s.parse::<u8>()));
/// assert!(parsed.is_err());
/// ```
pub fn sequence_results<I, F, T, E>(units: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<T, E>,
{
    sequence(units.into_iter().map(|unit| move || Outcome::from(unit()))).into_result()
}
