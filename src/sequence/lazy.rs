use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::outcome::Outcome;
use crate::sequence::observe;
use crate::traits::FallibleUnit;

/// Iterator over the success values of a stream of outcomes.
///
/// Yields values until the first `Failure`, which it parks in the slot owned by
/// [`process_outcomes`] and then stops for good. The source is never pulled
/// past the failing item.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct OutcomeShunt<'a, I, E> {
    source: I,
    failure: &'a mut Option<E>,
    pulled: usize,
}

impl<I, T, E> Iterator for OutcomeShunt<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match self.source.next()? {
            Outcome::Success(value) => {
                self.pulled += 1;
                Some(value)
            }
            Outcome::Failure(error) => {
                observe::short_circuited(self.pulled);
                *self.failure = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, T, E> FusedIterator for OutcomeShunt<'_, I, E> where I: Iterator<Item = Outcome<T, E>> {}

/// Streams the success values of `outcomes` through `processor`, failing fast.
///
/// `processor` sees a plain iterator of values and can filter, fold or collect
/// them without an intermediate buffer. If a `Failure` shows up, iteration
/// stops there and the failure replaces whatever `processor` returned.
///
/// Outcomes are pulled on demand. When `outcomes` invokes a unit per item
/// (e.g. `units.into_iter().map(FallibleUnit::run)`), nothing after the first
/// failure is invoked, and nothing after the last item `processor` asked for
/// is invoked either.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::process_outcomes;
/// use sequence_rail::Outcome;
///
/// let lookups = (1..100).map(|id| {
///     Outcome::<_, &str>::success((id, if id % 17 == 0 { "bad" } else { "good" }))
/// });
/// let bad_ids: Outcome<Vec<i32>, &str> = process_outcomes(lookups, |items| {
///     items.filter(|(_, verdict)| *verdict == "bad").map(|(id, _)| id).collect()
/// });
/// assert_eq!(bad_ids, Outcome::Success(vec![17, 34, 51, 68, 85]));
/// ```
pub fn process_outcomes<I, T, E, F, R>(outcomes: I, processor: F) -> Outcome<R, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnOnce(OutcomeShunt<'_, I::IntoIter, E>) -> R,
{
    let mut failure = None;
    let shunt = OutcomeShunt {
        source: outcomes.into_iter(),
        failure: &mut failure,
        pulled: 0,
    };
    let value = processor(shunt);

    match failure {
        Some(error) => Outcome::Failure(error),
        None => Outcome::Success(value),
    }
}

/// Lazy/streaming counterpart of [`sequence`](crate::sequence::sequence).
///
/// Units are produced and invoked one at a time as the result is assembled.
/// The producer may be an unbounded-cost source (a remote lookup per element,
/// a generator that is not restartable); a failure at position `k` means the
/// producer is never advanced past `k`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use sequence_rail::sequence::sequence_lazy;
/// use sequence_rail::Outcome;
///
/// let produced = Cell::new(0);
/// let units = (0..10).map(|i| {
///     produced.set(produced.get() + 1);
///     move || if i == 3 { Outcome::failure("bad") } else { Outcome::success(i) }
/// });
///
/// assert_eq!(sequence_lazy(units), Outcome::<Vec<i32>, _>::Failure("bad"));
/// assert_eq!(produced.get(), 4);
/// ```
pub fn sequence_lazy<I, U, T, E>(units: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    let outcome = process_outcomes(units.into_iter().map(|unit| unit.run()), |values| {
        values.collect::<Vec<T>>()
    });
    if let Outcome::Success(values) = &outcome {
        observe::completed(values.len());
    }
    outcome
}

/// Maps each item to a unit with `f` and sequences the results lazily.
///
/// `f` is called for an item only after every earlier item succeeded.
///
/// # Examples
///
/// ```
/// use sequence_rail::sequence::traverse;
/// use sequence_rail::Outcome;
///
/// fn get_item(id: u32) -> Outcome<String, String> {
///     if id < 5 {
///         Outcome::success(format!("item {id}"))
///     } else {
///         Outcome::failure(format!("no item {id}"))
///     }
/// }
///
/// let found = traverse(1..3, get_item);
/// assert_eq!(found, Outcome::Success(vec!["item 1".to_string(), "item 2".to_string()]));
///
/// let missing = traverse(3..9, get_item);
/// assert_eq!(missing, Outcome::Failure("no item 5".to_string()));
/// ```
pub fn traverse<I, F, T, E>(items: I, f: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Outcome<T, E>,
{
    process_outcomes(items.into_iter().map(f), |values| values.collect())
}
