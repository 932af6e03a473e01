//! Sequential scheduler for asynchronous units.
//!
//! [`SequenceFuture`] drives an ordered collection of [`AsyncUnit`]s one at a
//! time: it starts unit `k + 1` only after unit `k` has resolved, may suspend
//! at every unit boundary, and stops at the first failure.

use alloc::vec::Vec;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use super::unit::AsyncUnit;
use crate::error::ContractViolation;
use crate::outcome::Outcome;
use crate::sequence::eager::presized;
use crate::sequence::observe;

pin_project! {
    /// Future returned by [`sequence_async`].
    ///
    /// Holds at most one in-flight unit. The accumulator is local to this
    /// future, and the loop inside `poll` keeps stack depth constant however
    /// many units resolve immediately.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the future drops the in-flight unit (which is then cancelled
    /// according to its own contract) and starts no further units.
    #[must_use = "futures do nothing unless polled"]
    pub struct SequenceFuture<I, Fut, T> {
        units: I,
        #[pin]
        in_flight: Option<Fut>,
        values: Vec<T>,
        finished: bool,
    }
}

impl<I, Fut, T> SequenceFuture<I, Fut, T>
where
    I: Iterator,
{
    /// Creates the future. No unit is started until the first poll.
    #[inline]
    pub fn new<S>(units: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let units = units.into_iter();
        let values = presized(units.size_hint());
        Self {
            units,
            in_flight: None,
            values,
            finished: false,
        }
    }
}

impl<I, U, Fut, T, E> Future for SequenceFuture<I, Fut, T>
where
    I: Iterator<Item = U>,
    U: AsyncUnit<T, E, Future = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if *this.finished {
            panic!("{}", ContractViolation::new("SequenceFuture::poll", "called after completion"));
        }

        loop {
            if let Some(unit) = this.in_flight.as_mut().as_pin_mut() {
                let outcome = ready!(unit.poll(cx));
                this.in_flight.set(None);
                match outcome {
                    Outcome::Success(value) => this.values.push(value),
                    Outcome::Failure(error) => {
                        *this.finished = true;
                        observe::short_circuited(this.values.len());
                        return Poll::Ready(Outcome::Failure(error));
                    }
                }
            }

            match this.units.next() {
                Some(unit) => this.in_flight.set(Some(unit.start())),
                None => {
                    *this.finished = true;
                    let values = mem::take(this.values);
                    observe::completed(values.len());
                    return Poll::Ready(Outcome::Success(values));
                }
            }
        }
    }
}

impl<I, U, Fut, T, E> FusedFuture for SequenceFuture<I, Fut, T>
where
    I: Iterator<Item = U>,
    U: AsyncUnit<T, E, Future = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Sequences asynchronous units, one at a time, failing fast.
///
/// Same contract as [`sequence`](crate::sequence::sequence): values in input
/// order, or the first failure verbatim with no later unit started.
///
/// # Examples
///
/// ```rust
/// use sequence_rail::async_ext::sequence_async;
/// use sequence_rail::Outcome;
///
/// async fn load() -> Outcome<Vec<u32>, &'static str> {
///     let units = (1..=3).map(|id| move || async move { Outcome::<u32, &str>::success(id * 2) });
///     sequence_async(units).await
/// }
/// ```
pub fn sequence_async<I, U, T, E>(units: I) -> SequenceFuture<I::IntoIter, U::Future, T>
where
    I: IntoIterator<Item = U>,
    U: AsyncUnit<T, E>,
{
    SequenceFuture::new(units)
}
