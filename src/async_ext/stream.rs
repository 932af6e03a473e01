//! Sequencing over units that arrive from a [`Stream`].
//!
//! The producer is pulled for the next unit only after the previous unit has
//! resolved successfully, so a failure at position `k` leaves the stream
//! un-polled past `k`.

use alloc::vec::Vec;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use futures_core::Stream;
use pin_project_lite::pin_project;

use super::unit::AsyncUnit;
use crate::error::ContractViolation;
use crate::outcome::Outcome;
use crate::sequence::observe;

pin_project! {
    /// Future returned by [`sequence_stream`].
    #[must_use = "futures do nothing unless polled"]
    pub struct StreamSequence<S, Fut, T> {
        #[pin]
        units: S,
        #[pin]
        in_flight: Option<Fut>,
        values: Vec<T>,
        finished: bool,
    }
}

impl<S, Fut, T> StreamSequence<S, Fut, T> {
    /// Creates the future. The stream is not polled until the first poll.
    #[inline]
    pub fn new(units: S) -> Self {
        Self {
            units,
            in_flight: None,
            values: Vec::new(),
            finished: false,
        }
    }
}

impl<S, U, Fut, T, E> Future for StreamSequence<S, Fut, T>
where
    S: Stream<Item = U>,
    U: AsyncUnit<T, E, Future = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if *this.finished {
            panic!("{}", ContractViolation::new("StreamSequence::poll", "called after completion"));
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

            match ready!(this.units.as_mut().poll_next(cx)) {
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

impl<S, U, Fut, T, E> FusedFuture for StreamSequence<S, Fut, T>
where
    S: Stream<Item = U>,
    U: AsyncUnit<T, E, Future = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Sequences units produced on demand by a stream.
///
/// Same contract as [`sequence_async`](super::sequence_async), with the unit
/// producer itself being asynchronous, finite and not restartable.
pub fn sequence_stream<S, U, T, E>(units: S) -> StreamSequence<S, U::Future, T>
where
    S: Stream<Item = U>,
    U: AsyncUnit<T, E>,
{
    StreamSequence::new(units)
}
