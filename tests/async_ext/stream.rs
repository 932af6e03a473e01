use std::cell::Cell;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures_core::Stream;
use sequence_rail::async_ext::sequence_stream;
use sequence_rail::Outcome;

use crate::common::{with_failure_at, AsyncProbedUnit, Probe};

/// Stream over prepared units that counts how often it was pulled.
struct CountingStream<T, E> {
    units: std::vec::IntoIter<AsyncProbedUnit<T, E>>,
    pulled: Rc<Cell<usize>>,
}

impl<T, E> Stream for CountingStream<T, E> {
    type Item = AsyncProbedUnit<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let next = self.units.next();
        if next.is_some() {
            self.pulled.set(self.pulled.get() + 1);
        }
        Poll::Ready(next)
    }
}

impl<T, E> Unpin for CountingStream<T, E> {}

fn counting<T: Clone, E: Clone>(
    probe: &Probe,
    outcomes: &[Outcome<T, E>],
) -> (CountingStream<T, E>, Rc<Cell<usize>>) {
    let pulled = Rc::new(Cell::new(0));
    let stream = CountingStream {
        units: probe.async_units(outcomes).into_iter(),
        pulled: Rc::clone(&pulled),
    };
    (stream, pulled)
}

#[tokio::test]
async fn stream_units_resolve_in_order() {
    let probe = Probe::new();
    let (stream, pulled) = counting(&probe, &[Outcome::<u8, String>::success(1), Outcome::success(2)]);

    assert_eq!(sequence_stream(stream).await, Outcome::Success(vec![1, 2]));
    assert_eq!(pulled.get(), 2);
}

#[tokio::test]
async fn stream_is_not_pulled_past_failure() {
    let probe = Probe::new();
    let (stream, pulled) = counting(&probe, &with_failure_at(10, 3));

    assert_eq!(sequence_stream(stream).await, Outcome::Failure("unit 3 failed".to_string()));
    assert_eq!(pulled.get(), 4);
    assert_eq!(probe.started(), vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn empty_stream_succeeds() {
    let probe = Probe::new();
    let (stream, _) = counting::<u8, ()>(&probe, &[]);
    assert_eq!(sequence_stream(stream).await, Outcome::Success(vec![]));
}
