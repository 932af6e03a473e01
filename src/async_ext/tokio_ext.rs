//! Tokio-specific async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! sequence-rail = { version = "0.3", features = ["async-tokio"] }
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use super::sequence_future::sequence_async;
use super::unit::AsyncUnit;
use crate::outcome::Outcome;

/// Outcome of a sequence bounded by a deadline.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeoutOutcome<T, E> {
    /// The sequence finished in time, successfully or at its first failure.
    Completed(Outcome<T, E>),
    /// The deadline elapsed first. The in-flight unit was dropped and no
    /// further unit was started.
    Timeout(Duration),
}

impl<T, E> TimeoutOutcome<T, E> {
    /// Returns `true` if the sequence finished before the deadline.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns `true` if the deadline elapsed first.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Flattens into an [`Outcome`], turning a timeout into an error.
    pub fn into_outcome(self) -> Outcome<T, E>
    where
        E: From<TimeoutError>,
    {
        match self {
            Self::Completed(outcome) => outcome,
            Self::Timeout(d) => Outcome::Failure(E::from(TimeoutError(d))),
        }
    }
}

/// Error type representing a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError(pub Duration);

impl core::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sequence timed out after {:?}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeoutError {}

/// Runs [`sequence_async`] under a deadline covering the whole aggregate.
///
/// When the deadline elapses, the sequence is cancelled: the unit in flight is
/// dropped and the remaining units are never started.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sequence_rail::async_ext::{sequence_with_timeout, TimeoutOutcome};
/// use sequence_rail::Outcome;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let units = (1..=3).map(|n| move || async move { Outcome::<u32, &str>::success(n) });
///     let outcome = sequence_with_timeout(Duration::from_secs(1), units).await;
///     assert_eq!(outcome, TimeoutOutcome::Completed(Outcome::Success(vec![1, 2, 3])));
/// }
/// ```
pub async fn sequence_with_timeout<I, U, T, E>(
    duration: Duration,
    units: I,
) -> TimeoutOutcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: AsyncUnit<T, E>,
{
    match tokio::time::timeout(duration, sequence_async(units)).await {
        Ok(outcome) => TimeoutOutcome::Completed(outcome),
        Err(_elapsed) => TimeoutOutcome::Timeout(duration),
    }
}
