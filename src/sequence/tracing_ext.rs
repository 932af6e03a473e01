//! Tracing integration for the sequencers.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! sequence-rail = { version = "0.3", features = ["tracing"] }
//! ```

use alloc::vec::Vec;

use tracing::Span;

use crate::outcome::Outcome;
use crate::sequence::sequence;
use crate::traits::FallibleUnit;

/// Runs [`sequence`] inside `span`, so unit events and the short-circuit event
/// are attributed to it.
///
/// # Example
///
/// ```rust
/// use sequence_rail::sequence::sequence_in_span;
/// use sequence_rail::Outcome;
/// use tracing::info_span;
///
/// let units = (1..=3).map(Outcome::<u32, &str>::success);
/// let outcome = sequence_in_span(info_span!("load_items", count = 3), units);
/// assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
/// ```
pub fn sequence_in_span<I, U, T, E>(span: Span, units: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    span.in_scope(|| sequence(units))
}

/// [`sequence_in_span`] with the current span.
pub fn sequence_in_current_span<I, U, T, E>(units: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = U>,
    U: FallibleUnit<T, E>,
{
    sequence_in_span(Span::current(), units)
}
