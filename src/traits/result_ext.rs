//! Extension trait bridging standard [`Result`]s into the sequencing vocabulary.
//!
//! # Examples
//!
//! ```
//! use sequence_rail::sequence::sequence;
//! use sequence_rail::traits::ResultExt;
//! use sequence_rail::Outcome;
//!
//! let units = vec!["1".parse::<u8>().into_outcome(), "x".parse::<u8>().into_outcome()];
//! assert!(sequence(units).is_failure());
//! ```

use crate::outcome::Outcome;

/// Conversion from [`Result`] to [`Outcome`].
///
/// The resulting `Outcome` is itself a [`FallibleUnit`](crate::traits::FallibleUnit),
/// so already computed results can be fed straight into a sequencer.
pub trait ResultExt<T, E> {
    /// Converts into an [`Outcome`], keeping the error verbatim.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}
