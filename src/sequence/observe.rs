//! Structured events emitted by the sequencers.
//!
//! Compiled to nothing unless the `tracing` feature is enabled.

#[inline]
pub(crate) fn short_circuited(index: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(index, "sequence short-circuited on failing unit");
    #[cfg(not(feature = "tracing"))]
    let _ = index;
}

#[inline]
pub(crate) fn completed(units: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(units, "sequence completed");
    #[cfg(not(feature = "tracing"))]
    let _ = units;
}

#[inline]
pub(crate) fn overrun(depth: usize) {
    #[cfg(feature = "tracing")]
    tracing::warn!(depth, "recursive binding exhausted its frame budget");
    #[cfg(not(feature = "tracing"))]
    let _ = depth;
}
