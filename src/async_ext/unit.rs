use core::future::Future;

use crate::outcome::Outcome;

/// An asynchronous unit computation.
///
/// Calling [`start`](AsyncUnit::start) creates the future; nothing runs before
/// that. The sequencers start a unit only after the previous one resolved, so
/// a unit's side effects never overlap with another unit's.
///
/// Any `FnOnce() -> impl Future<Output = Outcome<T, E>>` is an async unit.
///
/// # Examples
///
/// ```rust
/// use sequence_rail::async_ext::AsyncUnit;
/// use sequence_rail::Outcome;
///
/// async fn check() {
///     let unit = || async { Outcome::<u8, &str>::success(1) };
///     assert_eq!(unit.start().await, Outcome::Success(1));
/// }
/// ```
pub trait AsyncUnit<T, E> {
    type Future: Future<Output = Outcome<T, E>>;

    /// Creates the future for this unit.
    fn start(self) -> Self::Future;
}

impl<F, Fut, T, E> AsyncUnit<T, E> for F
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    type Future = Fut;

    #[inline]
    fn start(self) -> Fut {
        self()
    }
}
