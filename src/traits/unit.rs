use crate::outcome::Outcome;

/// A zero-argument fallible computation, invoked at most once.
///
/// The sequencers take units by value and call [`run`](FallibleUnit::run)
/// exactly once, strictly in input order. A unit is never retried or re-run.
///
/// Any `FnOnce() -> Outcome<T, E>` is a unit, and so is an already computed
/// [`Outcome`], which simply returns itself.
///
/// # Examples
///
/// ```
/// use sequence_rail::traits::FallibleUnit;
/// use sequence_rail::Outcome;
///
/// let lookup = || Outcome::<&str, &str>::success("item 7");
/// assert_eq!(lookup.run(), Outcome::Success("item 7"));
///
/// let ready = Outcome::<i32, &str>::failure("bad");
/// assert_eq!(ready.run(), Outcome::Failure("bad"));
/// ```
pub trait FallibleUnit<T, E> {
    /// Invokes the computation, consuming the unit.
    fn run(self) -> Outcome<T, E>;
}

impl<F, T, E> FallibleUnit<T, E> for F
where
    F: FnOnce() -> Outcome<T, E>,
{
    #[inline]
    fn run(self) -> Outcome<T, E> {
        self()
    }
}

impl<T, E> FallibleUnit<T, E> for Outcome<T, E> {
    #[inline]
    fn run(self) -> Outcome<T, E> {
        self
    }
}
