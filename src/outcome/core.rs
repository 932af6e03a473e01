use crate::error::{ContractViolation, ErrorKind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a single fallible computation: exactly one success value or one error.
///
/// `Outcome<T, E>` is the value every unit computation produces and the value
/// every sequencing call returns. It mirrors [`Result`] but keeps the naming of
/// the sequencing vocabulary (`Success`/`Failure`) and adds the assume-success
/// accessors whose misuse is reported as a [`ContractViolation`].
///
/// There is no implicit coercion between the variants. Conversions to and from
/// [`Result`] are explicit through [`From`].
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` is externally tagged:
/// `{"Success": 1}` or `{"Failure": "bad"}`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use sequence_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(21).map(|x| x * 2);
/// assert_eq!(ok, Outcome::Success(42));
///
/// let failed = Outcome::<i32, &str>::failure("bad").map(|x| x * 2);
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_success(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<(), &str>::failure("missing");
    /// assert_eq!(o.into_failure(), Some("missing"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Maps the success value with `f`. A `Failure` passes through and `f` is
    /// never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(20).map(|x| x + 1);
    /// assert_eq!(o, Outcome::Success(21));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a dependent fallible computation.
    ///
    /// `f` runs only on `Success`; a `Failure` short-circuits unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome from the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).flat_map(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`flat_map`](Self::flat_map) matching [`Result::and_then`].
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Maps the error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::failure(404).map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(o, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Calls `op` on the error of a `Failure`, otherwise returns the success unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("cache miss").or_else(|_| Outcome::<i32, &str>::success(0));
    /// assert_eq!(o, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Pairs two outcomes, failing fast.
    ///
    /// When both fail, the error of `self` wins and the other is discarded.
    /// Errors are never merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let a = Outcome::<i32, &str>::success(1);
    /// let b = Outcome::<char, &str>::success('x');
    /// assert_eq!(a.zip(b), Outcome::Success((1, 'x')));
    ///
    /// let c = Outcome::<i32, &str>::failure("first");
    /// let d = Outcome::<i32, &str>::failure("second");
    /// assert_eq!(c.zip(d), Outcome::Failure("first"));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    /// Returns the success value or `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).get_or_else(0), 7);
    /// assert_eq!(Outcome::<i32, &str>::failure("bad").get_or_else(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[must_use]
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the success value, for callers that have already proven success.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if called on a `Failure`.
    /// This is a programming error, not a recoverable condition. Use
    /// [`try_unwrap`](Self::try_unwrap) to get the violation as a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(3);
    /// assert_eq!(o.unwrap_success(), 3);
    /// ```
    ///
    /// ```should_panic
    /// use sequence_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::failure("bad").unwrap_success();
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", ContractViolation::unwrapped_failure("unwrap_success")),
        }
    }

    /// Checked form of [`unwrap_success`](Self::unwrap_success).
    ///
    /// The unit's error is dropped; only the violation is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// let violation = Outcome::<i32, &str>::failure("bad").try_unwrap().unwrap_err();
    /// assert_eq!(violation.operation(), "try_unwrap");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, ContractViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContractViolation::unwrapped_failure("try_unwrap")),
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the payload of either variant.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrows the payload of either variant.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Kind of error carried, `None` on success.
    #[must_use]
    #[inline]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(_) => Some(ErrorKind::UnitFailure),
        }
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a standard [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
