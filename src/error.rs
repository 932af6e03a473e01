//! Error taxonomy for sequencing.
//!
//! A unit's own error is never represented here: it travels verbatim inside
//! [`Outcome::Failure`](crate::Outcome::Failure). The types in this module only
//! describe misuse of the API ([`ContractViolation`]) and exhaustion of the
//! recursion budget of the reference strategy ([`StackOverrun`]).
//!
//! # Examples
//!
//! ```
//! use sequence_rail::{ErrorKind, Outcome};
//!
//! let failed: Outcome<i32, &str> = Outcome::failure("timeout");
//! assert_eq!(failed.error_kind(), Some(ErrorKind::UnitFailure));
//!
//! let violation = failed.try_unwrap().unwrap_err();
//! assert_eq!(violation.kind(), ErrorKind::ContractViolation);
//! ```
use core::fmt;

/// Classification of everything that can go wrong around a sequencing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A unit computation failed; its error is carried verbatim.
    UnitFailure,
    /// The API was misused locally, e.g. unwrapping a `Failure`.
    ContractViolation,
    /// The recursive reference strategy ran out of recursion budget.
    StackOverrun,
}

impl ErrorKind {
    /// Returns `true` for kinds that signal a programming error rather than a
    /// runtime condition. These must not be caught and retried.
    #[must_use]
    #[inline]
    pub fn is_programming_error(self) -> bool {
        matches!(self, Self::ContractViolation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnitFailure => "unit failure",
            Self::ContractViolation => "contract violation",
            Self::StackOverrun => "stack overrun",
        };
        f.write_str(name)
    }
}

/// Raised when the API is misused locally.
///
/// [`Outcome::unwrap_success`](crate::Outcome::unwrap_success) panics with this
/// message when called on a `Failure`; [`Outcome::try_unwrap`](crate::Outcome::try_unwrap)
/// returns it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractViolation {
    operation: &'static str,
    reason: &'static str,
}

impl ContractViolation {
    /// Creates a violation for the named operation.
    #[must_use]
    #[inline]
    pub const fn new(operation: &'static str, reason: &'static str) -> Self {
        Self { operation, reason }
    }

    /// An assume-success accessor was called on a `Failure`.
    #[must_use]
    #[inline]
    pub const fn unwrapped_failure(operation: &'static str) -> Self {
        Self::new(operation, "called on a Failure")
    }

    /// Name of the operation that was misused.
    #[must_use]
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// What was wrong with the call.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> &'static str {
        self.reason
    }

    /// Always [`ErrorKind::ContractViolation`].
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ContractViolation
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contract violation: `{}` {}", self.operation, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContractViolation {}

/// The recursive reference strategy needed more frames than its budget allows.
///
/// Only [`sequence_recursive`](crate::sequence::sequence_recursive) produces
/// this error. The iterative strategies have no way to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackOverrun {
    depth: usize,
    limit: usize,
}

impl StackOverrun {
    /// Overrun at `depth` against a budget of `limit` frames.
    #[must_use]
    #[inline]
    pub const fn new(depth: usize, limit: usize) -> Self {
        Self { depth, limit }
    }

    /// Recursion depth reached when the budget ran out.
    #[must_use]
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The configured frame budget.
    #[must_use]
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Always [`ErrorKind::StackOverrun`].
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::StackOverrun
    }
}

impl fmt::Display for StackOverrun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recursive binding reached depth {} (budget: {} frames)",
            self.depth, self.limit
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StackOverrun {}
