//! Fail-fast, stack-safe sequencing of fallible computations.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `sequence_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Sequencing Units
//!
//! ```
//! use sequence_rail::{sequence, Outcome};
//!
//! let units = vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)];
//! assert_eq!(sequence(units), Outcome::<Vec<i32>, &str>::Success(vec![1, 2, 3]));
//! ```
//!
//! ## Failing Fast
//!
//! ```
//! use std::cell::Cell;
//! use sequence_rail::{sequence, Outcome};
//!
//! let calls = Cell::new(0);
//! let unit = |result: Outcome<i32, &'static str>| {
//!     let calls = &calls;
//!     move || {
//!         calls.set(calls.get() + 1);
//!         result
//!     }
//! };
//!
//! let units = vec![unit(Outcome::success(1)), unit(Outcome::failure("bad")), unit(Outcome::success(3))];
//! assert_eq!(sequence(units), Outcome::Failure("bad"));
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! ## Streaming Without a Buffer
//!
//! ```
//! use sequence_rail::{process_outcomes, Outcome};
//!
//! let lookups = (1..50).map(|id| Outcome::<u32, &str>::success(id));
//! let sum = process_outcomes(lookups, |ids| ids.sum::<u32>());
//! assert_eq!(sum, Outcome::Success(1225));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error taxonomy: contract violations and recursion overruns
pub mod error;
/// The `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Sequencing strategies
pub mod sequence;
/// Unit computation traits
pub mod traits;

/// Async extensions for sequencing (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use error::{ContractViolation, ErrorKind, StackOverrun};
pub use outcome::Outcome;
pub use sequence::{
    process_outcomes, sequence, sequence_lazy, sequence_results, traverse, Strategy,
};
pub use traits::{FallibleUnit, ResultExt};
