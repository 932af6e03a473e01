//! Fail-fast, stack-safe sequencing of fallible unit computations.
//!
//! Every sequencer here takes an ordered collection of
//! [`FallibleUnit`](crate::traits::FallibleUnit)s and returns one
//! [`Outcome`](crate::Outcome): `Success` with every value in input order, or
//! the `Failure` of the first unit that failed. Units are invoked strictly left
//! to right, and nothing after the first failure is invoked.
//!
//! # Key Components
//!
//! - [`sequence`] - eager fold into a pre-sized buffer (the production path)
//! - [`sequence_lazy`], [`process_outcomes`], [`traverse`] - streaming over
//!   lazily produced units
//! - [`Stepper`] - explicit scheduler resumed one unit at a time
//! - [`sequence_recursive`] - naive recursive binding, reference only
//! - [`Strategy`] - names all of the above so they can be compared
//!
//! # Examples
//!
//! ```
//! use sequence_rail::sequence::{sequence, Strategy};
//! use sequence_rail::Outcome;
//!
//! let units = (0..100_000).map(|i| move || Outcome::<u32, &str>::success(i));
//! let values = sequence(units).unwrap_success();
//! assert_eq!(values.len(), 100_000);
//!
//! let deep = (0..100_000).map(Outcome::<u32, &str>::success);
//! assert!(Strategy::all()[3].run(deep).is_err());
//! ```
pub mod eager;
pub mod lazy;
pub(crate) mod observe;
pub mod recursive;
pub mod stepper;
pub mod strategy;
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use eager::{sequence, sequence_results};
pub use lazy::{process_outcomes, sequence_lazy, traverse, OutcomeShunt};
pub use recursive::{sequence_recursive, RecursionBudget};
pub use stepper::{sequence_stepwise, Step, Stepper};
pub use strategy::Strategy;
#[cfg(feature = "tracing")]
pub use tracing_ext::{sequence_in_current_span, sequence_in_span};
