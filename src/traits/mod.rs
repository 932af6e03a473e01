//! Core traits for sequencing.
//!
//! - [`FallibleUnit`]: a zero-argument computation producing an [`Outcome`](crate::Outcome)
//! - [`ResultExt`]: conversion of standard results into outcomes
//!
//! # Examples
//!
//! ```
//! use sequence_rail::traits::{FallibleUnit, ResultExt};
//! use sequence_rail::Outcome;
//!
//! let unit = || Ok::<_, &str>(5).into_outcome();
//! assert_eq!(unit.run(), Outcome::Success(5));
//! ```

pub mod result_ext;
pub mod unit;

pub use result_ext::ResultExt;
pub use unit::FallibleUnit;
