//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use sequence_rail::prelude::*;
//!
//! let ids = 1..=3;
//! let items = traverse(ids, |id: u32| Outcome::<_, &str>::success(id * 100));
//! assert_eq!(items, Outcome::Success(vec![100, 200, 300]));
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`ContractViolation`], [`Strategy`]
//! - **Functions**: [`sequence`], [`sequence_lazy`], [`sequence_results`],
//!   [`process_outcomes`], [`traverse`]
//! - **Traits**: [`FallibleUnit`], [`ResultExt`]

pub use crate::error::ContractViolation;
pub use crate::outcome::Outcome;
pub use crate::sequence::{
    process_outcomes, sequence, sequence_lazy, sequence_results, traverse, Strategy,
};
pub use crate::traits::{FallibleUnit, ResultExt};
