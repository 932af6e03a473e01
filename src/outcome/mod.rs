//! The two-variant result type every unit computation produces.
//!
//! [`Outcome`] carries either one success value or one error. It is immutable
//! once built and composes with [`map`](Outcome::map) and
//! [`flat_map`](Outcome::flat_map) the way [`Result`] does.
//!
//! # Key Components
//!
//! - [`Outcome`] - `Success(T)` or `Failure(E)`
//! - Iterator adapters over the success payload
//! - Fail-fast [`FromIterator`] collection into any `FromIterator` container
//!
//! # Examples
//!
//! ```
//! use sequence_rail::outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
//! assert!(parsed.is_success());
//!
//! let collected: Outcome<Vec<i32>, &str> =
//!     [Ok(1), Err("bad"), Ok(3)].into_iter().collect();
//! assert_eq!(collected, Outcome::Failure("bad"));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
