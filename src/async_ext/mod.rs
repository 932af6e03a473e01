//! Async extensions for sequence-rail.
//!
//! The async sequencers keep the synchronous contract: units are started
//! strictly one after another, each only after the previous one resolved, and
//! nothing is started after the first failure. They may suspend at every unit
//! boundary, and they are runtime-neutral except for the `async-tokio` helpers.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! sequence-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use sequence_rail::prelude_async::*;
//!
//! async fn fetch_items(ids: Vec<u64>) -> Outcome<Vec<Item>, ApiError> {
//!     sequence_async(ids.into_iter().map(|id| move || fetch_item(id))).await
//! }
//! ```

mod sequence_future;
mod stream;
#[cfg(feature = "async-tokio")]
mod tokio_ext;
mod unit;

pub use sequence_future::{sequence_async, SequenceFuture};
pub use stream::{sequence_stream, StreamSequence};
#[cfg(feature = "async-tokio")]
pub use tokio_ext::{sequence_with_timeout, TimeoutError, TimeoutOutcome};
pub use unit::AsyncUnit;
