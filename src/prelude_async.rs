//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async sequencers.
//!
//! ```ignore
//! use sequence_rail::prelude_async::*;
//!
//! async fn fetch_all(ids: Vec<u64>) -> Outcome<Vec<User>, ApiError> {
//!     sequence_async(ids.into_iter().map(|id| move || fetch_user(id))).await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{sequence_async, sequence_stream, AsyncUnit, SequenceFuture};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::{sequence_with_timeout, TimeoutOutcome};
