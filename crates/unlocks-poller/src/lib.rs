//! Achievement unlock poller.
//!
//! Fetches the achievement endpoint twice and reports, per entity, the
//! achievements that appeared between the two responses.
//!
//! # Architecture
//!
//! ```text
//! GET #1 --> decode --+
//!                     +--> compute_delta --> DeltaResult
//! GET #2 --> decode --+
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod poll;

pub use config::{DEFAULT_SOURCE_URL, PollerConfig};
pub use error::{FetchError, Poll, PollerError};
pub use fetch::Fetcher;
pub use poll::{poll_twice, run};
