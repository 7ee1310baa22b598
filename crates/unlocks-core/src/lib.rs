//! Snapshot decoding and achievement delta computation.
//!
//! This crate turns the two raw documents returned by consecutive polls into
//! typed [`Snapshot`](unlocks_types::Snapshot)s and compares them.
//!
//! # Modules
//!
//! - [`decode`] -- JSON document to typed snapshot
//! - [`delta`] -- Per-entity set difference of achievement ids
//! - [`error`] -- [`DeltaError`] taxonomy

pub mod decode;
pub mod delta;
pub mod error;

pub use decode::decode_snapshot;
pub use delta::{compute_delta, entity_delta};
pub use error::DeltaError;
