//! Shared type definitions for the achievement unlock poller.
//!
//! This crate is the single source of truth for the shapes exchanged between
//! the fetcher and the delta computer.
//!
//! # Modules
//!
//! - [`ids`] -- String newtypes for entity and achievement identifiers
//! - [`snapshot`] -- One polled document ([`Snapshot`], [`EntityRecord`])
//! - [`delta`] -- The comparison output ([`DeltaResult`], [`EntityDelta`])

pub mod delta;
pub mod ids;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use delta::{DeltaResult, EntityDelta};
pub use ids::{AchievementId, EntityId};
pub use snapshot::{EntityRecord, Snapshot};
