//! Error types for the `unlocks-core` crate.
//!
//! All fallible operations in this crate return [`DeltaError`].

use unlocks_types::EntityId;

/// Errors that can occur while decoding snapshots or computing a delta.
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// An entity of the first snapshot is missing from the second.
    ///
    /// Both snapshots must cover the first snapshot's entity set.
    #[error("entity not found in second snapshot: {entity}")]
    EntityNotFound {
        /// The entity id that could not be looked up.
        entity: EntityId,
    },

    /// The fetched document is not a mapping of entity records.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}
