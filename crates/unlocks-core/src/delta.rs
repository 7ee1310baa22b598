//! Achievement delta between two consecutive snapshots.
//!
//! For every entity of the first snapshot the result carries the entity's
//! metadata (from the first snapshot) and the achievements whose ids appear
//! in the second snapshot but not in the first. Removed achievements are
//! never reported.

use tracing::debug;
use unlocks_types::{DeltaResult, EntityDelta, EntityRecord, Snapshot};

use crate::error::DeltaError;

/// Compute the per-entity achievement delta from `first` to `second`.
///
/// The result has exactly one entry per entity of `first`. Entities that
/// exist only in `second` are ignored. Achievement payloads are copied from
/// `second` unchanged.
///
/// # Errors
///
/// Returns [`DeltaError::EntityNotFound`] if an entity of `first` is absent
/// from `second`. No partial result is produced.
pub fn compute_delta(first: &Snapshot, second: &Snapshot) -> Result<DeltaResult, DeltaError> {
    let result = first
        .iter()
        .map(|(id, before)| {
            let after = second
                .get(id.as_str())
                .ok_or_else(|| DeltaError::EntityNotFound { entity: id.clone() })?;
            Ok((id.clone(), entity_delta(before, after)))
        })
        .collect::<Result<DeltaResult, DeltaError>>()?;

    let ignored = second
        .entity_ids()
        .filter(|id| !first.contains(id.as_str()))
        .count();
    if ignored > 0 {
        debug!(ignored, "entities only present in second snapshot ignored");
    }

    Ok(result)
}

/// Delta for a single entity: `before` metadata, achievements new in `after`.
pub fn entity_delta(before: &EntityRecord, after: &EntityRecord) -> EntityDelta {
    let achievements = after
        .achievements
        .iter()
        .filter(|(id, _)| !before.has_achievement(id.as_str()))
        .map(|(id, payload)| (id.clone(), payload.clone()))
        .collect();

    EntityDelta {
        metadata: before.metadata.clone(),
        achievements,
    }
}
