//! Per-entity result of comparing two snapshots.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{AchievementId, EntityId};

/// Metadata of one entity plus the achievements it gained between polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDelta {
    /// Metadata taken from the first snapshot.
    pub metadata: Value,
    /// Achievements present in the second snapshot but not in the first.
    pub achievements: BTreeMap<AchievementId, Value>,
}

impl EntityDelta {
    /// Whether the entity gained nothing.
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

/// Entity id to [`EntityDelta`], one entry per entity of the first snapshot.
///
/// Serializes to the same `{id: {metadata, achievements}}` shape as a
/// [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeltaResult(BTreeMap<EntityId, EntityDelta>);

impl DeltaResult {
    /// Number of entities in the result.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the result holds no entities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the delta for one entity.
    pub fn get(&self, entity: &str) -> Option<&EntityDelta> {
        self.0.get(entity)
    }

    /// Iterate over `(id, delta)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, EntityId, EntityDelta> {
        self.0.iter()
    }

    /// Sum of new achievements over all entities.
    pub fn total_new_achievements(&self) -> usize {
        self.0.values().map(|delta| delta.achievements.len()).sum()
    }
}

impl FromIterator<(EntityId, EntityDelta)> for DeltaResult {
    fn from_iter<I: IntoIterator<Item = (EntityId, EntityDelta)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DeltaResult {
    type Item = (&'a EntityId, &'a EntityDelta);
    type IntoIter = btree_map::Iter<'a, EntityId, EntityDelta>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
