//! One fetched document: entity id to entity record.
//!
//! Metadata and achievement payloads are opaque [`Value`]s. They are
//! carried through untouched and never interpreted.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{AchievementId, EntityId};

/// A single entity as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Opaque descriptive data. Absent in the source document means `null`.
    #[serde(default)]
    pub metadata: Value,
    /// Achievement id to opaque achievement payload.
    pub achievements: BTreeMap<AchievementId, Value>,
}

impl EntityRecord {
    /// Build a record from metadata and an achievement map.
    pub const fn new(metadata: Value, achievements: BTreeMap<AchievementId, Value>) -> Self {
        Self {
            metadata,
            achievements,
        }
    }

    /// Iterate over the achievement ids held by this record.
    pub fn achievement_ids(&self) -> btree_map::Keys<'_, AchievementId, Value> {
        self.achievements.keys()
    }

    /// Whether the record holds the given achievement.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.contains_key(id)
    }
}

/// A full document returned by one poll of the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<EntityId, EntityRecord>);

impl Snapshot {
    /// An empty snapshot.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no entities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an entity record.
    pub fn get(&self, entity: &str) -> Option<&EntityRecord> {
        self.0.get(entity)
    }

    /// Whether the snapshot contains the entity.
    pub fn contains(&self, entity: &str) -> bool {
        self.0.contains_key(entity)
    }

    /// Iterate over entity ids.
    pub fn entity_ids(&self) -> btree_map::Keys<'_, EntityId, EntityRecord> {
        self.0.keys()
    }

    /// Iterate over `(id, record)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, EntityId, EntityRecord> {
        self.0.iter()
    }
}

impl FromIterator<(EntityId, EntityRecord)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (EntityId, EntityRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a EntityId, &'a EntityRecord);
    type IntoIter = btree_map::Iter<'a, EntityId, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_endpoint_shape() {
        let raw = json!({
            "e1": {"metadata": {"name": "X"}, "achievements": {"a1": 1, "a2": {"at": "t"}}},
            "e2": {"metadata": null, "achievements": {}}
        });
        let snapshot: Snapshot = serde_json::from_value(raw).unwrap();

        assert_eq!(snapshot.len(), 2);
        let e1 = snapshot.get("e1").unwrap();
        assert_eq!(e1.metadata, json!({"name": "X"}));
        assert!(e1.has_achievement("a2"));
        assert_eq!(e1.achievements.get("a2"), Some(&json!({"at": "t"})));
        assert!(snapshot.get("e2").unwrap().achievements.is_empty());

        let mut seen = Vec::new();
        for (id, record) in &snapshot {
            seen.push((id.as_str(), record.achievements.len()));
        }
        assert_eq!(seen, vec![("e1", 2), ("e2", 0)]);
    }

    #[test]
    fn missing_metadata_defaults_to_null() {
        let snapshot: Snapshot =
            serde_json::from_value(json!({"e1": {"achievements": {"a1": true}}})).unwrap();
        assert_eq!(snapshot.get("e1").unwrap().metadata, Value::Null);
    }

    #[test]
    fn extra_record_fields_are_ignored() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "e1": {"metadata": 1, "achievements": {}, "rank": 3}
        }))
        .unwrap();
        assert!(snapshot.contains("e1"));
    }

    #[test]
    fn missing_achievements_is_rejected() {
        let result = serde_json::from_value::<Snapshot>(json!({"e1": {"metadata": {}}}));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_plain_mapping() {
        let snapshot: Snapshot = [(
            EntityId::from("e1"),
            EntityRecord::new(json!("m"), BTreeMap::new()),
        )]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({"e1": {"metadata": "m", "achievements": {}}})
        );
    }
}
