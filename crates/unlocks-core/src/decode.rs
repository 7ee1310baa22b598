//! Conversion of a fetched JSON document into a typed [`Snapshot`].
//!
//! The fetcher hands back whatever JSON the endpoint produced. The shape is
//! checked here, once, so the delta computation can work on typed records.

use serde_json::Value;
use tracing::debug;
use unlocks_types::Snapshot;

use crate::error::DeltaError;

/// Decode a JSON document into a [`Snapshot`].
///
/// The document must be an object whose values are objects with an
/// `achievements` object. `metadata` may be absent and then reads as `null`.
///
/// # Errors
///
/// Returns [`DeltaError::MalformedSnapshot`] if the document has any other shape.
pub fn decode_snapshot(value: Value) -> Result<Snapshot, DeltaError> {
    let snapshot: Snapshot = serde_json::from_value(value)?;
    debug!(entities = snapshot.len(), "snapshot decoded");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_well_formed_document() {
        let snapshot = decode_snapshot(json!({
            "e1": {"metadata": {"name": "X"}, "achievements": {"a1": 1}}
        }))
        .unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("e1").unwrap().has_achievement("a1"));
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        assert!(decode_snapshot(json!({})).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object_documents() {
        for doc in [json!(null), json!([1, 2]), json!("text"), json!(42)] {
            let err = decode_snapshot(doc).unwrap_err();
            assert!(matches!(err, DeltaError::MalformedSnapshot(_)));
        }
    }

    #[test]
    fn rejects_records_without_achievement_map() {
        let err = decode_snapshot(json!({"e1": {"metadata": {}, "achievements": [1]}}))
            .unwrap_err();
        assert!(err.to_string().starts_with("malformed snapshot"));

        assert!(decode_snapshot(json!({"e1": 5})).is_err());
    }
}
