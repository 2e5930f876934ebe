//! Record Domain Model
//!
//! A stored document inside one of the collections, keyed by a
//! database-issued identifier.

use std::str::FromStr;

use serde_json::{Map, Value};
use uuid::Uuid;

/// Schemaless record body
pub type Document = Map<String, Value>;

/// Key under which a record's identifier is exposed to clients
pub const ID_FIELD: &str = "_id";

/// Newtype wrapper for record identifiers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a RecordId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// A record as read back from a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    document: Document,
}

impl Record {
    /// Restore a record from persisted data
    #[must_use]
    pub fn restore(id: RecordId, document: Document) -> Self {
        Self {
            id,
            document: without_id(document),
        }
    }

    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Look up a single top-level field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.document.get(name)
    }

    /// Flatten into the wire shape: the body plus its `_id`
    #[must_use]
    pub fn into_document(self) -> Document {
        let mut document = self.document;
        document.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        document
    }
}

/// Drop any client-supplied identifier so the stored body never shadows the real one
#[must_use]
pub fn without_id(mut document: Document) -> Document {
    document.remove(ID_FIELD);
    document
}

/// Outcome of a field-set update, mirroring the matched/modified counters
/// a document store reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateOutcome {
    #[must_use]
    pub fn new(matched: u64, modified: u64) -> Self {
        Self { matched, modified }
    }

    /// True when at least one record actually changed.
    ///
    /// A record that matched but already held the requested values is not
    /// modified, and is indistinguishable from no match at all here.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    #[test]
    fn test_record_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: RecordId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_record_id_parse_rejects_garbage() {
        assert!("not-an-id".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_restore_strips_stored_id_field() {
        let id = RecordId::from_uuid(Uuid::new_v4());
        let record = Record::restore(id, document(json!({"_id": "spoofed", "name": "Ada"})));

        assert!(record.field(ID_FIELD).is_none());
        assert_eq!(record.field("name"), Some(&json!("Ada")));
    }

    #[test]
    fn test_into_document_exposes_id() {
        let uuid = Uuid::new_v4();
        let record = Record::restore(RecordId::from_uuid(uuid), document(json!({"grade": 7})));

        let flat = record.into_document();
        assert_eq!(flat.get(ID_FIELD), Some(&json!(uuid.to_string())));
        assert_eq!(flat.get("grade"), Some(&json!(7)));
    }

    #[test]
    fn test_update_outcome_conflates_unchanged_with_missing() {
        assert!(!UpdateOutcome::new(0, 0).is_modified());
        assert!(!UpdateOutcome::new(1, 0).is_modified());
        assert!(UpdateOutcome::new(1, 1).is_modified());
    }
}
