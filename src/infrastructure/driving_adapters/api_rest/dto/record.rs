//! Record DTOs
//!
//! Wire shapes shared by every collection endpoint.

use serde::Serialize;

use crate::domain::models::record::{Document, Record, RecordId, UpdateOutcome};

/// A stored record as returned to clients: its fields plus `_id`
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RecordResponseDto(pub Document);

impl From<Record> for RecordResponseDto {
    fn from(record: Record) -> Self {
        Self(record.into_document())
    }
}

/// Response to a successful insert
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResponseDto {
    pub message: String,
    pub inserted_id: String,
}

impl InsertedResponseDto {
    #[must_use]
    pub fn new(message: &str, id: &RecordId) -> Self {
        Self {
            message: message.to_string(),
            inserted_id: id.to_string(),
        }
    }
}

/// Raw counters of a field-set update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultDto {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateOutcome> for UpdateResultDto {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched,
            modified_count: outcome.modified,
        }
    }
}

/// Response to an update that changed a record
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponseDto {
    pub message: String,
    pub result: UpdateResultDto,
}

impl UpdatedResponseDto {
    #[must_use]
    pub fn new(message: &str, outcome: UpdateOutcome) -> Self {
        Self {
            message: message.to_string(),
            result: outcome.into(),
        }
    }
}

/// Response to a delete that removed a record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponseDto {
    pub message: String,
    pub deleted_count: u64,
}

impl DeletedResponseDto {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            deleted_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_record_serializes_flat_with_id() {
        let uuid = Uuid::new_v4();
        let mut document = Document::new();
        document.insert("name".into(), json!("Ada"));
        let record = Record::restore(RecordId::from_uuid(uuid), document);

        let value = serde_json::to_value(RecordResponseDto::from(record)).unwrap();
        assert_eq!(value, json!({"_id": uuid.to_string(), "name": "Ada"}));
    }

    #[test]
    fn test_update_result_uses_camel_case() {
        let value = serde_json::to_value(UpdatedResponseDto::new(
            "User role updated successfully",
            UpdateOutcome::new(1, 1),
        ))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "message": "User role updated successfully",
                "result": {"acknowledged": true, "matchedCount": 1, "modifiedCount": 1}
            })
        );
    }
}
