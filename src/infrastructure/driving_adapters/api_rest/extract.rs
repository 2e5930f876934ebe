//! Request Extractors

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::errors::ApiError;

/// Message for bodies holding text PostgreSQL cannot store
pub const NUL_CHARACTER_MESSAGE: &str = "Request body must not contain NUL (\\u0000) characters";

/// JSON body extractor whose rejections render as the API's error body
///
/// Bodies carrying a NUL character in any key or string are refused,
/// since a JSONB column cannot hold them.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(request, state).await?;

        if contains_nul(&value) {
            return Err(ApiError::BadRequest(NUL_CHARACTER_MESSAGE.to_string()));
        }

        serde_json::from_value(value).map(Self).map_err(|e| {
            ApiError::BadRequest(format!(
                "Failed to deserialize the JSON body into the target type: {e}"
            ))
        })
    }
}

/// Whether any object key or string below `value` holds a NUL character
fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(text) => text.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, item)| key.contains('\0') || contains_nul(item)),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nul_found_in_nested_strings() {
        assert!(contains_nul(&json!({"name": "a\u{0}b"})));
        assert!(contains_nul(&json!({"tags": ["ok", {"deep": "x\u{0}"}]})));
    }

    #[test]
    fn test_nul_found_in_keys() {
        assert!(contains_nul(&json!({"bad\u{0}key": 1})));
    }

    #[test]
    fn test_plain_documents_pass() {
        assert!(!contains_nul(&json!({
            "name": "Grace",
            "rating": 5,
            "photo": null,
            "escaped": "\\u0000 spelled out",
            "nested": {"flags": [true, false]}
        })));
    }
}
