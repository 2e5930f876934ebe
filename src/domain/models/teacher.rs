//! Teacher Domain Model

use serde_json::Value;

use crate::domain::models::record::Document;

/// The four teacher attributes an update overwrites.
///
/// Every update writes all four keys; an attribute missing from the request
/// is stored as `null` rather than left at its previous value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherProfile {
    pub name: Option<Value>,
    pub department: Option<Value>,
    pub subject: Option<Value>,
    pub photo: Option<Value>,
}

impl TeacherProfile {
    /// Document holding exactly the four profile keys
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for (key, value) in [
            ("name", &self.name),
            ("department", &self.department),
            ("subject", &self.subject),
            ("photo", &self.photo),
        ] {
            document.insert(key.to_string(), value.clone().unwrap_or(Value::Null));
        }
        document
    }
}
