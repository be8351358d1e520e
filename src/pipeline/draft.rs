//! Raw contact input as received from an API layer.

use serde::{Deserialize, Serialize};

/// Untrusted contact input, before any normalization.
///
/// Every field is optional so the same shape serves both pipelines: the
/// create pipeline requires `first_name`, `last_name`, `email`, and `phone`
/// to be present, while the update pipeline accepts any subset. Unknown
/// fields in the raw JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_full_payload() {
        let json = r#"{
            "first_name": "juan",
            "last_name": "perez",
            "email": "juan@example.com",
            "phone": "300-123-4567",
            "company": "Acme",
            "tags": ["Work", "VIP"],
            "is_favorite": true
        }"#;
        let draft: ContactDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.first_name.as_deref(), Some("juan"));
        assert_eq!(draft.tags.as_deref(), Some(["Work", "VIP"].map(String::from).as_slice()));
        assert_eq!(draft.is_favorite, Some(true));
    }

    #[test]
    fn test_draft_missing_fields_are_none() {
        let draft: ContactDraft = serde_json::from_str(r#"{"company": "Acme"}"#).unwrap();

        assert_eq!(draft.company.as_deref(), Some("Acme"));
        assert!(draft.first_name.is_none());
        assert!(draft.tags.is_none());
        assert!(draft.is_favorite.is_none());
    }

    #[test]
    fn test_draft_empty_object() {
        let draft: ContactDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, ContactDraft::default());
    }
}
