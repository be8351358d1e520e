//! Contact field identifiers.

use serde::Serialize;
use std::fmt;

/// Identifies one field of a contact record.
///
/// Used to tag validation failures with the field they belong to, and to
/// dispatch per-field normalization rules in the pipeline without resorting
/// to string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Tags,
    IsFavorite,
}

impl ContactField {
    /// Get the wire-level name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Tags => "tags",
            Self::IsFavorite => "is_favorite",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_as_str() {
        assert_eq!(ContactField::FirstName.as_str(), "first_name");
        assert_eq!(ContactField::IsFavorite.as_str(), "is_favorite");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(format!("{}", ContactField::Phone), "phone");
    }

    #[test]
    fn test_field_serializes_as_snake_case() {
        let json = serde_json::to_string(&ContactField::LastName).unwrap();
        assert_eq!(json, "\"last_name\"");
    }
}
