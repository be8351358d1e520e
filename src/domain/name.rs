//! PersonName value object.

use crate::error::FieldErrorKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum length of a name after trimming, in characters.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum length of a name after trimming, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// A type-safe wrapper for a person's first or last name.
///
/// Construction normalizes the raw value: surrounding whitespace is trimmed
/// and each whitespace-separated token is title-cased (first letter
/// upper-cased, remainder lower-cased). Normalization is idempotent.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::PersonName;
///
/// let name = PersonName::parse("  juan carlos  ").unwrap();
/// assert_eq!(name.as_str(), "Juan Carlos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Normalize a raw name, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrorKind::TooShort` if the trimmed value has fewer than
    /// [`NAME_MIN_LEN`] characters, or `FieldErrorKind::TooLong` if it has
    /// more than [`NAME_MAX_LEN`].
    pub fn parse(raw: &str) -> Result<Self, FieldErrorKind> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if len < NAME_MIN_LEN {
            return Err(FieldErrorKind::TooShort { min: NAME_MIN_LEN });
        }
        if len > NAME_MAX_LEN {
            return Err(FieldErrorKind::TooLong { max: NAME_MAX_LEN });
        }

        Ok(Self(title_case(trimmed)))
    }

    /// Get the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Upper-case the first letter of each whitespace-separated token and
/// lower-case the rest. Internal whitespace is preserved as-is.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_token_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_token_start = true;
            out.push(c);
        } else if at_token_start {
            out.extend(c.to_uppercase());
            at_token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string, re-running normalization.
// Normalization is idempotent, so canonical input round-trips unchanged.
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
