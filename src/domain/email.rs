//! EmailAddress value object.

use crate::error::FieldErrorKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Standard email grammar: dot-atom local part, dotted domain with at least
// one label separator. Domain labels may not start or end with a hyphen.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[A-Za-z0-9.!\#$%&'*+/=?^_`{|}~-]+
        @[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?
        (?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// A type-safe wrapper for email addresses.
///
/// Construction trims surrounding whitespace and validates the result
/// against standard email address grammar.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::EmailAddress;
///
/// let email = EmailAddress::parse("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate a raw email address.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrorKind::InvalidEmail` if the trimmed value does not
    /// match email grammar.
    pub fn parse(raw: &str) -> Result<Self, FieldErrorKind> {
        let trimmed = raw.trim();

        if !EMAIL_RE.is_match(trimmed) {
            return Err(FieldErrorKind::InvalidEmail);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // SAFETY: the grammar guarantees exactly one '@'
        self.0
            .split('@')
            .next()
            .expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: the grammar guarantees exactly one '@'
        self.0
            .split('@')
            .nth(1)
            .expect("email validated to contain '@'")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
