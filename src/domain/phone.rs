//! PhoneNumber value object.

use crate::error::FieldErrorKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits kept for the local part of a phone number.
pub const PHONE_LOCAL_DIGITS: usize = 10;

// Canonical stored form: "+<cc> ddd ddd dddd"
static CANONICAL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3} \d{3} \d{3} \d{4}$").expect("phone regex is valid"));

/// A type-safe wrapper for phone numbers in canonical grouped form.
///
/// Normalization strips every non-digit character, keeps only the **last**
/// ten digits, and formats them as `"+<cc> ddd ddd dddd"` with the supplied
/// country code. Inputs carrying more than ten digits are silently truncated
/// to the trailing ten; callers that need to preserve a dialed country code
/// must strip it before normalizing.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::PhoneNumber;
///
/// let phone = PhoneNumber::normalize("+57-300-123-4567", "+57").unwrap();
/// assert_eq!(phone.as_str(), "+57 300 123 4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a raw phone number using the given country code.
    ///
    /// The country code must already be in `+NN` form; the pipeline takes it
    /// from [`PipelineConfig`](crate::config::PipelineConfig), which
    /// validates it.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrorKind::InsufficientDigits` if fewer than
    /// [`PHONE_LOCAL_DIGITS`] digits remain after stripping.
    pub fn normalize(raw: &str, country_code: &str) -> Result<Self, FieldErrorKind> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() < PHONE_LOCAL_DIGITS {
            return Err(FieldErrorKind::InsufficientDigits {
                required: PHONE_LOCAL_DIGITS,
            });
        }

        // Keep only the trailing ten digits; slicing is byte-safe because
        // the string contains ASCII digits only.
        let local = &digits[digits.len() - PHONE_LOCAL_DIGITS..];

        Ok(Self(format!(
            "{} {} {} {}",
            country_code,
            &local[..3],
            &local[3..6],
            &local[6..]
        )))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the country code prefix, including the leading '+'.
    pub fn country_code(&self) -> &str {
        // SAFETY: the canonical form always contains spaces
        self.0
            .split(' ')
            .next()
            .expect("canonical phone contains spaces")
    }

    /// Get the phone number with only its local digits (no country code,
    /// no formatting).
    pub fn local_digits(&self) -> String {
        // SAFETY: the canonical form always contains spaces
        let local = self
            .0
            .split_once(' ')
            .expect("canonical phone contains spaces")
            .1;
        local.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    fn is_canonical(s: &str) -> bool {
        CANONICAL_PHONE_RE.is_match(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize accepts only the canonical grouped form,
// since the country code is not available at deserialization time.
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if !PhoneNumber::is_canonical(&s) {
            return Err(serde::de::Error::custom(format!(
                "phone number not in canonical '+<cc> ddd ddd dddd' form: {}",
                s
            )));
        }
        Ok(PhoneNumber(s))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
