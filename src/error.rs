//! Error types for the contact normalization pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Field-level failures are tagged with the field they belong to
//! and collected into a single [`ValidationErrors`] aggregate, so a caller
//! sees every invalid field in one pass. All error types serialize with
//! `serde` so an API layer can surface them in a structured error body.

use crate::domain::ContactField;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The reason a single field failed normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Value has fewer characters than the field's minimum after trimming
    #[error("must be at least {min} characters after trimming")]
    TooShort { min: usize },

    /// Value has more characters than the field's maximum after trimming
    #[error("must be at most {max} characters after trimming")]
    TooLong { max: usize },

    /// Value does not match email address grammar
    #[error("is not a valid email address")]
    InvalidEmail,

    /// Value contains too few digits for a phone number
    #[error("must contain at least {required} digits")]
    InsufficientDigits { required: usize },

    /// Deduplicated tag set exceeds the cap under the reject policy
    #[error("has {count} entries, maximum is {max}")]
    TooManyTags { count: usize, max: usize },
}

/// A single field failure: which field, and why.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field} {kind}")]
pub struct FieldError {
    /// The field the failure belongs to
    pub field: ContactField,

    /// The reason the field was rejected
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Create a new FieldError.
    pub fn new(field: ContactField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Aggregate of every field failure from one validation call.
///
/// Both pipeline entry points collect all failures before returning, so this
/// is never empty when returned as an `Err`. Serializes as a plain array of
/// field failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Build an aggregate from collected field failures.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Number of field failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the aggregate holds no failures. Returned `Err` values are
    /// never empty; this exists for collector-side checks.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the field failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Whether any failure belongs to the given field.
    pub fn contains_field(&self, field: ContactField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Get the failure kind recorded for the given field, if any.
    pub fn kind_for(&self, field: ContactField) -> Option<&FieldErrorKind> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.kind)
    }

    /// Convert into the underlying list of failures.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationErrors
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
