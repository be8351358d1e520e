//! Dispatch pipeline: the two validation entry points.
//!
//! [`validate_create`] requires every field and produces a full
//! [`ContactRecord`](crate::models::ContactRecord); [`validate_update`]
//! accepts any subset and produces a [`ContactPatch`](crate::models::ContactPatch).
//! Both share the per-field rules (the domain value objects) and both collect
//! every field failure before returning, so a caller sees all invalid fields
//! in one pass.

mod create;
mod draft;
mod update;

pub use create::validate_create;
pub use draft::ContactDraft;
pub use update::validate_update;

use crate::domain::ContactField;
use crate::error::{FieldError, FieldErrorKind};

/// Run one field rule, tagging a failure with its field and recording it.
///
/// Returns the normalized value on success, or `None` after pushing the
/// failure, so callers can keep validating the remaining fields.
fn run_rule<T>(
    errors: &mut Vec<FieldError>,
    field: ContactField,
    result: Result<T, FieldErrorKind>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(kind) => {
            errors.push(FieldError::new(field, kind));
            None
        }
    }
}
