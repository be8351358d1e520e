//! Create pipeline: all required fields must normalize.

use super::{run_rule, ContactDraft};
use crate::config::PipelineConfig;
use crate::domain::{ContactField, EmailAddress, PersonName, PhoneNumber, TagSet};
use crate::error::{ValidationErrors, ValidationResult};
use crate::models::ContactRecord;
use tracing::{debug, trace};

/// Validate and normalize raw input into a [`ContactRecord`].
///
/// `first_name`, `last_name`, `email`, and `phone` are required; a missing
/// required field fails through its own rule with empty-value semantics
/// (names report `TooShort`, email `InvalidEmail`, phone
/// `InsufficientDigits`). `company` passes through unchanged, `tags` defaults
/// to the empty set, and `is_favorite` defaults to `false`.
///
/// All field failures are collected before returning; a rejected call
/// reports every invalid field at once.
///
/// # Example
///
/// ```
/// use contact_normalizer::config::PipelineConfig;
/// use contact_normalizer::pipeline::{validate_create, ContactDraft};
///
/// let draft = ContactDraft {
///     first_name: Some("juan carlos".to_string()),
///     last_name: Some("perez".to_string()),
///     email: Some("juan@example.com".to_string()),
///     phone: Some("300-123-4567".to_string()),
///     ..Default::default()
/// };
///
/// let record = validate_create(&draft, &PipelineConfig::default()).unwrap();
/// assert_eq!(record.first_name.as_str(), "Juan Carlos");
/// assert_eq!(record.phone.as_str(), "+57 300 123 4567");
/// ```
pub fn validate_create(
    draft: &ContactDraft,
    config: &PipelineConfig,
) -> ValidationResult<ContactRecord> {
    let mut errors = Vec::new();

    let first_name = run_rule(
        &mut errors,
        ContactField::FirstName,
        PersonName::parse(draft.first_name.as_deref().unwrap_or_default()),
    );
    let last_name = run_rule(
        &mut errors,
        ContactField::LastName,
        PersonName::parse(draft.last_name.as_deref().unwrap_or_default()),
    );
    let email = run_rule(
        &mut errors,
        ContactField::Email,
        EmailAddress::parse(draft.email.as_deref().unwrap_or_default()),
    );
    let phone = run_rule(
        &mut errors,
        ContactField::Phone,
        PhoneNumber::normalize(draft.phone.as_deref().unwrap_or_default(), &config.country_code),
    );
    let tags = match &draft.tags {
        Some(raw) => run_rule(
            &mut errors,
            ContactField::Tags,
            TagSet::normalize(raw, config.max_tags, config.tag_overflow),
        ),
        None => Some(TagSet::default()),
    };

    match (first_name, last_name, email, phone, tags) {
        (Some(first_name), Some(last_name), Some(email), Some(phone), Some(tags)) => {
            trace!(name = %first_name, "contact create accepted");
            Ok(ContactRecord {
                first_name,
                last_name,
                email,
                phone,
                company: draft.company.clone(),
                tags,
                is_favorite: draft.is_favorite.unwrap_or(false),
            })
        }
        _ => {
            debug!(failed_fields = errors.len(), "contact create rejected");
            Err(ValidationErrors::new(errors))
        }
    }
}
