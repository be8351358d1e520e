//! Update pipeline: any subset of fields, absent means unchanged.

use super::{run_rule, ContactDraft};
use crate::config::PipelineConfig;
use crate::domain::{ContactField, EmailAddress, PersonName, PhoneNumber, TagSet};
use crate::error::{ValidationErrors, ValidationResult};
use crate::models::ContactPatch;
use tracing::{debug, trace};

/// Validate and normalize a partial update into a [`ContactPatch`].
///
/// Each field present in the draft runs the same rule the create pipeline
/// uses, including the configured country code for phones. Absent fields are
/// omitted from the patch entirely, so the caller's merge step leaves the
/// stored value untouched. A field that is present but fails its rule - an
/// empty `first_name`, say - is a validation error, not a no-op.
///
/// All field failures are collected before returning; no partial patch is
/// ever produced.
///
/// # Example
///
/// ```
/// use contact_normalizer::config::PipelineConfig;
/// use contact_normalizer::pipeline::{validate_update, ContactDraft};
///
/// let draft = ContactDraft {
///     company: Some("Acme".to_string()),
///     ..Default::default()
/// };
///
/// let patch = validate_update(&draft, &PipelineConfig::default()).unwrap();
/// assert_eq!(patch.company.as_deref(), Some("Acme"));
/// assert!(patch.first_name.is_none());
/// ```
pub fn validate_update(
    draft: &ContactDraft,
    config: &PipelineConfig,
) -> ValidationResult<ContactPatch> {
    let mut errors = Vec::new();

    let first_name = draft
        .first_name
        .as_deref()
        .and_then(|raw| run_rule(&mut errors, ContactField::FirstName, PersonName::parse(raw)));
    let last_name = draft
        .last_name
        .as_deref()
        .and_then(|raw| run_rule(&mut errors, ContactField::LastName, PersonName::parse(raw)));
    let email = draft
        .email
        .as_deref()
        .and_then(|raw| run_rule(&mut errors, ContactField::Email, EmailAddress::parse(raw)));
    let phone = draft.phone.as_deref().and_then(|raw| {
        run_rule(
            &mut errors,
            ContactField::Phone,
            PhoneNumber::normalize(raw, &config.country_code),
        )
    });
    let tags = draft.tags.as_ref().and_then(|raw| {
        run_rule(
            &mut errors,
            ContactField::Tags,
            TagSet::normalize(raw, config.max_tags, config.tag_overflow),
        )
    });

    if !errors.is_empty() {
        debug!(failed_fields = errors.len(), "contact update rejected");
        return Err(ValidationErrors::new(errors));
    }

    trace!("contact update patch accepted");
    Ok(ContactPatch {
        first_name,
        last_name,
        email,
        phone,
        company: draft.company.clone(),
        tags,
        is_favorite: draft.is_favorite,
    })
}
