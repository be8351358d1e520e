//! Canonical contact record and patch types.

use crate::domain::{EmailAddress, PersonName, PhoneNumber, TagSet};
use serde::{Deserialize, Serialize};

/// A fully normalized contact.
///
/// Every field holds its canonical form: names are title-cased, the phone
/// number is in grouped `+<cc>` format, and tags are lowercase, deduplicated,
/// and capped. A `ContactRecord` is produced by
/// [`validate_create`](crate::pipeline::validate_create); the value-object
/// fields make it impossible to hold a non-canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// First name, title-cased
    pub first_name: PersonName,

    /// Last name, title-cased
    pub last_name: PersonName,

    /// Email address
    pub email: EmailAddress,

    /// Phone number in canonical grouped form
    pub phone: PhoneNumber,

    /// Company the contact works at, unconstrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Categorization tags, lowercase and deduplicated
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,

    /// Whether the contact is marked as a favorite
    #[serde(default)]
    pub is_favorite: bool,
}

impl ContactRecord {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A partial contact update.
///
/// `None` means "leave the stored value unchanged" - a field absent from the
/// raw input never appears in the patch, so the merge step can distinguish
/// "not sent" from "sent with a value". Produced by
/// [`validate_update`](crate::pipeline::validate_update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<PersonName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<PersonName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl ContactPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.tags.is_none()
            && self.is_favorite.is_none()
    }

    /// Merge this patch onto a stored record, field by field. Fields the
    /// patch does not carry are left untouched.
    pub fn apply(&self, record: &mut ContactRecord) {
        if let Some(first_name) = &self.first_name {
            record.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            record.phone = phone.clone();
        }
        if let Some(company) = &self.company {
            record.company = Some(company.clone());
        }
        if let Some(tags) = &self.tags {
            record.tags = tags.clone();
        }
        if let Some(is_favorite) = self.is_favorite {
            record.is_favorite = is_favorite;
        }
    }
}
