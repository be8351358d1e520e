//! Contact Normalizer - field-level normalization and validation for contact
//! records.
//!
//! This library turns raw, untrusted contact input into canonical records:
//! names are trimmed and title-cased, phone numbers are reduced to their
//! digits and reformatted under a configurable country code, and tags are
//! lower-cased, deduplicated, and capped. It is purely functional - no I/O,
//! no shared state - and is meant to sit behind an API layer that handles
//! transport, persistence, and pagination bookkeeping.
//!
//! # Architecture
//!
//! - **domain**: value objects for names, emails, phones, and tag sets;
//!   invalid values cannot be constructed
//! - **error**: field-tagged failures aggregated per validation call
//! - **config**: pipeline settings (country code, tag cap and overflow
//!   policy), loadable from environment variables
//! - **models**: canonical records, patches, and read-side views
//! - **pipeline**: the `validate_create` / `validate_update` entry points
//!
//! # Example
//!
//! ```
//! use contact_normalizer::{validate_create, ContactDraft, PipelineConfig};
//!
//! let draft = ContactDraft {
//!     first_name: Some("  juan carlos  ".to_string()),
//!     last_name: Some("PEREZ".to_string()),
//!     email: Some("juan@example.com".to_string()),
//!     phone: Some("+57-300-123-4567".to_string()),
//!     tags: Some(vec!["Work".to_string(), "work ".to_string()]),
//!     ..Default::default()
//! };
//!
//! let record = validate_create(&draft, &PipelineConfig::default()).unwrap();
//! assert_eq!(record.first_name.as_str(), "Juan Carlos");
//! assert_eq!(record.last_name.as_str(), "Perez");
//! assert_eq!(record.phone.as_str(), "+57 300 123 4567");
//! assert_eq!(record.tags.as_slice(), ["work"]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod pipeline;

pub use config::{PipelineConfig, DEFAULT_COUNTRY_CODE};
pub use domain::{
    ContactField, EmailAddress, PersonName, PhoneNumber, TagOverflow, TagSet, DEFAULT_MAX_TAGS,
};
pub use error::{
    ConfigError, ConfigResult, FieldError, FieldErrorKind, ValidationErrors, ValidationResult,
};
pub use models::{ContactPatch, ContactRecord, ContactView, PagedContactList};
pub use pipeline::{validate_create, validate_update, ContactDraft};
