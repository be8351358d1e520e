//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact field values: person
//! names, email addresses, phone numbers, and tag sets. Each value object
//! normalizes and validates at construction time, so an invalid or
//! non-canonical value cannot be represented in the system.

pub mod email;
pub mod field;
pub mod name;
pub mod phone;
pub mod tags;

pub use email::EmailAddress;
pub use field::ContactField;
pub use name::{PersonName, NAME_MAX_LEN, NAME_MIN_LEN};
pub use phone::{PhoneNumber, PHONE_LOCAL_DIGITS};
pub use tags::{ParseTagOverflowError, TagOverflow, TagSet, DEFAULT_MAX_TAGS};
