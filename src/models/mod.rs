//! Data structures for contacts: canonical records, patches, and read views.

pub mod contact;
pub mod view;

pub use contact::{ContactPatch, ContactRecord};
pub use view::{ContactView, PagedContactList};
