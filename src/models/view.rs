//! Read-side views: a stored contact with metadata, and paged lists.

use super::contact::{ContactPatch, ContactRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact as returned to callers: the normalized record plus
/// server-assigned metadata.
///
/// `id` and `created_at` are assigned once and never change. `updated_at`
/// stays `None` until the first successful patch and is refreshed on every
/// one after that. Views are built through [`ContactView::new`] and mutated
/// only through [`ContactView::apply_patch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactView {
    /// Unique identifier, positive, assigned at creation
    pub id: u64,

    /// The normalized contact data
    #[serde(flatten)]
    pub contact: ContactRecord,

    /// When the contact was created
    pub created_at: DateTime<Utc>,

    /// When the contact was last updated, `None` until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactView {
    /// Wrap a freshly created record with its metadata.
    pub fn new(id: u64, contact: ContactRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            contact,
            created_at,
            updated_at: None,
        }
    }

    /// Apply a validated patch and stamp the update time.
    pub fn apply_patch(&mut self, patch: &ContactPatch, now: DateTime<Utc>) {
        patch.apply(&mut self.contact);
        self.updated_at = Some(now);
    }
}

/// One page of contacts plus pagination bookkeeping.
///
/// Invariant: `items.len() <= per_page`. `total` counts contacts across all
/// pages, `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedContactList {
    /// Contacts on the current page
    pub items: Vec<ContactView>,

    /// Total number of contacts across all pages
    pub total: u64,

    /// Current page index, 1-based
    pub page: u32,

    /// Page size
    pub per_page: u32,
}

impl PagedContactList {
    /// Slice one page out of a full collection.
    ///
    /// A `page` of 0 is treated as 1. Pages past the end yield an empty
    /// `items` list with `total` still covering the whole collection.
    pub fn paginate(all: &[ContactView], page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let start = (page as usize - 1).saturating_mul(per_page as usize);

        let items: Vec<ContactView> = all
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Self {
            items,
            total: all.len() as u64,
            page,
            per_page,
        }
    }
}
