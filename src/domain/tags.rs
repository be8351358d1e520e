//! TagSet value object.

use crate::error::FieldErrorKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// Default cap on the number of tags per contact.
pub const DEFAULT_MAX_TAGS: usize = 5;

/// What to do when a deduplicated tag set exceeds the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagOverflow {
    /// Silently keep the first `max_tags` entries in sorted order.
    #[default]
    Truncate,
    /// Fail with `FieldErrorKind::TooManyTags`.
    Reject,
}

/// Error returned when parsing a [`TagOverflow`] from a string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tag overflow policy: {0} (expected 'truncate' or 'reject')")]
pub struct ParseTagOverflowError(String);

impl FromStr for TagOverflow {
    type Err = ParseTagOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "reject" => Ok(Self::Reject),
            other => Err(ParseTagOverflowError(other.to_string())),
        }
    }
}

/// A normalized set of contact tags.
///
/// Tags are trimmed, lower-cased, and deduplicated with set semantics. The
/// set is held in lexicographic order so that truncation under the cap is
/// deterministic. Entries that are empty after trimming are dropped.
///
/// # Example
///
/// ```
/// use contact_normalizer::domain::{TagOverflow, TagSet};
///
/// let tags = TagSet::normalize(["Work", "work ", "VIP"], 5, TagOverflow::Truncate).unwrap();
/// assert_eq!(tags.as_slice(), ["vip", "work"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Normalize a sequence of raw tags.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrorKind::TooManyTags` if the deduplicated set exceeds
    /// `max_tags` and the overflow policy is [`TagOverflow::Reject`].
    pub fn normalize<I, S>(
        raw: I,
        max_tags: usize,
        overflow: TagOverflow,
    ) -> Result<Self, FieldErrorKind>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = raw
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        if set.len() > max_tags && overflow == TagOverflow::Reject {
            return Err(FieldErrorKind::TooManyTags {
                count: set.len(),
                max: max_tags,
            });
        }

        Ok(Self(set.into_iter().take(max_tags).collect()))
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the set contains the given tag (exact, already-normalized
    /// form).
    pub fn contains(&self, tag: &str) -> bool {
        // Sorted invariant lets us binary-search
        self.0.binary_search_by(|t| t.as_str().cmp(tag)).is_ok()
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Get the tags as a slice, in sorted order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Convert into the underlying vector, in sorted order.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Serde support - serialize as a plain string array
impl Serialize for TagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from a string array, re-running normalization
// under the default cap and policy. Canonical input round-trips unchanged.
impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        TagSet::normalize(raw, DEFAULT_MAX_TAGS, TagOverflow::Truncate)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_trim_lowercase_dedup() {
        let tags =
            TagSet::normalize(["Work", "work ", " WORK"], 5, TagOverflow::Truncate).unwrap();
        assert_eq!(tags.as_slice(), ["work"]);
    }

    #[test]
    fn test_tags_sorted_order() {
        let tags = TagSet::normalize(["vip", "home", "work"], 5, TagOverflow::Truncate).unwrap();
        assert_eq!(tags.as_slice(), ["home", "vip", "work"]);
    }

    #[test]
    fn test_tags_truncate_is_deterministic() {
        let raw = ["Work", "work ", "Home", "HOME", "vip", "friend", "family"];
        let tags = TagSet::normalize(raw, 5, TagOverflow::Truncate).unwrap();

        assert_eq!(tags.len(), 5);
        // First five of the sorted deduplicated set
        assert_eq!(tags.as_slice(), ["family", "friend", "home", "vip", "work"]);
    }

    #[test]
    fn test_tags_reject_policy() {
        let raw = ["a", "b", "c", "d", "e", "f"];
        let result = TagSet::normalize(raw, 5, TagOverflow::Reject);
        assert_eq!(
            result,
            Err(FieldErrorKind::TooManyTags { count: 6, max: 5 })
        );
    }

    #[test]
    fn test_tags_reject_allows_exactly_max() {
        let raw = ["a", "b", "c", "d", "e"];
        let tags = TagSet::normalize(raw, 5, TagOverflow::Reject).unwrap();
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_tags_drops_empty_entries() {
        let tags = TagSet::normalize(["work", "  ", ""], 5, TagOverflow::Truncate).unwrap();
        assert_eq!(tags.as_slice(), ["work"]);
    }

    #[test]
    fn test_tags_empty_input() {
        let tags = TagSet::normalize(Vec::<String>::new(), 5, TagOverflow::Truncate).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tags_contains() {
        let tags = TagSet::normalize(["Work", "Home"], 5, TagOverflow::Truncate).unwrap();
        assert!(tags.contains("work"));
        assert!(tags.contains("home"));
        assert!(!tags.contains("vip"));
    }

    #[test]
    fn test_tags_idempotent() {
        let once = TagSet::normalize(
            ["Work", "Home", "VIP"],
            DEFAULT_MAX_TAGS,
            TagOverflow::Truncate,
        )
        .unwrap();
        let twice = TagSet::normalize(
            once.as_slice(),
            DEFAULT_MAX_TAGS,
            TagOverflow::Truncate,
        )
        .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tags_serialization() {
        let tags = TagSet::normalize(["b", "a"], 5, TagOverflow::Truncate).unwrap();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, "[\"a\",\"b\"]");
    }

    #[test]
    fn test_tags_deserialization_normalizes() {
        let tags: TagSet = serde_json::from_str("[\"Work\", \" home \"]").unwrap();
        assert_eq!(tags.as_slice(), ["home", "work"]);
    }

    #[test]
    fn test_tag_overflow_from_str() {
        assert_eq!("truncate".parse::<TagOverflow>(), Ok(TagOverflow::Truncate));
        assert_eq!("Reject".parse::<TagOverflow>(), Ok(TagOverflow::Reject));
        assert!("drop".parse::<TagOverflow>().is_err());
    }
}
