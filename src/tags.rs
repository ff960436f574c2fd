//! Tag labels attached to the next inserted word.
//!
//! A small insertion-ordered set: adding a label already present is a
//! no-op, removal is by label. The set lives independently of any single
//! entry; an external collaborator persists and restores it, and restored
//! collections come back sorted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity before the labels spill to the heap; tag lists are
/// expected to stay tiny.
const INLINE_TAGS: usize = 8;

/// An insertion-ordered set of tag labels.
///
/// # Examples
///
/// ```rust
/// use wortschatz::tags::TagSet;
///
/// let mut tags = TagSet::new();
/// assert!(tags.add("Name"));
/// assert!(!tags.add("Name"));
/// assert_eq!(tags.snapshot(), vec!["Name".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    labels: SmallVec<[String; INLINE_TAGS]>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            labels: SmallVec::new_const(),
        }
    }

    /// Rebuilds the set from a persisted label list: duplicates and empty
    /// labels are dropped and the result is sorted.
    #[must_use]
    pub fn restore(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut set = Self::new();
        for label in labels {
            set.add(label);
        }
        set.labels.sort();
        set
    }

    /// Adds a label; returns `false` (no-op) when the label is empty or
    /// already present.
    pub fn add(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label.is_empty() || self.labels.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Removes a label by value; returns `false` when it was not present.
    pub fn remove(&mut self, label: &str) -> bool {
        let Some(position) = self.labels.iter().position(|known| known == label) else {
            return false;
        };
        self.labels.remove(position);
        true
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no labels are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// An owned copy of the labels, for attaching to a new entry.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.labels.to_vec()
    }
}
