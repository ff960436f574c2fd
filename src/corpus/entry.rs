//! A single curated word.

use serde::{Deserialize, Serialize};

/// One entry of the corpus: the word itself, an optional description, and
/// the tag labels attached when it was inserted.
///
/// The serde shape is the wire shape of the corpus service: `description`
/// and `tags` may be absent, in which case they default to `None` and an
/// empty list.
///
/// # Examples
///
/// ```rust
/// use wortschatz::corpus::WordEntry;
///
/// let entry = WordEntry::new("Anton").with_description("ein Vorname");
/// assert_eq!(entry.word, "Anton");
/// assert!(entry.tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The curated word; non-empty, unique within the corpus under the
    /// search comparison.
    pub word: String,
    /// Stored description text. May contain the soft-break marker; see
    /// [`crate::text`] for the display translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Labels attached to the entry at insertion time.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WordEntry {
    /// Creates an entry with no description and no tags.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: None,
            tags: Vec::new(),
        }
    }

    /// Sets the stored description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tag labels.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
