//! The context window: the alphabetic neighborhood around the cursor word.
//!
//! Recomputed in full on every cursor change from a single
//! [`CorpusIndex::closest_position`] lookup; the window holds no state of
//! its own between recomputations. Besides the raw predecessor/successor
//! slices it exposes the fixed-slot projection a renderer needs:
//! predecessor slots are right-aligned (the nearest neighbor sits directly
//! left of the input, leading slots blank when the corpus runs out),
//! successor slots are left-aligned and blank from the end.

use crate::collate::Collator;
use crate::corpus::{CorpusIndex, WordEntry};

/// The bounded neighborhood of a cursor word inside the corpus.
///
/// # Examples
///
/// ```rust
/// use wortschatz::collate::GermanPhonebook;
/// use wortschatz::corpus::{CorpusIndex, WordEntry};
/// use wortschatz::window::ContextWindow;
///
/// let mut index = CorpusIndex::new(GermanPhonebook);
/// index.load(["Anton", "Berta", "Dora"].map(WordEntry::new).to_vec());
///
/// let window = ContextWindow::around(&index, "Berta", 3);
/// assert!(window.matched);
/// assert_eq!(window.predecessors[0].word, "Anton");
/// assert_eq!(window.successors[0].word, "Dora");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    /// Slot of the cursor word in the corpus (`closest_position`), `None`
    /// for an empty cursor or an unloaded index.
    pub position: Option<usize>,
    /// Whether the cursor word is present (search-equal) at `position`.
    pub matched: bool,
    /// Up to `span` entries preceding the cursor slot, oldest first.
    pub predecessors: Vec<WordEntry>,
    /// Up to `span` entries following the cursor slot (excluding the
    /// matched entry itself).
    pub successors: Vec<WordEntry>,
    span: usize,
}

impl ContextWindow {
    /// A window with no neighbors and no match.
    #[must_use]
    pub const fn empty(span: usize) -> Self {
        Self {
            position: None,
            matched: false,
            predecessors: Vec::new(),
            successors: Vec::new(),
            span,
        }
    }

    /// Computes the window of `span` neighbors around `word`.
    #[must_use]
    pub fn around<C: Collator>(index: &CorpusIndex<C>, word: &str, span: usize) -> Self {
        let Some(position) = index.closest_position(word) else {
            return Self::empty(span);
        };
        let entries = index.entries();
        let matched = entries
            .get(position)
            .is_some_and(|entry| index.collator().search_eq(&entry.word, word));

        let predecessors = entries[position.saturating_sub(span)..position].to_vec();
        let start = if matched { position + 1 } else { position };
        let end = (start + span).min(entries.len());
        let successors = entries[start..end].to_vec();

        Self {
            position: Some(position),
            matched,
            predecessors,
            successors,
            span,
        }
    }

    /// The configured slot count per side.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.span
    }

    /// Whether the window shows nothing at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.predecessors.is_empty() && self.successors.is_empty() && !self.matched
    }

    /// The predecessor words projected onto `span` fixed slots,
    /// right-aligned: leading slots are `None` when fewer than `span`
    /// predecessors exist.
    #[must_use]
    pub fn predecessor_slots(&self) -> Vec<Option<&str>> {
        let blanks = self.span.saturating_sub(self.predecessors.len());
        let mut slots: Vec<Option<&str>> = vec![None; blanks];
        slots.extend(
            self.predecessors
                .iter()
                .map(|entry| Some(entry.word.as_str())),
        );
        slots.truncate(self.span);
        slots
    }

    /// The successor words projected onto `span` fixed slots,
    /// left-aligned: trailing slots are `None` when fewer than `span`
    /// successors exist.
    #[must_use]
    pub fn successor_slots(&self) -> Vec<Option<&str>> {
        let mut slots: Vec<Option<&str>> = self
            .successors
            .iter()
            .map(|entry| Some(entry.word.as_str()))
            .collect();
        slots.resize(self.span, None);
        slots.truncate(self.span);
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::GermanPhonebook;
    use rstest::rstest;

    fn reference_index() -> CorpusIndex<GermanPhonebook> {
        let mut index = CorpusIndex::new(GermanPhonebook);
        index.load(
            ["Anton", "Berta", "Cäsar", "Dora", "Emil", "Frieda", "Gustav"]
                .map(WordEntry::new)
                .to_vec(),
        );
        index
    }

    #[rstest]
    fn matched_word_is_excluded_from_both_sides() {
        let window = ContextWindow::around(&reference_index(), "Dora", 3);
        assert!(window.matched);
        assert_eq!(window.position, Some(3));
        let left: Vec<&str> = window.predecessors.iter().map(|e| e.word.as_str()).collect();
        let right: Vec<&str> = window.successors.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(left, vec!["Anton", "Berta", "Cäsar"]);
        assert_eq!(right, vec!["Emil", "Frieda", "Gustav"]);
    }

    #[rstest]
    fn unmatched_word_keeps_the_slot_entry_on_the_right() {
        let window = ContextWindow::around(&reference_index(), "Doris", 3);
        assert!(!window.matched);
        assert_eq!(window.position, Some(4));
        let right: Vec<&str> = window.successors.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(right, vec!["Emil", "Frieda", "Gustav"]);
    }

    #[rstest]
    fn first_word_has_no_predecessors() {
        let window = ContextWindow::around(&reference_index(), "Anton", 3);
        assert!(window.matched);
        assert!(window.predecessors.is_empty());
        assert_eq!(window.successors.len(), 3);
    }

    #[rstest]
    fn empty_query_yields_a_blank_window() {
        let window = ContextWindow::around(&reference_index(), "", 3);
        assert_eq!(window.position, None);
        assert!(window.is_blank());
    }

    #[rstest]
    fn predecessor_slots_blank_from_the_left() {
        let window = ContextWindow::around(&reference_index(), "Berta", 3);
        assert_eq!(window.predecessor_slots(), vec![None, None, Some("Anton")]);
    }

    #[rstest]
    fn successor_slots_blank_from_the_right() {
        let window = ContextWindow::around(&reference_index(), "Frieda", 3);
        assert_eq!(window.successor_slots(), vec![Some("Gustav"), None, None]);
    }

    #[rstest]
    fn span_is_configuration_not_algorithm() {
        let window = ContextWindow::around(&reference_index(), "Dora", 5);
        assert_eq!(window.predecessors.len(), 3);
        assert_eq!(window.successors.len(), 3);
        assert_eq!(window.predecessor_slots().len(), 5);
    }
}
