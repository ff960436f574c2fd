//! The sorted corpus index.
//!
//! An ordered sequence of [`WordEntry`] kept sorted under a [`Collator`]'s
//! sort comparison, with no two entries search-equal. The interesting
//! operation is [`CorpusIndex::closest_position`]: a binary-search variant
//! that returns the slot a word occupies *or would occupy*, so the same
//! lookup drives existence checks, insertion, and the neighbor window.
//!
//! The index distinguishes an **unloaded** state (no snapshot accepted yet)
//! from a loaded-but-empty corpus: queries on an unloaded index return
//! `None` rather than failing, and mutations are rejected.
//!
//! # Overview
//!
//! | Operation          | Complexity      |
//! |--------------------|-----------------|
//! | `load`             | O(n log n)      |
//! | `closest_position` | O(log n)        |
//! | `exact_position`   | O(log n)        |
//! | `insert`           | O(n) (splice)   |
//! | `remove`           | O(n) (splice)   |
//!
//! Descriptions of entries already in the corpus are never rewritten in
//! place; replacing one is modeled as remove + insert.

use std::cmp::Ordering;

use crate::collate::Collator;
use crate::corpus::WordEntry;

/// The locale-sorted sequence of corpus entries.
///
/// # Examples
///
/// ```rust
/// use wortschatz::collate::GermanPhonebook;
/// use wortschatz::corpus::{CorpusIndex, WordEntry};
///
/// let mut index = CorpusIndex::new(GermanPhonebook);
/// index.load(vec![WordEntry::new("Berta"), WordEntry::new("Anton")]);
///
/// assert_eq!(index.exact_position("anton"), Some(0));
/// assert_eq!(index.closest_position("Dora"), Some(2));
/// assert!(index.insert(WordEntry::new("Cäsar")));
/// assert_eq!(index.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusIndex<C: Collator> {
    collator: C,
    /// `None` until a snapshot has been accepted.
    entries: Option<Vec<WordEntry>>,
}

impl<C: Collator> CorpusIndex<C> {
    /// Creates an unloaded index driven by `collator`.
    pub const fn new(collator: C) -> Self {
        Self {
            collator,
            entries: None,
        }
    }

    /// Replaces the whole sequence with `entries`, sorted under the sort
    /// comparison; search-equal duplicates beyond the first are dropped to
    /// restore uniqueness.
    pub fn load(&mut self, mut entries: Vec<WordEntry>) {
        entries.sort_by(|a, b| self.collator.compare_sort(&a.word, &b.word));
        entries.dedup_by(|b, a| self.collator.search_eq(&a.word, &b.word));
        self.entries = Some(entries);
    }

    /// Discards any loaded snapshot, returning to the unloaded state.
    pub fn unload(&mut self) {
        self.entries = None;
    }

    /// Whether a snapshot has been accepted. An unloaded index answers all
    /// queries with "no result".
    pub const fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Number of entries; 0 while unloaded.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    /// Whether the index holds no entries (unloaded or loaded-empty).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ordered entries; empty while unloaded.
    pub fn entries(&self) -> &[WordEntry] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// The entry at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&WordEntry> {
        self.entries().get(position)
    }

    /// The collator driving this index.
    pub const fn collator(&self) -> &C {
        &self.collator
    }

    /// Returns the slot in `[0, len]` where `word` is, or would have to be
    /// inserted to keep the sequence ordered; `None` when `word` is empty
    /// or the index is unloaded.
    ///
    /// Binary search over `[0, len)` under the search comparison, with an
    /// early return as soon as a probe sits directly on the boundary: when
    /// `word` is less than the probe and greater than its left neighbor
    /// (or the probe is the first entry), that probe is the slot; the
    /// mirrored check applies on the right. Equality returns the probe
    /// itself, so a matched word behaves exactly like an exact binary
    /// search. Probes never leave `[0, len)`.
    pub fn closest_position(&self, word: &str) -> Option<usize> {
        let entries = self.entries.as_deref()?;
        if word.is_empty() {
            return None;
        }
        let mut lo = 0;
        let mut hi = entries.len();
        while lo < hi {
            let pos = lo + (hi - lo) / 2;
            match self.collator.compare_search(word, &entries[pos].word) {
                Ordering::Less => {
                    if pos == 0
                        || self.collator.compare_search(word, &entries[pos - 1].word)
                            == Ordering::Greater
                    {
                        return Some(pos);
                    }
                    hi = pos;
                }
                Ordering::Greater => {
                    if pos + 1 == entries.len()
                        || self.collator.compare_search(word, &entries[pos + 1].word)
                            == Ordering::Less
                    {
                        return Some(pos + 1);
                    }
                    lo = pos + 1;
                }
                Ordering::Equal => return Some(pos),
            }
        }
        Some(lo)
    }

    /// The position of `word` if it is present, `None` otherwise (also for
    /// empty queries and unloaded indexes). Used where a miss must stay a
    /// miss: removal never falls back to an insertion slot.
    pub fn exact_position(&self, word: &str) -> Option<usize> {
        let entries = self.entries.as_deref()?;
        if word.is_empty() {
            return None;
        }
        entries
            .binary_search_by(|entry| self.collator.compare_search(&entry.word, word))
            .ok()
    }

    /// Splices `entry` into its sorted slot and returns `true`, or returns
    /// `false` without touching the sequence when a search-equal word is
    /// already present (uniqueness guard), the word is empty, or the index
    /// is unloaded.
    pub fn insert(&mut self, entry: WordEntry) -> bool {
        let Some(position) = self.closest_position(&entry.word) else {
            return false;
        };
        let Some(entries) = self.entries.as_mut() else {
            return false;
        };
        if entries
            .get(position)
            .is_some_and(|occupant| self.collator.search_eq(&occupant.word, &entry.word))
        {
            return false;
        }
        entries.insert(position, entry);
        true
    }

    /// Removes the entry search-equal to `word` and returns `true`, or
    /// returns `false` when no such entry exists.
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(position) = self.closest_position(word) else {
            return false;
        };
        let Some(entries) = self.entries.as_mut() else {
            return false;
        };
        if entries
            .get(position)
            .is_some_and(|occupant| self.collator.search_eq(&occupant.word, word))
        {
            entries.remove(position);
            true
        } else {
            false
        }
    }
}
