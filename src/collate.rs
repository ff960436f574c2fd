//! Locale-aware string comparison for corpus ordering.
//!
//! The index needs two related comparisons: a *sort* comparison that is a
//! true total order (binary search and the adjacency invariant depend on
//! antisymmetry and transitivity), and a *search* comparison used to decide
//! whether a typed word already exists. The search comparison may be coarser
//! than the sort comparison (it may map more pairs to `Equal`), but when it
//! reports `Less` or `Greater`, the sort comparison must agree in sign.
//!
//! Collation weights themselves are an external concern: anything that
//! satisfies [`Collator`] can drive the index. The shipped
//! [`GermanPhonebook`] implements dictionary/phonebook ordering in the
//! DIN 5007-2 style (ä→ae, ö→oe, ü→ue, ß→ss), case-insensitive and
//! base-letter-insensitive for the remaining Latin diacritics, so "Ärger"
//! sorts next to "Arger" rather than after "Zyklus".
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use wortschatz::collate::{Collator, GermanPhonebook};
//!
//! let collator = GermanPhonebook;
//! assert_eq!(collator.compare_search("Straße", "strasse"), Ordering::Equal);
//! assert_eq!(collator.compare_sort("Ärger", "Argument"), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// A two-mode locale comparator.
///
/// Implementations must guarantee:
///
/// - `compare_sort` is a total order (antisymmetric, transitive);
/// - `compare_search` is never finer than `compare_sort`: whenever it
///   returns `Less` or `Greater`, `compare_sort` has the same sign.
pub trait Collator {
    /// Strict comparison used to keep the corpus sequence ordered.
    fn compare_sort(&self, a: &str, b: &str) -> Ordering;

    /// Comparison used for positional lookups; may treat more pairs as
    /// equal than [`Collator::compare_sort`] does.
    fn compare_search(&self, a: &str, b: &str) -> Ordering;

    /// Whether two words are the same word under the search comparison.
    fn search_eq(&self, a: &str, b: &str) -> bool {
        self.compare_search(a, b) == Ordering::Equal
    }
}

/// German dictionary/phonebook collation (DIN 5007-2 style).
///
/// Comparison is two-pass, in the manner of collation algorithms that
/// resolve primary differences before tiebreaking: the primary pass
/// compares *folded keys* (umlaut expansion, ß→ss, case fold, base-letter
/// fold); the sort comparison then breaks primary ties with a plain
/// codepoint comparison so that distinct spellings still order
/// deterministically. The search comparison stops after the primary pass,
/// which is exactly the coarseness the corpus needs: "Arger" and "ärger"
/// name the same slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GermanPhonebook;

impl GermanPhonebook {
    /// Returns the folded key a word is collated under.
    ///
    /// The key is what the primary comparison pass sees; two words with the
    /// same key are search-equal.
    #[must_use]
    pub fn sort_key(word: &str) -> String {
        let mut key = String::with_capacity(word.len());
        for ch in word.chars() {
            append_folded(ch, &mut key);
        }
        key
    }
}

impl Collator for GermanPhonebook {
    fn compare_sort(&self, a: &str, b: &str) -> Ordering {
        Self::sort_key(a)
            .cmp(&Self::sort_key(b))
            .then_with(|| a.cmp(b))
    }

    fn compare_search(&self, a: &str, b: &str) -> Ordering {
        Self::sort_key(a).cmp(&Self::sort_key(b))
    }
}

fn append_folded(ch: char, key: &mut String) {
    match ch {
        'ä' | 'Ä' | 'æ' | 'Æ' => key.push_str("ae"),
        'ö' | 'Ö' | 'œ' | 'Œ' => key.push_str("oe"),
        'ü' | 'Ü' => key.push_str("ue"),
        'ß' | 'ẞ' => key.push_str("ss"),
        _ => {
            for lower in ch.to_lowercase() {
                key.push(base_letter(lower));
            }
        }
    }
}

/// Maps a lowercase Latin letter with a diacritic to its base letter.
fn base_letter(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ø' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
