//! Scenario tests for the context window over a locale-sorted corpus.

use rstest::rstest;
use wortschatz::collate::GermanPhonebook;
use wortschatz::corpus::{CorpusIndex, WordEntry};
use wortschatz::window::ContextWindow;

fn reference_corpus() -> CorpusIndex<GermanPhonebook> {
    let mut index = CorpusIndex::new(GermanPhonebook);
    index.load(
        ["Anton", "Berta", "Cäsar", "Dora", "Emil", "Frieda", "Gustav"]
            .map(WordEntry::new)
            .to_vec(),
    );
    index
}

fn words(entries: &[WordEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.word.as_str()).collect()
}

#[rstest]
fn full_window_around_a_matched_middle_word() {
    let window = ContextWindow::around(&reference_corpus(), "Dora", 3);
    assert!(window.matched);
    assert_eq!(window.position, Some(3));
    assert_eq!(words(&window.predecessors), vec!["Anton", "Berta", "Cäsar"]);
    assert_eq!(words(&window.successors), vec!["Emil", "Frieda", "Gustav"]);
}

#[rstest]
fn first_word_has_an_empty_left_side() {
    let window = ContextWindow::around(&reference_corpus(), "Anton", 3);
    assert!(window.matched);
    assert!(window.predecessors.is_empty());
    assert_eq!(words(&window.successors), vec!["Berta", "Cäsar", "Dora"]);
}

#[rstest]
fn last_word_has_an_empty_right_side() {
    let window = ContextWindow::around(&reference_corpus(), "Gustav", 3);
    assert!(window.matched);
    assert_eq!(words(&window.predecessors), vec!["Dora", "Emil", "Frieda"]);
    assert!(window.successors.is_empty());
}

#[rstest]
fn empty_query_is_not_applicable() {
    let index = reference_corpus();
    assert_eq!(index.closest_position(""), None);
    let window = ContextWindow::around(&index, "", 3);
    assert!(window.is_blank());
    assert!(!window.matched);
}

#[rstest]
fn unmatched_prefix_lands_in_its_gap() {
    let window = ContextWindow::around(&reference_corpus(), "Casanova", 3);
    assert!(!window.matched);
    // "Cäsar" folds to "caesar", so "Casanova" slots after it.
    assert_eq!(window.position, Some(3));
    assert_eq!(words(&window.predecessors), vec!["Anton", "Berta", "Cäsar"]);
    assert_eq!(words(&window.successors), vec!["Dora", "Emil", "Frieda"]);
}

#[rstest]
fn accented_words_are_collated_with_their_base_forms() {
    let mut index = CorpusIndex::new(GermanPhonebook);
    index.load(
        ["Zyklus", "Ärger", "Öse", "Argument", "Arger", "Uebung", "Übung"]
            .map(WordEntry::new)
            .to_vec(),
    );
    // "Übung" and "Uebung" fold to the same key, so only one survives.
    assert_eq!(index.len(), 6);
    let order: Vec<&str> = index.entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(
        order,
        vec!["Ärger", "Arger", "Argument", "Öse", "Uebung", "Zyklus"]
    );
}

#[rstest]
#[case(3)]
#[case(5)]
fn span_only_changes_the_slot_count(#[case] span: usize) {
    let window = ContextWindow::around(&reference_corpus(), "Emil", span);
    assert_eq!(window.predecessor_slots().len(), span);
    assert_eq!(window.successor_slots().len(), span);
    assert_eq!(window.span(), span);
}
