//! End-to-end tests of the editing session against the in-memory store.

use wortschatz::config::Config;
use wortschatz::corpus::WordEntry;
use wortschatz::remote::{InMemoryStore, RemoteError};
use wortschatz::session::Session;

fn snapshot() -> Vec<WordEntry> {
    vec![
        WordEntry::new("Anton"),
        WordEntry::new("Berta"),
        WordEntry::new("Cäsar").with_description("Feld&shy;herr"),
        WordEntry::new("Dora"),
        WordEntry::new("Emil"),
    ]
}

async fn loaded_session() -> Session<InMemoryStore> {
    let mut session = Session::new(Config::default(), InMemoryStore::with_snapshot(snapshot()));
    session.load().await.expect("snapshot accepted");
    session
}

#[tokio::test]
async fn failed_load_leaves_the_index_unloaded() {
    let mut session = Session::new(Config::default(), InMemoryStore::unavailable());
    let error = session.load().await.expect_err("no snapshot to serve");
    assert!(matches!(error, RemoteError::InvalidSnapshot));
    assert!(!session.index().is_loaded());
    assert!(session.update("Anton").is_blank());
}

#[tokio::test]
async fn load_reports_the_corpus_size() {
    let mut session = Session::new(Config::default(), InMemoryStore::with_snapshot(snapshot()));
    assert_eq!(session.load().await.expect("snapshot accepted"), 5);
}

#[tokio::test]
async fn matched_cursor_exposes_the_display_description() {
    let mut session = loaded_session().await;
    session.update("Cäsar");
    assert_eq!(session.current_description().as_deref(), Some("Feld|herr"));

    session.update("Caspar");
    assert_eq!(session.current_description(), None);
}

#[tokio::test]
async fn commit_splices_notifies_and_rematches() {
    let mut session = loaded_session().await;
    session.tags_mut().add("Name");
    session.update("Doris");
    assert!(!session.window().matched);

    assert!(session.commit("Vor|name"));

    assert!(session.window().matched);
    assert_eq!(session.index().len(), 6);
    let added = session_store(&session).added();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].word, "Doris");
    assert_eq!(added[0].description.as_deref(), Some("Vor&shy;name"));
    assert_eq!(added[0].tags, vec!["Name".to_string()]);
}

#[tokio::test]
async fn commit_of_a_present_word_is_a_silent_no_op() {
    let mut session = loaded_session().await;
    session.update("berta");
    assert!(session.window().matched);

    assert!(!session.commit(""));
    assert_eq!(session.index().len(), 5);
    assert!(session_store(&session).added().is_empty());
}

#[tokio::test]
async fn commit_with_an_empty_cursor_is_rejected() {
    let mut session = loaded_session().await;
    session.update("");
    assert!(!session.commit("verwaiste Beschreibung"));
    assert!(session_store(&session).added().is_empty());
}

#[tokio::test]
async fn delete_of_an_absent_word_changes_nothing() {
    let mut session = loaded_session().await;
    assert!(!session.delete("Frieda"));
    assert_eq!(session.index().len(), 5);
    assert!(session_store(&session).removed().is_empty());
}

#[tokio::test]
async fn deleting_the_cursor_word_advances_to_the_successor() {
    let mut session = loaded_session().await;
    session.update("Berta");

    assert!(session.delete("Berta"));
    assert_eq!(session.cursor(), "Cäsar");
    assert!(session.window().matched);
    assert_eq!(session_store(&session).removed(), vec!["Berta".to_string()]);
}

#[tokio::test]
async fn deleting_the_last_word_falls_back_to_the_predecessor() {
    let mut session = loaded_session().await;
    session.update("Emil");

    assert!(session.delete("Emil"));
    assert_eq!(session.cursor(), "Dora");
    assert!(session.window().matched);
}

#[tokio::test]
async fn deleting_a_neighbor_keeps_the_cursor_in_place() {
    let mut session = loaded_session().await;
    session.update("Berta");

    assert!(session.delete("Dora"));
    assert_eq!(session.cursor(), "Berta");
    assert_eq!(session.index().len(), 4);
}

#[tokio::test]
async fn scroll_browses_neighbors_through_the_same_pipeline() {
    let mut session = loaded_session().await;
    session.update("Anton");

    // Default sensitivity is 2: a delta of 4 moves two entries down.
    assert_eq!(session.scroll(4.0), Some("Cäsar"));
    assert!(session.window().matched);

    // Scrolling far past the start clamps to the first entry.
    assert_eq!(session.scroll(-100.0), Some("Anton"));
}

#[tokio::test]
async fn scroll_without_a_position_is_inert() {
    let mut session = loaded_session().await;
    session.update("");
    assert_eq!(session.scroll(4.0), None);
}

/// The in-memory store is owned by the session; reach it for assertions.
fn session_store(session: &Session<InMemoryStore>) -> &InMemoryStore {
    session.remote()
}
