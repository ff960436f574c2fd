//! The remote corpus store boundary.
//!
//! The session sees the remote side through a narrow capability: one
//! bootstrap fetch plus two fire-and-forget notifications mirroring local
//! mutations. Notifications are optimistic: the local index is
//! already updated when they fire, nothing retries, and a failure never
//! rolls the local mutation back; it is only logged so an operator can see
//! the divergence.

mod http;

use std::future::Future;

use thiserror::Error;

use crate::corpus::WordEntry;

pub use http::HttpStore;

/// Errors at the remote boundary.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The corpus endpoint answered, but not with a usable word list
    /// (`ok` false, or `words` missing/malformed). The index stays
    /// unloaded.
    #[error("corpus snapshot was empty or malformed")]
    InvalidSnapshot,

    /// The request itself failed (connect, timeout, non-JSON body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The capability the session needs from a corpus store.
pub trait RemoteStore {
    /// Fetches the full entry snapshot for bootstrap.
    fn fetch_corpus(&self) -> impl Future<Output = Result<Vec<WordEntry>, RemoteError>> + Send;

    /// Mirrors a local insert; must return without waiting on the network.
    fn notify_add(&self, entry: &WordEntry);

    /// Mirrors a local removal; must return without waiting on the network.
    fn notify_remove(&self, word: &str);
}

/// A store that keeps everything in memory: the snapshot it will serve and
/// a record of every notification received. Serves tests and offline use.
///
/// # Examples
///
/// ```rust
/// use wortschatz::corpus::WordEntry;
/// use wortschatz::remote::{InMemoryStore, RemoteStore};
///
/// # tokio_test::block_on(async {
/// let store = InMemoryStore::with_snapshot(vec![WordEntry::new("Anton")]);
/// let words = store.fetch_corpus().await.expect("snapshot served");
/// assert_eq!(words.len(), 1);
///
/// store.notify_remove("Anton");
/// assert_eq!(store.removed(), vec!["Anton".to_string()]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<WordEntry>>,
    added: parking_lot::Mutex<Vec<WordEntry>>,
    removed: parking_lot::Mutex<Vec<String>>,
}

impl InMemoryStore {
    /// A store that will serve `snapshot` on fetch.
    #[must_use]
    pub fn with_snapshot(snapshot: Vec<WordEntry>) -> Self {
        Self {
            snapshot: Some(snapshot),
            ..Self::default()
        }
    }

    /// A store whose fetch fails like a malformed service reply.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Every entry passed to [`RemoteStore::notify_add`] so far.
    #[must_use]
    pub fn added(&self) -> Vec<WordEntry> {
        self.added.lock().clone()
    }

    /// Every word passed to [`RemoteStore::notify_remove`] so far.
    #[must_use]
    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().clone()
    }
}

impl RemoteStore for InMemoryStore {
    async fn fetch_corpus(&self) -> Result<Vec<WordEntry>, RemoteError> {
        self.snapshot.clone().ok_or(RemoteError::InvalidSnapshot)
    }

    fn notify_add(&self, entry: &WordEntry) {
        self.added.lock().push(entry.clone());
    }

    fn notify_remove(&self, word: &str) {
        self.removed.lock().push(word.to_string());
    }
}
