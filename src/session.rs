//! The editing session: one struct owning every piece of interaction
//! state.
//!
//! All mutation happens synchronously inside the session's methods; the
//! remote notifications it fires are detached, so the local index and the
//! context window are always updated (and observable) before any network
//! response exists. Loading is the single suspending operation; callers
//! keep input disabled until it resolves, after which every lookup is
//! local.

use tracing::info;

use crate::collate::{Collator, GermanPhonebook};
use crate::config::Config;
use crate::corpus::{CorpusIndex, WordEntry};
use crate::remote::{RemoteError, RemoteStore};
use crate::tags::TagSet;
use crate::text;
use crate::window::ContextWindow;

/// A corpus editing session.
///
/// Generic over the remote store and the collator so tests can substitute
/// both; [`Session::new`] wires in the shipped [`GermanPhonebook`].
///
/// # Examples
///
/// ```rust
/// use wortschatz::config::Config;
/// use wortschatz::corpus::WordEntry;
/// use wortschatz::remote::InMemoryStore;
/// use wortschatz::session::Session;
///
/// # tokio_test::block_on(async {
/// let store = InMemoryStore::with_snapshot(vec![
///     WordEntry::new("Anton"),
///     WordEntry::new("Cäsar"),
/// ]);
/// let mut session = Session::new(Config::default(), store);
/// session.load().await.expect("snapshot accepted");
///
/// let window = session.update("Berta");
/// assert!(!window.matched);
/// assert_eq!(window.successors[0].word, "Cäsar");
/// # });
/// ```
pub struct Session<R: RemoteStore, C: Collator = GermanPhonebook> {
    config: Config,
    index: CorpusIndex<C>,
    remote: R,
    tags: TagSet,
    cursor: String,
    window: ContextWindow,
}

impl<R: RemoteStore> Session<R, GermanPhonebook> {
    /// Creates a session with the shipped German phonebook collation.
    pub fn new(config: Config, remote: R) -> Self {
        Self::with_collator(config, GermanPhonebook, remote)
    }
}

impl<R: RemoteStore, C: Collator> Session<R, C> {
    /// Creates a session driven by a custom collator.
    pub fn with_collator(config: Config, collator: C, remote: R) -> Self {
        let window = ContextWindow::empty(config.window_span);
        Self {
            index: CorpusIndex::new(collator),
            remote,
            tags: TagSet::new(),
            cursor: String::new(),
            window,
            config,
        }
    }

    /// Fetches the corpus snapshot and establishes the sort order.
    ///
    /// On failure the index is left unloaded: every subsequent query
    /// reports "no result" until a later load succeeds.
    ///
    /// # Errors
    ///
    /// Returns the [`RemoteError`] of the failed fetch.
    pub async fn load(&mut self) -> Result<usize, RemoteError> {
        match self.remote.fetch_corpus().await {
            Ok(words) => {
                self.index.load(words);
                self.refresh();
                info!(size = self.index.len(), "corpus loaded");
                Ok(self.index.len())
            }
            Err(error) => {
                self.index.unload();
                self.refresh();
                Err(error)
            }
        }
    }

    /// The keystroke pipeline: moves the cursor to `word` and recomputes
    /// the context window.
    pub fn update(&mut self, word: &str) -> &ContextWindow {
        self.cursor = word.to_string();
        self.refresh();
        &self.window
    }

    /// Inserts the cursor word with the submitted description (soft-break
    /// folding applied) and a snapshot of the current tags; fires the add
    /// notification and re-runs the pipeline on success.
    ///
    /// Returns `false` without side effects for an empty cursor or a word
    /// already present.
    pub fn commit(&mut self, description: &str) -> bool {
        let word = self.cursor.clone();
        if word.is_empty() {
            return false;
        }
        let description = if description.is_empty() {
            None
        } else {
            Some(text::to_stored(description))
        };
        let entry = WordEntry {
            word: word.clone(),
            description,
            tags: self.tags.snapshot(),
        };
        if !self.index.insert(entry.clone()) {
            return false;
        }
        self.remote.notify_add(&entry);
        info!(%word, "word added");
        self.update(&word);
        true
    }

    /// Removes `word` after validating it exists; fires the remove
    /// notification on success. When the removed word was the cursor word,
    /// the cursor advances to the first successor (falling back to the
    /// last predecessor) before the pipeline re-runs.
    pub fn delete(&mut self, word: &str) -> bool {
        if word.is_empty() || self.index.exact_position(word).is_none() {
            return false;
        }
        let was_cursor = self.index.collator().search_eq(&self.cursor, word);
        let replacement = if was_cursor {
            self.window
                .successors
                .first()
                .or_else(|| self.window.predecessors.last())
                .map(|entry| entry.word.clone())
        } else {
            None
        };
        if !self.index.remove(word) {
            return false;
        }
        self.remote.notify_remove(word);
        info!(%word, "word deleted");
        if was_cursor {
            self.cursor = replacement.unwrap_or_default();
        }
        self.refresh();
        true
    }

    /// Browses neighbors: moves the cursor by `round(delta / sensitivity)`
    /// entries, clamped to the corpus, and re-runs the same pipeline as
    /// typing. Returns the new cursor word, or `None` when there is no
    /// current position to move from.
    pub fn scroll(&mut self, delta: f64) -> Option<&str> {
        let current = self.window.position?;
        if self.index.is_empty() {
            return None;
        }
        let last = self.index.len() - 1;
        let step = (delta / self.config.scroll_sensitivity).round();
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let target = (current as f64 + step).clamp(0.0, last as f64) as usize;
        let word = self.index.get(target)?.word.clone();
        self.update(&word);
        Some(self.cursor.as_str())
    }

    /// The display form of the matched entry's description: `None` when
    /// the cursor word is not in the corpus, otherwise the stored text
    /// with soft-break markers rendered as `|` (empty when the entry has
    /// no description).
    #[must_use]
    pub fn current_description(&self) -> Option<String> {
        if !self.window.matched {
            return None;
        }
        let entry = self.window.position.and_then(|pos| self.index.get(pos))?;
        Some(
            entry
                .description
                .as_deref()
                .map(text::to_display)
                .unwrap_or_default(),
        )
    }

    /// The current context window.
    #[must_use]
    pub const fn window(&self) -> &ContextWindow {
        &self.window
    }

    /// The current cursor word.
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// The corpus index (read-only; mutations go through the session).
    #[must_use]
    pub const fn index(&self) -> &CorpusIndex<C> {
        &self.index
    }

    /// The remote store this session mirrors mutations to.
    #[must_use]
    pub const fn remote(&self) -> &R {
        &self.remote
    }

    /// The tag labels attached to the next inserted word.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Mutable access to the tag labels.
    pub fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    fn refresh(&mut self) {
        self.window = ContextWindow::around(&self.index, &self.cursor, self.config.window_span);
    }
}
