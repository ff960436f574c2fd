//! # wortschatz
//!
//! A locale-collated word corpus index for incremental curation: type a
//! word, see its exact alphabetic neighborhood, insert or delete it at the
//! correct sorted slot, and mirror the mutation to a remote corpus service
//! without blocking on it.
//!
//! ## Overview
//!
//! - [`collate`]: two-mode locale comparison (sort order + coarser search
//!   equality), shipped as German phonebook collation behind a trait.
//! - [`corpus`]: the sorted, unique entry sequence with closest-position
//!   binary search.
//! - [`window`]: the bounded predecessor/successor view recomputed per
//!   keystroke.
//! - [`session`]: one owned state struct wiring index, cursor, tags, and
//!   the remote store into the update/commit/delete/scroll pipeline.
//! - [`remote`]: the corpus service boundary: bootstrap fetch plus
//!   optimistic fire-and-forget add/delete mirroring.
//! - [`tags`], [`text`], [`config`]: tag labels for the next insert,
//!   soft-break translation, and session settings.
//!
//! ## Example
//!
//! ```rust
//! use wortschatz::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryStore::with_snapshot(vec![
//!     WordEntry::new("Anton"),
//!     WordEntry::new("Cäsar"),
//!     WordEntry::new("Dora"),
//! ]);
//! let mut session = Session::new(Config::default(), store);
//! session.load().await.expect("snapshot accepted");
//!
//! // Each keystroke recomputes the neighborhood.
//! let window = session.update("Berta");
//! assert!(!window.matched);
//! assert_eq!(window.successor_slots()[0], Some("Cäsar"));
//!
//! // Committing splices the word in and notifies the store.
//! assert!(session.commit("ein Vorname"));
//! assert_eq!(session.index().len(), 4);
//! # });
//! ```

pub mod collate;
pub mod config;
pub mod corpus;
pub mod remote;
pub mod session;
pub mod tags;
pub mod text;
pub mod window;

/// Re-exports of the types most sessions touch.
///
/// # Usage
///
/// ```rust
/// use wortschatz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collate::{Collator, GermanPhonebook};
    pub use crate::config::Config;
    pub use crate::corpus::{CorpusIndex, WordEntry};
    pub use crate::remote::{HttpStore, InMemoryStore, RemoteError, RemoteStore};
    pub use crate::session::Session;
    pub use crate::tags::TagSet;
    pub use crate::window::ContextWindow;
}
