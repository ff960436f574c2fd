//! HTTP client for the corpus service.
//!
//! Endpoints: `GET {base}/corpus` for the bootstrap snapshot,
//! `POST {base}/word/add` and `POST {base}/word/delete` mirroring local
//! mutations. Notification posts are detached onto the ambient tokio
//! runtime; their outcome is only logged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::corpus::WordEntry;
use crate::remote::{RemoteError, RemoteStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply envelope of the corpus snapshot endpoint.
#[derive(Debug, Deserialize)]
struct CorpusReply {
    ok: bool,
    #[serde(default)]
    words: Option<Vec<WordEntry>>,
}

/// Reply envelope of the mutation endpoints; everything beyond `ok` is
/// ignored.
#[derive(Debug, Deserialize)]
struct StatusReply {
    ok: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Body of the delete endpoint.
#[derive(Debug, Serialize)]
struct DeleteWordRequest {
    word: String,
}

/// [`RemoteStore`] backed by the corpus HTTP service.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Creates a client for the service at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Posts `body` to `path` on a detached task and logs the outcome.
    /// Without an ambient runtime the notification is dropped (and
    /// logged), never panicking the caller.
    fn post_detached<B>(&self, path: &'static str, word: String, body: B)
    where
        B: Serialize + Send + 'static,
    {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(%word, path, "no async runtime, sync notification dropped");
            return;
        };
        let client = self.client.clone();
        let url = self.url(path);
        handle.spawn(async move {
            let reply = match client.post(&url).json(&body).send().await {
                Ok(response) => response.json::<StatusReply>().await,
                Err(error) => Err(error),
            };
            match reply {
                Ok(StatusReply { ok: true, .. }) => {
                    tracing::debug!(%word, path, "sync notification accepted");
                }
                Ok(StatusReply { ok: false, message }) => {
                    tracing::warn!(%word, path, ?message, "corpus service rejected sync");
                }
                Err(error) => {
                    tracing::warn!(%word, path, %error, "sync notification failed");
                }
            }
        });
    }
}

impl RemoteStore for HttpStore {
    async fn fetch_corpus(&self) -> Result<Vec<WordEntry>, RemoteError> {
        let response = self.client.get(self.url("/corpus")).send().await?;
        let reply: CorpusReply = response.json().await.map_err(|error| {
            if error.is_decode() {
                RemoteError::InvalidSnapshot
            } else {
                RemoteError::Transport(error)
            }
        })?;
        match reply {
            CorpusReply {
                ok: true,
                words: Some(words),
            } => Ok(words),
            _ => Err(RemoteError::InvalidSnapshot),
        }
    }

    fn notify_add(&self, entry: &WordEntry) {
        self.post_detached("/word/add", entry.word.clone(), entry.clone());
    }

    fn notify_remove(&self, word: &str) {
        let word = word.to_string();
        self.post_detached(
            "/word/delete",
            word.clone(),
            DeleteWordRequest { word },
        );
    }
}
