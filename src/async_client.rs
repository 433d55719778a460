//! Async wrapper around [`DraftSession`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all session operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client fetches pages.
//!
//! # Example
//!
//! ```no_run
//! use draft_analysis::{AsyncDraftSession, DraftSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = AsyncDraftSession::new(DraftSession::builder().set_code("spm").build());
//!
//!     let criteria = session.default_criteria().await.unwrap();
//!     let dashboard = session.dashboard(criteria, 12).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::aggregate::Dashboard;
use crate::error::{DraftError, Result};
use crate::filter::FilterCriteria;
use crate::models::NormalizedCard;
use crate::render::CardRow;
use crate::DraftSession;

/// Async wrapper around [`DraftSession`].
///
/// The session sits behind a [`Mutex`], so recomputations never overlap.
/// Cloning is cheap and every clone shares the same session and cache.
#[derive(Clone)]
pub struct AsyncDraftSession {
    inner: Arc<Mutex<DraftSession>>,
}

impl AsyncDraftSession {
    pub fn new(session: DraftSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run a sync session operation on the blocking thread pool.
    ///
    /// The closure receives a `&mut DraftSession` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DraftSession) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let session = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = session
                .lock()
                .map_err(|_| DraftError::InvalidArgument("Session lock poisoned".into()))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| DraftError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch (if needed) and return the card table.
    pub async fn table(&self) -> Result<Arc<[NormalizedCard]>> {
        self.run(|s| s.table()).await
    }

    /// Discard the cached table and fetch it again.
    pub async fn refresh(&self) -> Result<Arc<[NormalizedCard]>> {
        self.run(|s| s.refresh()).await
    }

    pub async fn default_criteria(&self) -> Result<FilterCriteria> {
        self.run(|s| s.default_criteria()).await
    }

    pub async fn rows(&self, criteria: FilterCriteria) -> Result<Vec<CardRow>> {
        self.run(move |s| s.rows(&criteria)).await
    }

    pub async fn dashboard(&self, criteria: FilterCriteria, top_n: usize) -> Result<Dashboard> {
        self.run(move |s| s.dashboard(&criteria, top_n)).await
    }
}
