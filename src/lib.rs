//! Draft preparation toolkit for Magic: The Gathering sets.
//!
//! Fetches every card of one set from the Scryfall search API, normalizes
//! the records into an in-memory table, and computes the summary series a
//! draft dashboard needs: mana curves, color and rarity distributions and
//! keyword frequencies, all over a user-filtered view of the table.
//!
//! # Quick start
//!
//! ```no_run
//! use draft_analysis::{DraftSession, FilterCriteria};
//!
//! let mut session = DraftSession::builder().set_code("spm").build();
//!
//! // First call fetches; later calls reuse the cached table.
//! let table = session.table().unwrap();
//! let criteria = FilterCriteria::defaults_for(&table);
//! let dashboard = session.dashboard(&criteria, 12).unwrap();
//! println!("{} cards in view", dashboard.total_cards);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod filter;
pub mod keywords;
pub mod models;
pub mod render;
pub mod source;
pub mod table;

pub use aggregate::{CountSeries, Dashboard};
#[cfg(feature = "async")]
pub use async_client::AsyncDraftSession;
pub use config::Settings;
pub use error::{DraftError, Result};
pub use filter::{compute_view, FilterCriteria, FilteredView, ManaRange};
pub use keywords::{extract_keywords, keyword_counts, Keyword, KeywordSet};
pub use models::{Color, ColorLabel, NormalizedCard, Rarity, RawCard};
pub use render::{render_dashboard, CardRow, Surface};
pub use source::{CardSource, JsonFileSource, ScryfallClient};
pub use table::build_table;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DraftSessionBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DraftSession`].
///
/// Use [`DraftSession::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DraftSessionBuilder::build).
pub struct DraftSessionBuilder {
    set_code: String,
    search_url: String,
    timeout: Duration,
    source_file: Option<PathBuf>,
    source: Option<Box<dyn CardSource>>,
}

impl Default for DraftSessionBuilder {
    fn default() -> Self {
        Self {
            set_code: config::DEFAULT_SET_CODE.to_string(),
            search_url: config::SEARCH_URL.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            source_file: None,
            source: None,
        }
    }
}

impl DraftSessionBuilder {
    /// Set code to analyze (e.g. `"spm"`). Not validated locally; an unknown
    /// code simply yields an empty table.
    pub fn set_code(mut self, code: impl Into<String>) -> Self {
        self.set_code = code.into();
        self
    }

    /// Override the search endpoint. Defaults to the public Scryfall API.
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the per-request HTTP timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read cards from a saved search result instead of the network.
    pub fn source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a custom card source. Takes precedence over every other source
    /// setting.
    pub fn source<S: CardSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Apply every field of a [`Settings`].
    pub fn settings(mut self, settings: &Settings) -> Self {
        self.set_code = settings.set_code.clone();
        self.search_url = settings.search_url.clone();
        self.timeout = settings.timeout();
        self.source_file = settings.source_file.clone();
        self
    }

    /// Build the session. Nothing is fetched until the table is first
    /// requested.
    pub fn build(self) -> DraftSession {
        let source: Box<dyn CardSource> = match (self.source, self.source_file) {
            (Some(source), _) => source,
            (None, Some(path)) => Box::new(JsonFileSource::new(path)),
            (None, None) => Box::new(ScryfallClient::new(self.search_url, self.timeout)),
        };
        DraftSession {
            set_code: self.set_code,
            source,
            table: None,
        }
    }
}

// ---------------------------------------------------------------------------
// DraftSession
// ---------------------------------------------------------------------------

/// One analysis session over one set.
///
/// Owns the card source and an explicit cache of the normalized table. The
/// table is fetched once, shared read-only through an [`Arc`], and replaced
/// only by [`refresh()`](Self::refresh) or [`invalidate()`](Self::invalidate).
/// Every view and dashboard is recomputed from the cached table on request.
pub struct DraftSession {
    set_code: String,
    source: Box<dyn CardSource>,
    table: Option<Arc<[NormalizedCard]>>,
}

impl DraftSession {
    /// Create a new builder for configuring the session.
    pub fn builder() -> DraftSessionBuilder {
        DraftSessionBuilder::default()
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    /// Whether the table has been fetched and is cached.
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Return the normalized table, fetching it on first use.
    ///
    /// A failed fetch leaves the session unloaded; the next call tries again.
    pub fn table(&mut self) -> Result<Arc<[NormalizedCard]>> {
        if let Some(table) = &self.table {
            return Ok(Arc::clone(table));
        }
        let records = self.source.fetch_set(&self.set_code)?;
        let table: Arc<[NormalizedCard]> = build_table(&records).into();
        tracing::info!(set = %self.set_code, cards = table.len(), "card table built");
        self.table = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached table. Returns `true` if anything was cached.
    pub fn invalidate(&mut self) -> bool {
        self.table.take().is_some()
    }

    /// Discard the cached table and fetch it again.
    pub fn refresh(&mut self) -> Result<Arc<[NormalizedCard]>> {
        if self.invalidate() {
            tracing::warn!(set = %self.set_code, "discarding cached card table");
        }
        self.table()
    }

    /// The initial filter selection for the current table.
    pub fn default_criteria(&mut self) -> Result<FilterCriteria> {
        let table = self.table()?;
        Ok(FilterCriteria::defaults_for(&table))
    }

    /// Rows passing `criteria`, projected for table display.
    pub fn rows(&mut self, criteria: &FilterCriteria) -> Result<Vec<CardRow>> {
        let table = self.table()?;
        let view = compute_view(&table, criteria);
        Ok(render::card_rows(&view))
    }

    /// All chart series for the rows passing `criteria`.
    pub fn dashboard(&mut self, criteria: &FilterCriteria, top_n: usize) -> Result<Dashboard> {
        let table = self.table()?;
        let view = compute_view(&table, criteria);
        Ok(Dashboard::build(&view, top_n))
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DraftSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "DraftSession(set={}, cards={})", self.set_code, table.len()),
            None => write!(f, "DraftSession(set={}, not loaded)", self.set_code),
        }
    }
}
