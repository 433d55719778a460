//! Card sources: the paginated search API and saved search dumps on disk.
//!
//! A source turns a set code into the complete list of raw card records.
//! Fetching is all-or-nothing: the first failing page aborts the whole
//! fetch and nothing is retried.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config;
use crate::error::{DraftError, Result};
use crate::models::{ApiErrorBody, CardPage, RawCard};

/// Anything that can produce the raw card records of a set.
pub trait CardSource: Send {
    fn fetch_set(&self, set_code: &str) -> Result<Vec<RawCard>>;
}

impl<F> CardSource for F
where
    F: Fn(&str) -> Result<Vec<RawCard>> + Send,
{
    fn fetch_set(&self, set_code: &str) -> Result<Vec<RawCard>> {
        self(set_code)
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A page to request: the initial search, or a `next_page` link followed
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Search { url: String, query: String },
    Next(String),
}

impl PageRequest {
    pub fn url(&self) -> &str {
        match self {
            Self::Search { url, .. } => url,
            Self::Next(url) => url,
        }
    }
}

/// Drive pagination from `first` until a page has no `next_page`.
///
/// `fetch_page` returns `Ok(None)` when the source reports that nothing
/// matched, which ends the loop with whatever was collected so far. A
/// `next_page` link that points back at an already fetched URL fails the
/// fetch instead of looping.
pub fn collect_pages<F>(first: PageRequest, mut fetch_page: F) -> Result<Vec<RawCard>>
where
    F: FnMut(&PageRequest) -> Result<Option<CardPage>>,
{
    let mut cards = Vec::new();
    let mut pages = 0usize;
    let mut visited: HashSet<String> = HashSet::new();
    let mut next = Some(first);

    while let Some(request) = next.take() {
        if let PageRequest::Next(url) = &request {
            if !visited.insert(url.clone()) {
                return Err(DraftError::InvalidArgument(format!(
                    "pagination loops back to {url}"
                )));
            }
        }
        let Some(page) = fetch_page(&request)? else {
            break;
        };
        pages += 1;
        tracing::debug!(page = pages, cards = page.data.len(), url = request.url(), "fetched page");
        cards.extend(page.data);
        next = page.next_page.map(PageRequest::Next);
    }

    tracing::info!(pages, cards = cards.len(), "card fetch complete");
    Ok(cards)
}

// ---------------------------------------------------------------------------
// ScryfallClient
// ---------------------------------------------------------------------------

/// Blocking client for the Scryfall card search endpoint.
pub struct ScryfallClient {
    search_url: String,
    timeout: Duration,
    client: OnceCell<Client>,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new(
            config::SEARCH_URL,
            Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
        )
    }
}

impl ScryfallClient {
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            search_url: search_url.into(),
            timeout,
            client: OnceCell::new(),
        }
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&self) -> Result<&Client> {
        self.client.get_or_try_init(|| -> Result<Client> {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));
            let client = Client::builder()
                .timeout(self.timeout)
                .user_agent(config::USER_AGENT)
                .default_headers(headers)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            Ok(client)
        })
    }

    /// Fetch a single page.
    ///
    /// On the initial search, a 404 (nothing matched) or a 400
    /// `bad_request` (every search term was ignored, e.g. an unknown set
    /// code) yields `Ok(None)`. Any other non-success status is an error.
    pub fn get_page(&self, request: &PageRequest) -> Result<Option<CardPage>> {
        let client = self.client()?;
        let builder = match request {
            PageRequest::Search { url, query } => client.get(url).query(&[("q", query.as_str())]),
            PageRequest::Next(url) => client.get(url),
        };

        let resp = builder.send()?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.json::<ApiErrorBody>().ok();
            if matches!(request, PageRequest::Search { .. }) && no_match(status, body.as_ref()) {
                let (details, warnings) = body
                    .map(|b| (b.details.unwrap_or_default(), b.warnings))
                    .unwrap_or_default();
                tracing::info!(
                    url = request.url(),
                    status = status.as_u16(),
                    details = %details,
                    warnings = ?warnings,
                    "search matched no cards"
                );
                return Ok(None);
            }
            let details = body
                .and_then(|body| body.details)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(DraftError::Api {
                status: status.as_u16(),
                details,
            });
        }

        Ok(Some(resp.json()?))
    }
}

/// Whether an error response to the initial search means "no cards".
fn no_match(status: StatusCode, body: Option<&ApiErrorBody>) -> bool {
    match status {
        StatusCode::NOT_FOUND => true,
        StatusCode::BAD_REQUEST => body.and_then(|b| b.code.as_deref()) == Some("bad_request"),
        _ => false,
    }
}

impl CardSource for ScryfallClient {
    fn fetch_set(&self, set_code: &str) -> Result<Vec<RawCard>> {
        let code = set_code.trim();
        if code.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(set = code, url = %self.search_url, "fetching set");
        let first = PageRequest::Search {
            url: self.search_url.clone(),
            query: format!("set:{code}"),
        };
        collect_pages(first, |request| self.get_page(request))
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Reads a saved search result from disk.
///
/// Accepts a single page object (`{"data": [...]}`) or a bare array of card
/// objects, gzip-compressed when the file name ends in `.gz`. The set code
/// passed to [`fetch_set`](CardSource::fetch_set) is ignored.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_contents(&self) -> Result<String> {
        let mut contents = String::new();
        if self.path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&self.path)?;
            let mut decoder = GzDecoder::new(BufReader::new(file));
            decoder.read_to_string(&mut contents)?;
        } else {
            contents = fs::read_to_string(&self.path)?;
        }
        Ok(contents)
    }
}

impl CardSource for JsonFileSource {
    fn fetch_set(&self, _set_code: &str) -> Result<Vec<RawCard>> {
        tracing::info!(path = %self.path.display(), "loading cards from file");
        let value: Value = serde_json::from_str(&self.read_contents()?)?;
        let cards = if value.is_array() {
            serde_json::from_value::<Vec<RawCard>>(value)?
        } else if value.get("data").is_some() {
            serde_json::from_value::<CardPage>(value)?.data
        } else {
            return Err(DraftError::InvalidArgument(format!(
                "{} holds neither a card list nor a search page",
                self.path.display()
            )));
        };
        tracing::info!(cards = cards.len(), "card file loaded");
        Ok(cards)
    }
}
