use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

pub const SEARCH_URL: &str = "https://api.scryfall.com/cards/search";
pub const DEFAULT_SET_CODE: &str = "spm";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("draft-analysis/", env!("CARGO_PKG_VERSION"));
pub const ACCEPT: &str = "application/json;q=0.9,*/*;q=0.8";

/// Keyword rows shown in the regular dashboard layout.
pub const KEYWORD_TOP_N: usize = 12;
/// Keyword rows shown when the layout has room for a taller chart.
pub const KEYWORD_TOP_N_DENSE: usize = 20;

pub const ENV_PREFIX: &str = "DRAFT_ANALYSIS";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings, read from `DRAFT_ANALYSIS_*` environment variables over
/// built-in defaults. Every variable is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub set_code: String,
    pub search_url: String,
    pub timeout_secs: u64,
    pub keyword_top_n: usize,
    /// Read cards from a saved search result instead of the network.
    pub source_file: Option<PathBuf>,
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(
            config::Environment::with_prefix(ENV_PREFIX)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }

    /// Load settings from an explicit environment source layered over the
    /// defaults.
    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("set_code", DEFAULT_SET_CODE)?
            .set_default("search_url", SEARCH_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("keyword_top_n", KEYWORD_TOP_N as i64)?
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .add_source(env)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            set_code: DEFAULT_SET_CODE.to_string(),
            search_url: SEARCH_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            keyword_top_n: KEYWORD_TOP_N,
            source_file: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}
