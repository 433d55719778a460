//! Query string parsing for the dashboard and API routes.
//!
//! Checkbox groups arrive as repeated keys (`rarity=common&rarity=rare`),
//! which is why the raw query is decoded with `form_urlencoded` instead of
//! a struct extractor.

use std::collections::HashSet;

use draft_analysis::filter::ManaRange;
use draft_analysis::{ColorLabel, FilterCriteria, NormalizedCard, Rarity};

use crate::error::AppError;

/// Marker sent by the HTML form. When present, an absent checkbox group
/// means "nothing selected" rather than "defaults".
pub const SUBMITTED_KEY: &str = "submitted";

/// Largest keyword chart a request may ask for.
pub const MAX_TOP_N: usize = 25;

/// Filter and layout options for one request.
#[derive(Debug, Clone)]
pub struct DashboardParams {
    pub criteria: FilterCriteria,
    pub show_table: bool,
    pub top_n: usize,
}

impl DashboardParams {
    /// Parse `query` over the defaults for `table`.
    pub fn parse(
        query: Option<&str>,
        table: &[NormalizedCard],
        default_top_n: usize,
    ) -> Result<Self, AppError> {
        let mut criteria = FilterCriteria::defaults_for(table);
        let mut params = Self {
            criteria: criteria.clone(),
            show_table: false,
            top_n: default_top_n,
        };
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(params);
        };

        let mut submitted = false;
        let mut rarities: Option<HashSet<Rarity>> = None;
        let mut colors: Option<HashSet<ColorLabel>> = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                SUBMITTED_KEY => submitted = true,
                "rarity" => {
                    rarities.get_or_insert_with(HashSet::new).insert(Rarity::from(&*value));
                }
                "color" => {
                    let label = value.parse::<ColorLabel>().map_err(AppError::bad_request)?;
                    colors.get_or_insert_with(HashSet::new).insert(label);
                }
                "type" => criteria.type_contains = value.into_owned(),
                "text" => criteria.text_contains = value.into_owned(),
                "mv_min" => criteria.mana_range.lo = parse_number(&key, &value)?,
                "mv_max" => criteria.mana_range.hi = parse_number(&key, &value)?,
                "show_table" => params.show_table = matches!(&*value, "1" | "on" | "true"),
                "top_n" => {
                    let n = value
                        .parse::<usize>()
                        .map_err(|_| AppError::bad_request(format!("top_n must be a count, got {value:?}")))?;
                    params.top_n = n.clamp(1, MAX_TOP_N);
                }
                other => tracing::debug!(key = other, "ignoring unknown query parameter"),
            }
        }

        match rarities {
            Some(selected) => criteria.rarities = selected,
            None if submitted => criteria.rarities.clear(),
            None => {}
        }
        match colors {
            Some(selected) => criteria.colors = selected,
            None if submitted => criteria.colors.clear(),
            None => {}
        }

        params.criteria = criteria;
        Ok(params)
    }

    pub fn mana_range(&self) -> ManaRange {
        self.criteria.mana_range
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::bad_request(format!("{key} must be a number, got {value:?}")))
}
