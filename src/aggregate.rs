//! Grouped counts over a filtered view, shaped for bar charts.
//!
//! Every series is computed independently and reports its own empty state,
//! so a renderer can show "no data" for one chart while drawing the rest.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::filter::FilteredView;
use crate::keywords::{keyword_counts, KeywordCount};
use crate::models::{ColorLabel, NormalizedCard, Rarity};

// ---------------------------------------------------------------------------
// CountSeries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub count: usize,
}

/// A named category -> count series plus the text a chart needs around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Shown in place of the chart when `points` is empty.
    pub empty_message: String,
    pub points: Vec<SeriesPoint>,
}

impl CountSeries {
    fn new(title: &str, x_label: &str, y_label: &str, empty_message: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            empty_message: empty_message.to_string(),
            points: Vec::new(),
        }
    }

    fn with_points<I, L>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (L, usize)>,
        L: ToString,
    {
        self.points = points
            .into_iter()
            .map(|(label, count)| SeriesPoint {
                label: label.to_string(),
                count,
            })
            .collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }

    /// Look up the count for a label.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.points.iter().find(|p| p.label == label).map(|p| p.count)
    }
}

// ---------------------------------------------------------------------------
// Raw histograms
// ---------------------------------------------------------------------------

/// Count cards per integer mana value, skipping unknown values.
pub fn mana_value_histogram<'a, I>(cards: I) -> BTreeMap<i64, usize>
where
    I: IntoIterator<Item = &'a NormalizedCard>,
{
    let mut histogram = BTreeMap::new();
    for bucket in cards.into_iter().filter_map(NormalizedCard::mana_bucket) {
        *histogram.entry(bucket).or_insert(0) += 1;
    }
    histogram
}

/// Non-zero color label counts in display order.
pub fn color_counts<'a, I>(cards: I) -> Vec<(ColorLabel, usize)>
where
    I: IntoIterator<Item = &'a NormalizedCard>,
{
    let mut counts = [0usize; 7];
    for card in cards {
        if let Some(idx) = ColorLabel::ALL.iter().position(|l| *l == card.color_label) {
            counts[idx] += 1;
        }
    }
    ColorLabel::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Non-zero counts of the canonical rarities, lowest tier first.
///
/// Passthrough rarities are not charted.
pub fn rarity_counts<'a, I>(cards: I) -> Vec<(Rarity, usize)>
where
    I: IntoIterator<Item = &'a NormalizedCard>,
{
    let mut counts = [0usize; 4];
    for rarity in cards.into_iter().filter_map(|card| card.rarity.as_ref()) {
        if let Some(idx) = Rarity::CANONICAL.iter().position(|r| r == rarity) {
            counts[idx] += 1;
        }
    }
    Rarity::CANONICAL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect()
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

pub fn mana_curve(view: &FilteredView<'_>) -> CountSeries {
    CountSeries::new(
        "Mana curve (all cards)",
        "Mana value",
        "Cards",
        "No data to display.",
    )
    .with_points(mana_value_histogram(view.iter()))
}

pub fn creature_curve(view: &FilteredView<'_>) -> CountSeries {
    CountSeries::new(
        "Mana curve (creatures)",
        "Mana value",
        "Creatures",
        "No creatures in the current filter.",
    )
    .with_points(mana_value_histogram(view.iter().filter(|card| card.is_creature)))
}

pub fn color_distribution(view: &FilteredView<'_>) -> CountSeries {
    CountSeries::new("Cards by color", "Color", "Cards", "No data.")
        .with_points(color_counts(view.iter()))
}

pub fn rarity_distribution(view: &FilteredView<'_>) -> CountSeries {
    CountSeries::new("Cards by rarity", "Rarity", "Cards", "No data.")
        .with_points(rarity_counts(view.iter()))
}

/// The `top_n` most common keywords.
pub fn keyword_frequency(view: &FilteredView<'_>, top_n: usize) -> CountSeries {
    let counts = keyword_counts(view.iter());
    CountSeries::new(
        &format!("Abilities and effects (top {top_n})"),
        "Keyword",
        "Cards",
        "No keywords detected with the current filters.",
    )
    .with_points(
        counts
            .into_iter()
            .take(top_n)
            .map(|KeywordCount { keyword, count }| (keyword, count)),
    )
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Every chart series for one filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub total_cards: usize,
    pub mana_curve: CountSeries,
    pub creature_curve: CountSeries,
    pub colors: CountSeries,
    pub rarities: CountSeries,
    pub keywords: CountSeries,
}

impl Dashboard {
    pub fn build(view: &FilteredView<'_>, top_n: usize) -> Self {
        Self {
            total_cards: view.len(),
            mana_curve: mana_curve(view),
            creature_curve: creature_curve(view),
            colors: color_distribution(view),
            rarities: rarity_distribution(view),
            keywords: keyword_frequency(view, top_n),
        }
    }

    /// True when the view had no cards at all.
    pub fn is_empty(&self) -> bool {
        self.total_cards == 0
    }
}
