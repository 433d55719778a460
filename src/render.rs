//! Hand-off from computed series to a concrete rendering layer.
//!
//! [`render_dashboard`] walks a [`Dashboard`] in display order and drives a
//! [`Surface`]. Empty series and empty tables become notices; a surface is
//! never asked to draw a chart without bars.

use serde::Serialize;

use crate::aggregate::{CountSeries, Dashboard};
use crate::filter::FilteredView;
use crate::models::{ColorLabel, NormalizedCard};

pub const ATTRIBUTION: &str =
    "Card data and images (c) Scryfall -- https://scryfall.com/ -- used under their API guidelines.";
pub const EMPTY_TABLE_MESSAGE: &str = "No cards match the current filters.";

/// A rendering layer: anything that can show headings, notices, bar charts
/// and a card table.
pub trait Surface {
    fn heading(&mut self, text: &str);
    fn caption(&mut self, text: &str);
    /// A neutral informational message, used for every "no data" state.
    fn notice(&mut self, text: &str);
    /// Draw a non-empty series.
    fn bar_chart(&mut self, series: &CountSeries);
    /// Draw a non-empty card table.
    fn card_table(&mut self, rows: &[CardRow]);
}

/// One line of the optional card table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRow {
    pub name: String,
    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    pub color_label: ColorLabel,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub rules_text: String,
}

impl From<&NormalizedCard> for CardRow {
    fn from(card: &NormalizedCard) -> Self {
        Self {
            name: card.name.clone(),
            mana_cost: card.mana_cost.clone(),
            mana_value: card.mana_value,
            color_label: card.color_label,
            type_line: card.type_line.clone(),
            rarity: card.rarity.as_ref().map(|r| r.to_string()),
            power: card.power.clone(),
            toughness: card.toughness.clone(),
            rules_text: card.rules_text.clone(),
        }
    }
}

/// Project a filtered view onto table rows.
pub fn card_rows(view: &FilteredView<'_>) -> Vec<CardRow> {
    view.iter().map(CardRow::from).collect()
}

fn render_series<S: Surface + ?Sized>(surface: &mut S, series: &CountSeries) {
    surface.heading(&series.title);
    if series.is_empty() {
        surface.notice(&series.empty_message);
    } else {
        surface.bar_chart(series);
    }
}

/// Render the whole dashboard: title, attribution, the optional card table,
/// then the charts.
pub fn render_dashboard<S: Surface + ?Sized>(
    surface: &mut S,
    title: &str,
    dashboard: &Dashboard,
    table: Option<&[CardRow]>,
) {
    surface.heading(title);
    surface.caption(ATTRIBUTION);

    if let Some(rows) = table {
        surface.heading("Filtered cards");
        if rows.is_empty() {
            surface.notice(EMPTY_TABLE_MESSAGE);
        } else {
            surface.card_table(rows);
        }
    }

    for series in [
        &dashboard.mana_curve,
        &dashboard.rarities,
        &dashboard.colors,
        &dashboard.creature_curve,
        &dashboard.keywords,
    ] {
        render_series(surface, series);
    }
}
