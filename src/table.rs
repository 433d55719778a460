//! Raw card records to normalized table rows.
//!
//! Building the table never fails: missing or malformed optional fields
//! become `None` (or an empty string for rules text). Output order matches
//! input order, and duplicate printings are kept as separate rows.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::models::{Color, ColorLabel, NormalizedCard, Rarity, RawCard};

/// Normalize every record, preserving order.
pub fn build_table(records: &[RawCard]) -> Vec<NormalizedCard> {
    records.iter().map(normalize).collect()
}

/// Normalize one record.
pub fn normalize(raw: &RawCard) -> NormalizedCard {
    let colors = parse_colors(&raw.colors);
    let color_label = ColorLabel::from_colors(&colors);
    let type_line = raw.type_line.clone();
    let is_creature = type_line.as_deref().is_some_and(is_creature_type);

    NormalizedCard {
        id: raw.id.clone(),
        name: raw.name.clone().unwrap_or_default(),
        mana_cost: raw.mana_cost.clone(),
        mana_value: raw.cmc.as_ref().and_then(parse_mana_value),
        colors,
        color_identity: parse_colors(&raw.color_identity),
        color_label,
        type_line,
        rarity: raw.rarity.as_deref().map(Rarity::from),
        power: raw.power.clone(),
        toughness: raw.toughness.clone(),
        rules_text: raw.oracle_text.clone().unwrap_or_default(),
        is_creature,
        image: raw.image_uris.as_ref().and_then(|uris| uris.normal.clone()),
        collector_number: raw.collector_number.clone(),
    }
}

/// Parse a mana value from a JSON number or numeric string.
///
/// Returns `None` for anything else, including NaN and infinities.
pub fn parse_mana_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|mv| mv.is_finite())
}

/// True when the type line mentions "creature" in any casing.
pub fn is_creature_type(type_line: &str) -> bool {
    type_line.to_lowercase().contains("creature")
}

fn parse_colors(symbols: &[String]) -> BTreeSet<Color> {
    symbols
        .iter()
        .filter_map(|symbol| {
            let color = Color::from_symbol(symbol);
            if color.is_none() {
                tracing::debug!(symbol = %symbol, "ignoring unknown color symbol");
            }
            color
        })
        .collect()
}
