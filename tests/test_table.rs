//! Table builder tests: derived fields and tolerance of sparse records.

mod common;

use draft_analysis::models::{Color, ColorLabel, Rarity};
use draft_analysis::table::{is_creature_type, parse_mana_value};
use draft_analysis::build_table;
use serde_json::json;

// ---------------------------------------------------------------------------
// color_label
// ---------------------------------------------------------------------------

#[test]
fn no_colors_is_colorless() {
    let card = common::card(json!({ "name": "Relic", "colors": [] }));
    assert!(card.colors.is_empty());
    assert_eq!(card.color_label, ColorLabel::Colorless);
}

#[test]
fn missing_colors_is_colorless() {
    let card = common::card(json!({ "name": "Relic" }));
    assert_eq!(card.color_label, ColorLabel::Colorless);
}

#[test]
fn single_color_maps_to_its_name() {
    let expected = [
        ("W", ColorLabel::White),
        ("U", ColorLabel::Blue),
        ("B", ColorLabel::Black),
        ("R", ColorLabel::Red),
        ("G", ColorLabel::Green),
    ];
    for (symbol, label) in expected {
        let card = common::card(json!({ "name": "Mono", "colors": [symbol] }));
        assert_eq!(card.color_label, label, "symbol {symbol}");
    }
}

#[test]
fn two_or_more_colors_is_multicolor() {
    let card = common::card(json!({ "name": "Gold", "colors": ["U", "B"] }));
    assert_eq!(card.color_label, ColorLabel::Multicolor);

    let card = common::card(json!({ "name": "Five", "colors": ["W", "U", "B", "R", "G"] }));
    assert_eq!(card.color_label, ColorLabel::Multicolor);
}

#[test]
fn unknown_color_symbols_are_dropped() {
    let card = common::card(json!({ "name": "Odd", "colors": ["U", "P"] }));
    assert_eq!(card.colors.iter().copied().collect::<Vec<_>>(), vec![Color::Blue]);
    assert_eq!(card.color_label, ColorLabel::Blue);
}

#[test]
fn every_card_gets_one_of_the_seven_labels() {
    for card in common::sample_table() {
        assert!(ColorLabel::ALL.contains(&card.color_label));
    }
}

// ---------------------------------------------------------------------------
// is_creature
// ---------------------------------------------------------------------------

#[test]
fn creature_flag_is_case_insensitive() {
    assert!(is_creature_type("Legendary Creature — Human"));
    assert!(is_creature_type("artifact creature — golem"));
    assert!(!is_creature_type("Instant"));
}

#[test]
fn missing_type_line_is_not_a_creature() {
    let card = common::card(json!({ "name": "Blank" }));
    assert_eq!(card.type_line, None);
    assert!(!card.is_creature);
}

// ---------------------------------------------------------------------------
// mana value
// ---------------------------------------------------------------------------

#[test]
fn mana_value_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_mana_value(&json!(3)), Some(3.0));
    assert_eq!(parse_mana_value(&json!(2.5)), Some(2.5));
    assert_eq!(parse_mana_value(&json!(" 4 ")), Some(4.0));
}

#[test]
fn non_numeric_mana_value_becomes_none() {
    assert_eq!(parse_mana_value(&json!("X")), None);
    assert_eq!(parse_mana_value(&json!("NaN")), None);
    assert_eq!(parse_mana_value(&json!(null)), None);
    assert_eq!(parse_mana_value(&json!([1])), None);

    let card = common::card(json!({ "name": "Weird", "cmc": "seven" }));
    assert_eq!(card.mana_value, None);
}

#[test]
fn mana_bucket_truncates() {
    let card = common::card(json!({ "name": "Half", "cmc": 0.5 }));
    assert_eq!(card.mana_bucket(), Some(0));
    assert_eq!(card.mana_value_or_sentinel(), 0.5);

    let unknown = common::card(json!({ "name": "Unknown" }));
    assert_eq!(unknown.mana_bucket(), None);
    assert_eq!(unknown.mana_value_or_sentinel(), -1.0);
}

// ---------------------------------------------------------------------------
// Other fields
// ---------------------------------------------------------------------------

#[test]
fn missing_rules_text_is_empty_string() {
    let table = common::scenario_table();
    assert_eq!(table[2].rules_text, "");
}

#[test]
fn rarity_passes_unknown_values_through() {
    let table = common::sample_table();
    assert_eq!(table[0].rarity, Some(Rarity::Common));
    assert_eq!(table[4].rarity, Some(Rarity::Mythic));
    assert_eq!(table[5].rarity, Some(Rarity::Other("special".to_string())));
    assert_eq!(table[6].rarity, None);
}

#[test]
fn power_and_toughness_stay_strings() {
    let venom = &common::sample_table()[4];
    assert_eq!(venom.power.as_deref(), Some("*"));
    assert_eq!(venom.toughness.as_deref(), Some("5"));

    let numeric = common::card(json!({ "name": "N", "power": 3, "toughness": 4 }));
    assert_eq!(numeric.power.as_deref(), Some("3"));
    assert_eq!(numeric.toughness.as_deref(), Some("4"));
}

#[test]
fn image_and_collector_number_are_carried() {
    let table = common::sample_table();
    assert_eq!(table[0].image.as_deref(), Some("https://img.example/s-01.jpg"));
    assert_eq!(table[1].image, None);
    assert_eq!(table[5].collector_number.as_deref(), Some("T1"));
}

#[test]
fn malformed_optional_fields_do_not_fail() {
    let card = common::card(json!({
        "name": "Broken",
        "colors": "U",
        "type_line": ["Creature"],
        "image_uris": "nope",
        "oracle_text": null
    }));
    assert!(card.colors.is_empty());
    assert_eq!(card.type_line, None);
    assert_eq!(card.image, None);
    assert_eq!(card.rules_text, "");
}

// ---------------------------------------------------------------------------
// Ordering and duplicates
// ---------------------------------------------------------------------------

#[test]
fn output_order_matches_input_order() {
    let records = common::sample_records();
    let table = build_table(&records);
    assert_eq!(table.len(), records.len());
    for (raw, card) in records.iter().zip(&table) {
        assert_eq!(raw.id, card.id);
    }
}

#[test]
fn duplicate_printings_are_kept() {
    let table = common::sample_table();
    let lookouts: Vec<_> = table
        .iter()
        .filter(|card| card.name == "Rooftop Lookout")
        .collect();
    assert_eq!(lookouts.len(), 2);
    assert_ne!(lookouts[0].collector_number, lookouts[1].collector_number);
}

#[test]
fn empty_input_builds_empty_table() {
    assert!(build_table(&[]).is_empty());
}
