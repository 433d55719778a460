//! Filter engine tests: each predicate group, composition, and defaults.

mod common;

use std::collections::HashSet;

use draft_analysis::filter::{
    compute_view, rarity_options, FilterCriteria, ManaRange, ManaSlider, PredicateGroup,
};
use draft_analysis::models::{ColorLabel, NormalizedCard, Rarity};
use serde_json::json;

fn ids(cards: &[&NormalizedCard]) -> Vec<String> {
    cards.iter().map(|c| c.id.clone().unwrap_or_default()).collect()
}

fn open_criteria(table: &[NormalizedCard]) -> FilterCriteria {
    let mut criteria = FilterCriteria::everything(table);
    criteria.rarities.insert(Rarity::Other("special".to_string()));
    criteria
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_rarity_and_color_filter() {
    let table = common::scenario_table();
    let criteria = FilterCriteria {
        rarities: HashSet::from([Rarity::Common, Rarity::Rare]),
        colors: HashSet::from([ColorLabel::Blue, ColorLabel::Multicolor]),
        mana_range: ManaRange::new(0.0, 10.0),
        type_contains: String::new(),
        text_contains: String::new(),
    };
    let view = compute_view(&table, &criteria);
    assert_eq!(ids(view.cards()), vec!["card-001", "card-002"]);
}

// ---------------------------------------------------------------------------
// Match-everything round trip
// ---------------------------------------------------------------------------

#[test]
fn everything_returns_all_rows_in_order() {
    let table = common::scenario_table();
    let view = compute_view(&table, &FilterCriteria::everything(&table));
    assert_eq!(view.len(), table.len());
    for (kept, original) in view.iter().zip(&table) {
        assert_eq!(kept, original);
    }
}

#[test]
fn filtering_does_not_mutate_the_table() {
    let table = common::sample_table();
    let before = table.clone();
    let _ = compute_view(&table, &FilterCriteria::everything(&table));
    assert_eq!(table, before);
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

#[test]
fn null_rarity_is_never_selected() {
    let table = common::sample_table();
    let view = compute_view(&table, &open_criteria(&table));
    assert!(view.iter().all(|c| c.rarity.is_some()));
    assert!(!ids(view.cards()).contains(&"s-07".to_string()));
}

#[test]
fn unrecognized_rarity_needs_explicit_selection() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);
    criteria.mana_range = ManaRange::new(-1.0, 20.0);

    criteria.rarities.remove(&Rarity::Other("special".to_string()));
    assert!(!ids(compute_view(&table, &criteria).cards()).contains(&"s-06".to_string()));

    criteria.rarities.insert(Rarity::Other("special".to_string()));
    assert!(ids(compute_view(&table, &criteria).cards()).contains(&"s-06".to_string()));
}

#[test]
fn empty_rarity_set_matches_nothing() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);
    criteria.rarities.clear();
    assert!(compute_view(&table, &criteria).is_empty());
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

#[test]
fn color_filter_uses_the_derived_label() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);
    criteria.colors = HashSet::from([ColorLabel::Multicolor]);
    let view = compute_view(&table, &criteria);
    assert_eq!(ids(view.cards()), vec!["s-05"]);
}

// ---------------------------------------------------------------------------
// Mana value range
// ---------------------------------------------------------------------------

#[test]
fn unknown_mana_value_is_excluded_from_non_negative_range() {
    let unknown = common::card(json!({ "id": "x", "name": "X", "rarity": "common" }));
    let free = common::card(json!({ "id": "z", "name": "Z", "rarity": "common", "cmc": 0 }));
    let table = vec![unknown, free];

    let mut criteria = FilterCriteria::everything(&table);
    criteria.mana_range = ManaRange::new(0.0, 5.0);
    assert_eq!(ids(compute_view(&table, &criteria).cards()), vec!["z"]);
}

#[test]
fn unknown_mana_value_counts_as_minus_one() {
    let unknown = common::card(json!({ "id": "x", "name": "X", "rarity": "common" }));
    let table = vec![unknown];

    let mut criteria = FilterCriteria::everything(&table);
    criteria.mana_range = ManaRange::new(-1.0, 0.0);
    assert_eq!(compute_view(&table, &criteria).len(), 1);

    criteria.mana_range = ManaRange::new(-0.5, 0.0);
    assert!(compute_view(&table, &criteria).is_empty());
}

#[test]
fn range_bounds_are_inclusive() {
    let range = ManaRange::new(2.0, 4.0);
    assert!(range.contains(2.0));
    assert!(range.contains(4.0));
    assert!(!range.contains(4.5));
    assert!(!range.contains(1.0));
}

#[test]
fn inverted_range_matches_nothing() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);
    criteria.mana_range = ManaRange::new(5.0, 1.0);
    assert!(compute_view(&table, &criteria).is_empty());
}

// ---------------------------------------------------------------------------
// Substrings
// ---------------------------------------------------------------------------

#[test]
fn type_filter_is_case_insensitive() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);
    criteria.type_contains = "CREATURE".to_string();
    let view = compute_view(&table, &criteria);
    assert_eq!(ids(view.cards()), vec!["s-01", "s-03", "s-05", "s-08"]);
}

#[test]
fn blank_type_filter_matches_missing_type_lines() {
    let card = common::card(json!({ "id": "n", "name": "No Type", "rarity": "common", "cmc": 1 }));
    let table = vec![card];
    let mut criteria = FilterCriteria::everything(&table);
    criteria.type_contains = "   ".to_string();
    assert_eq!(compute_view(&table, &criteria).len(), 1);
}

#[test]
fn text_filter_checks_name_or_rules_text() {
    let table = common::sample_table();
    let mut criteria = open_criteria(&table);

    criteria.text_contains = "  venom ".to_string();
    assert_eq!(ids(compute_view(&table, &criteria).cards()), vec!["s-05"]);

    criteria.text_contains = "DRAW A CARD".to_string();
    assert_eq!(ids(compute_view(&table, &criteria).cards()), vec!["s-02", "s-05"]);
}

#[test]
fn empty_text_filter_matches_everything() {
    let table = common::scenario_table();
    let mut criteria = FilterCriteria::everything(&table);
    criteria.text_contains = String::new();
    assert_eq!(compute_view(&table, &criteria).len(), 3);
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn predicate_groups_commute() {
    let table = common::sample_table();
    let criteria = FilterCriteria {
        rarities: HashSet::from([Rarity::Common, Rarity::Uncommon, Rarity::Mythic]),
        colors: HashSet::from([ColorLabel::White, ColorLabel::Red, ColorLabel::Multicolor]),
        mana_range: ManaRange::new(1.0, 4.0),
        type_contains: String::new(),
        text_contains: String::new(),
    };

    let orders = [
        [PredicateGroup::Rarity, PredicateGroup::Color, PredicateGroup::ManaValue],
        [PredicateGroup::Rarity, PredicateGroup::ManaValue, PredicateGroup::Color],
        [PredicateGroup::Color, PredicateGroup::Rarity, PredicateGroup::ManaValue],
        [PredicateGroup::Color, PredicateGroup::ManaValue, PredicateGroup::Rarity],
        [PredicateGroup::ManaValue, PredicateGroup::Rarity, PredicateGroup::Color],
        [PredicateGroup::ManaValue, PredicateGroup::Color, PredicateGroup::Rarity],
    ];

    let expected = ids(compute_view(&table, &criteria).cards());
    assert_eq!(expected, vec!["s-01", "s-03", "s-08"]);

    for order in orders {
        let mut rows: Vec<&NormalizedCard> = table.iter().collect();
        for group in order {
            rows.retain(|card| criteria.matches_group(group, card));
        }
        assert_eq!(ids(&rows), expected, "order {order:?}");
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn rarity_options_are_distinct_and_sorted() {
    let table = common::sample_table();
    let options: Vec<String> = rarity_options(&table).iter().map(|r| r.to_string()).collect();
    assert_eq!(options, vec!["common", "mythic", "rare", "special", "uncommon"]);
}

#[test]
fn slider_spans_at_least_zero_to_ten() {
    let table = common::sample_table();
    let slider = ManaSlider::for_table(&table);
    assert_eq!(slider.min, 0);
    assert_eq!(slider.max, 10);
    assert_eq!((slider.default_lo, slider.default_hi), (0, 5));
}

#[test]
fn slider_grows_with_expensive_cards() {
    let table = vec![common::card(json!({ "name": "Big", "cmc": 12 }))];
    let slider = ManaSlider::for_table(&table);
    assert_eq!(slider.max, 12);
    assert_eq!(slider.default_hi, 12);
}

#[test]
fn slider_with_no_mana_values_falls_back() {
    let table = vec![common::card(json!({ "name": "Unknown" }))];
    let slider = ManaSlider::for_table(&table);
    assert_eq!(slider.max, 10);
    assert_eq!(slider.default_hi, 10);
}

#[test]
fn defaults_select_every_present_rarity_and_color() {
    let table = common::sample_table();
    let criteria = FilterCriteria::defaults_for(&table);
    assert_eq!(criteria.rarities.len(), 5);
    assert_eq!(criteria.colors.len(), ColorLabel::ALL.len());
    assert_eq!(criteria.mana_range, ManaRange::new(0.0, 5.0));
    assert!(criteria.type_contains.is_empty());
    assert!(criteria.text_contains.is_empty());
}
