//! Shared test fixtures for the draft analysis integration tests.
//!
//! Provides a small sample set of raw card objects shaped like search API
//! results, plus helpers that turn them into a normalized table.

#![allow(dead_code)]

use draft_analysis::{build_table, NormalizedCard, RawCard};
use serde_json::{json, Value};

/// Deserialize a single card object.
pub fn raw(value: Value) -> RawCard {
    serde_json::from_value(value).unwrap()
}

/// The three-card scenario: a common blue flyer, a rare multicolor
/// removal sorcery and a mythic colorless artifact with no rules text.
pub fn scenario_records() -> Vec<RawCard> {
    vec![
        raw(json!({
            "id": "card-001",
            "name": "Web-Slinger Sentry",
            "mana_cost": "{1}{U}",
            "cmc": 2.0,
            "colors": ["U"],
            "color_identity": ["U"],
            "type_line": "Creature — Human Hero",
            "rarity": "common",
            "power": "2",
            "toughness": "1",
            "oracle_text": "Flying",
            "collector_number": "41"
        })),
        raw(json!({
            "id": "card-002",
            "name": "Sinister Ultimatum",
            "mana_cost": "{2}{U}{B}",
            "cmc": 4.0,
            "colors": ["U", "B"],
            "color_identity": ["U", "B"],
            "type_line": "Sorcery",
            "rarity": "rare",
            "oracle_text": "Destroy target creature.",
            "collector_number": "212"
        })),
        raw(json!({
            "id": "card-003",
            "name": "Daily Bugle Press",
            "mana_cost": "{0}",
            "cmc": 0.0,
            "colors": [],
            "color_identity": [],
            "type_line": "Artifact",
            "rarity": "mythic",
            "collector_number": "250"
        })),
    ]
}

/// A broader sample covering every color label, rarity edge cases and
/// missing fields.
pub fn sample_records() -> Vec<RawCard> {
    vec![
        raw(json!({
            "id": "s-01",
            "name": "Rooftop Lookout",
            "mana_cost": "{W}",
            "cmc": 1.0,
            "colors": ["W"],
            "type_line": "Creature — Human Soldier",
            "rarity": "common",
            "power": "1",
            "toughness": "2",
            "oracle_text": "Vigilance\nFlying",
            "image_uris": { "normal": "https://img.example/s-01.jpg" },
            "collector_number": "1"
        })),
        raw(json!({
            "id": "s-02",
            "name": "Symbiote Surge",
            "mana_cost": "{2}{B}",
            "cmc": 3.0,
            "colors": ["B"],
            "type_line": "Instant",
            "rarity": "uncommon",
            "oracle_text": "Destroy target creature. You draw a card.",
            "collector_number": "80"
        })),
        raw(json!({
            "id": "s-03",
            "name": "Goblin Glider Ace",
            "mana_cost": "{3}{R}",
            "cmc": 4.0,
            "colors": ["R"],
            "type_line": "Creature — Goblin",
            "rarity": "uncommon",
            "power": "3",
            "toughness": "2",
            "oracle_text": "Flying, haste\nWhen this enters, it deals 2 damage to any target.",
            "collector_number": "130"
        })),
        raw(json!({
            "id": "s-04",
            "name": "Lizard's Lab",
            "mana_cost": "{G}",
            "cmc": 1.0,
            "colors": ["G"],
            "type_line": "Enchantment",
            "rarity": "rare",
            "oracle_text": "At the beginning of your upkeep, scry 1.",
            "collector_number": "170"
        })),
        raw(json!({
            "id": "s-05",
            "name": "Venom, Lethal Protector",
            "mana_cost": "{3}{B}{R}",
            "cmc": 5.0,
            "colors": ["B", "R"],
            "type_line": "Legendary Creature — Symbiote",
            "rarity": "mythic",
            "power": "*",
            "toughness": "5",
            "oracle_text": "Menace, first strike\nWhenever Venom deals combat damage, draw a card.",
            "collector_number": "220"
        })),
        raw(json!({
            "id": "s-06",
            "name": "Promo Token Card",
            "cmc": "not a number",
            "type_line": "Token Creature — Spider",
            "rarity": "special",
            "collector_number": "T1"
        })),
        raw(json!({
            "id": "s-07",
            "name": "Mystery Printing",
            "colors": ["U"],
            "rarity": null,
            "collector_number": "999"
        })),
        raw(json!({
            "id": "s-08",
            "name": "Rooftop Lookout",
            "mana_cost": "{W}",
            "cmc": 1.0,
            "colors": ["W"],
            "type_line": "Creature — Human Soldier",
            "rarity": "common",
            "oracle_text": "Vigilance\nFlying",
            "collector_number": "301"
        })),
    ]
}

pub fn scenario_table() -> Vec<NormalizedCard> {
    build_table(&scenario_records())
}

pub fn sample_table() -> Vec<NormalizedCard> {
    build_table(&sample_records())
}

/// Build a single normalized card from a JSON card object.
pub fn card(value: Value) -> NormalizedCard {
    build_table(&[raw(value)]).remove(0)
}

/// Wrap cards in one search results page.
pub fn page(cards: &[Value], next_page: Option<&str>) -> Value {
    json!({
        "object": "list",
        "has_more": next_page.is_some(),
        "next_page": next_page,
        "data": cards,
    })
}
