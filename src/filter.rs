//! Conjunctive filtering over the normalized card table.
//!
//! Five predicate groups (rarity, color label, mana value range, type line
//! substring, name/text substring) are ANDed together. Filtering never
//! mutates the table; it yields a [`FilteredView`] of borrowed rows in
//! table order.

use std::collections::HashSet;

use crate::models::{ColorLabel, NormalizedCard, Rarity};

// ---------------------------------------------------------------------------
// ManaRange
// ---------------------------------------------------------------------------

/// Inclusive mana value range `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManaRange {
    pub lo: f64,
    pub hi: f64,
}

impl ManaRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// One predicate group of a [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateGroup {
    Rarity,
    Color,
    ManaValue,
    TypeLine,
    Text,
}

impl PredicateGroup {
    pub const ALL: [PredicateGroup; 5] = [
        PredicateGroup::Rarity,
        PredicateGroup::Color,
        PredicateGroup::ManaValue,
        PredicateGroup::TypeLine,
        PredicateGroup::Text,
    ];
}

/// User-selected filter inputs.
///
/// An empty `rarities` or `colors` set matches nothing; empty substrings
/// match everything.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub rarities: HashSet<Rarity>,
    pub colors: HashSet<ColorLabel>,
    pub mana_range: ManaRange,
    /// Case-insensitive substring of the type line.
    pub type_contains: String,
    /// Case-insensitive substring of the name or the rules text.
    pub text_contains: String,
}

impl FilterCriteria {
    /// Criteria that keep every row with a known rarity and a mana value
    /// in `[0, max]`.
    pub fn everything(table: &[NormalizedCard]) -> Self {
        let max = table
            .iter()
            .filter_map(|card| card.mana_value)
            .fold(0.0_f64, f64::max);
        Self {
            rarities: rarity_options(table).into_iter().collect(),
            colors: ColorLabel::ALL.into_iter().collect(),
            mana_range: ManaRange::new(0.0, max),
            type_contains: String::new(),
            text_contains: String::new(),
        }
    }

    /// The initial dashboard selection: every rarity present, every color,
    /// the slider's default range, no text filters.
    pub fn defaults_for(table: &[NormalizedCard]) -> Self {
        let slider = ManaSlider::for_table(table);
        Self {
            mana_range: slider.default_range(),
            ..Self::everything(table)
        }
    }

    /// Evaluate a single predicate group.
    pub fn matches_group(&self, group: PredicateGroup, card: &NormalizedCard) -> bool {
        match group {
            PredicateGroup::Rarity => card
                .rarity
                .as_ref()
                .is_some_and(|rarity| self.rarities.contains(rarity)),
            PredicateGroup::Color => self.colors.contains(&card.color_label),
            PredicateGroup::ManaValue => self.mana_range.contains(card.mana_value_or_sentinel()),
            PredicateGroup::TypeLine => {
                if self.type_contains.trim().is_empty() {
                    return true;
                }
                let needle = self.type_contains.to_lowercase();
                card.type_line
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
            }
            PredicateGroup::Text => {
                let needle = self.text_contains.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                card.name.to_lowercase().contains(&needle)
                    || card.rules_text.to_lowercase().contains(&needle)
            }
        }
    }

    /// True when the card satisfies every predicate group.
    pub fn matches(&self, card: &NormalizedCard) -> bool {
        PredicateGroup::ALL
            .into_iter()
            .all(|group| self.matches_group(group, card))
    }
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The rows of a table that pass a [`FilterCriteria`], in table order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    cards: Vec<&'a NormalizedCard>,
}

impl<'a> FilteredView<'a> {
    pub fn from_cards(cards: Vec<&'a NormalizedCard>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[&'a NormalizedCard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a NormalizedCard> + '_ {
        self.cards.iter().copied()
    }
}

/// Apply every predicate group to the table.
pub fn compute_view<'a>(table: &'a [NormalizedCard], criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView::from_cards(table.iter().filter(|card| criteria.matches(card)).collect())
}

// ---------------------------------------------------------------------------
// Filter input helpers
// ---------------------------------------------------------------------------

/// Distinct rarities present in the table, sorted by name.
pub fn rarity_options(table: &[NormalizedCard]) -> Vec<Rarity> {
    let mut options: Vec<Rarity> = Vec::new();
    for rarity in table.iter().filter_map(|card| card.rarity.as_ref()) {
        if !options.contains(rarity) {
            options.push(rarity.clone());
        }
    }
    options.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    options
}

/// Bounds and initial selection for a mana value range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManaSlider {
    pub min: i64,
    pub max: i64,
    pub default_lo: i64,
    pub default_hi: i64,
}

impl ManaSlider {
    /// Size the slider for a table: it always spans at least `0..=10` and
    /// initially selects at least `0..=5`.
    pub fn for_table(table: &[NormalizedCard]) -> Self {
        let largest = table
            .iter()
            .filter_map(|card| card.mana_value)
            .fold(None, |acc: Option<f64>, mv| Some(acc.map_or(mv, |a| a.max(mv))));
        let cmc_max = match largest {
            Some(mv) if mv != 0.0 => mv.trunc() as i64,
            _ => 10,
        };
        Self {
            min: 0,
            max: cmc_max.max(10),
            default_lo: 0,
            default_hi: cmc_max.max(5),
        }
    }

    pub fn default_range(&self) -> ManaRange {
        ManaRange::new(self.default_lo as f64, self.default_hi as f64)
    }
}
