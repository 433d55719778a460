//! Fixed-vocabulary keyword detection in rules text.
//!
//! Matching is case-insensitive and whole-word: `"Flying"` matches
//! `flying`, `"deflying"` does not. Multi-word terms such as
//! `first strike` must appear as that exact phrase.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::models::NormalizedCard;

// ---------------------------------------------------------------------------
// Keyword
// ---------------------------------------------------------------------------

/// An ability or effect term from the fixed search vocabulary.
///
/// Variants are declared in vocabulary order, which is also their `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    Flying,
    Trample,
    Haste,
    Lifelink,
    Vigilance,
    Menace,
    Reach,
    Deathtouch,
    Hexproof,
    Ward,
    Prowess,
    Scry,
    Draw,
    Discard,
    Destroy,
    Exile,
    Fight,
    Damage,
    Counter,
    Token,
    Equip,
    Aura,
    Flash,
    FirstStrike,
    DoubleStrike,
}

impl Keyword {
    pub const ALL: [Keyword; 25] = [
        Keyword::Flying,
        Keyword::Trample,
        Keyword::Haste,
        Keyword::Lifelink,
        Keyword::Vigilance,
        Keyword::Menace,
        Keyword::Reach,
        Keyword::Deathtouch,
        Keyword::Hexproof,
        Keyword::Ward,
        Keyword::Prowess,
        Keyword::Scry,
        Keyword::Draw,
        Keyword::Discard,
        Keyword::Destroy,
        Keyword::Exile,
        Keyword::Fight,
        Keyword::Damage,
        Keyword::Counter,
        Keyword::Token,
        Keyword::Equip,
        Keyword::Aura,
        Keyword::Flash,
        Keyword::FirstStrike,
        Keyword::DoubleStrike,
    ];

    /// The term as searched for, always lowercase.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flying => "flying",
            Self::Trample => "trample",
            Self::Haste => "haste",
            Self::Lifelink => "lifelink",
            Self::Vigilance => "vigilance",
            Self::Menace => "menace",
            Self::Reach => "reach",
            Self::Deathtouch => "deathtouch",
            Self::Hexproof => "hexproof",
            Self::Ward => "ward",
            Self::Prowess => "prowess",
            Self::Scry => "scry",
            Self::Draw => "draw",
            Self::Discard => "discard",
            Self::Destroy => "destroy",
            Self::Exile => "exile",
            Self::Fight => "fight",
            Self::Damage => "damage",
            Self::Counter => "counter",
            Self::Token => "token",
            Self::Equip => "equip",
            Self::Aura => "aura",
            Self::Flash => "flash",
            Self::FirstStrike => "first strike",
            Self::DoubleStrike => "double strike",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Keyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

static PATTERNS: Lazy<Vec<(Keyword, Regex)>> = Lazy::new(|| {
    Keyword::ALL
        .into_iter()
        .map(|kw| {
            let pattern = format!(r"\b{}\b", regex::escape(kw.as_str()));
            let re = Regex::new(&pattern).expect("keyword pattern is a valid regex");
            (kw, re)
        })
        .collect()
});

// ---------------------------------------------------------------------------
// KeywordSet
// ---------------------------------------------------------------------------

/// The keywords found in one card's rules text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordSet(BTreeSet<Keyword>);

impl KeywordSet {
    pub fn contains(&self, keyword: Keyword) -> bool {
        self.0.contains(&keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Keyword> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Find every vocabulary keyword that appears as a whole word in `text`.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let lowered = text.to_lowercase();
    PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&lowered))
        .map(|(kw, _)| *kw)
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregate counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: Keyword,
    /// Number of cards whose text contains the keyword at least once.
    pub count: usize,
}

/// Count, per keyword, how many cards mention it.
///
/// Sorted by descending count. Equal counts keep the order in which the
/// keywords were first encountered while scanning the cards. Returns an
/// empty vector when no card matches anything.
pub fn keyword_counts<'a, I>(cards: I) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'a NormalizedCard>,
{
    let mut counts: Vec<KeywordCount> = Vec::new();
    for card in cards {
        for keyword in extract_keywords(&card.rules_text).iter() {
            match counts.iter_mut().find(|c| c.keyword == keyword) {
                Some(entry) => entry.count += 1,
                None => counts.push(KeywordCount { keyword, count: 1 }),
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
