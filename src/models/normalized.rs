use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// One of the five colors of mana, ordered W, U, B, R, G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Parse a single color symbol (`"W"`, `"U"`, `"B"`, `"R"`, `"G"`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "W" => Some(Self::White),
            "U" => Some(Self::Blue),
            "B" => Some(Self::Black),
            "R" => Some(Self::Red),
            "G" => Some(Self::Green),
            _ => None,
        }
    }

    /// The chart label used when this is a card's only color.
    pub fn label(self) -> ColorLabel {
        match self {
            Self::White => ColorLabel::White,
            Self::Blue => ColorLabel::Blue,
            Self::Black => ColorLabel::Black,
            Self::Red => ColorLabel::Red,
            Self::Green => ColorLabel::Green,
        }
    }
}

// ---------------------------------------------------------------------------
// ColorLabel
// ---------------------------------------------------------------------------

/// Single-token color bucket used for filtering and charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorLabel {
    White,
    Blue,
    Black,
    Red,
    Green,
    Multicolor,
    Colorless,
}

impl ColorLabel {
    /// Every label, in chart display order.
    pub const ALL: [ColorLabel; 7] = [
        ColorLabel::White,
        ColorLabel::Blue,
        ColorLabel::Black,
        ColorLabel::Red,
        ColorLabel::Green,
        ColorLabel::Multicolor,
        ColorLabel::Colorless,
    ];

    /// Derive the label from a color set: none is colorless, one is that
    /// color, more than one is multicolor.
    pub fn from_colors(colors: &BTreeSet<Color>) -> Self {
        let mut iter = colors.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Self::Colorless,
            (Some(color), None) => color.label(),
            (Some(_), Some(_)) => Self::Multicolor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Blue => "Blue",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Multicolor => "Multicolor",
            Self::Colorless => "Colorless",
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown color label: {s}"))
    }
}

impl Serialize for ColorLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier. Values outside the four canonical tiers pass through
/// unchanged as [`Rarity::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Other(String),
}

impl Rarity {
    /// The canonical tiers, lowest first.
    pub const CANONICAL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythic,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Mythic => "mythic",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Rarity {
    fn from(s: &str) -> Self {
        match s {
            "common" => Self::Common,
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "mythic" => Self::Mythic,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for Rarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NormalizedCard
// ---------------------------------------------------------------------------

/// One row of the card table, derived from a [`RawCard`](super::RawCard)
/// at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedCard {
    pub id: Option<String>,
    pub name: String,
    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    pub colors: BTreeSet<Color>,
    pub color_identity: BTreeSet<Color>,
    pub color_label: ColorLabel,
    pub type_line: Option<String>,
    pub rarity: Option<Rarity>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    /// Empty when the source had no rules text.
    pub rules_text: String,
    pub is_creature: bool,
    pub image: Option<String>,
    pub collector_number: Option<String>,
}

impl NormalizedCard {
    /// Mana value with unknown values mapped to `-1.0`, as used by the
    /// range filter.
    pub fn mana_value_or_sentinel(&self) -> f64 {
        self.mana_value.unwrap_or(-1.0)
    }

    /// Integer chart bucket for the mana value, truncated toward zero.
    pub fn mana_bucket(&self) -> Option<i64> {
        self.mana_value.map(|mv| mv.trunc() as i64)
    }
}
