use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawCard: one card object as returned by the search endpoint
// ---------------------------------------------------------------------------

/// A card object exactly as the search endpoint (or a saved dump of it)
/// delivers it.
///
/// Every field is optional and unknown fields are ignored. Scalar text
/// fields accept strings or numbers and fall back to `None` for anything
/// else, so one odd record never aborts a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mana_cost: Option<String>,
    /// Kept raw: the table builder decides what counts as numeric.
    #[serde(default)]
    pub cmc: Option<Value>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub color_identity: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub type_line: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rarity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub power: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub toughness: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub oracle_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_image_uris")]
    pub image_uris: Option<ImageUris>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub collector_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub set: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default, deserialize_with = "lenient_string")]
    pub normal: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub small: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub large: Option<String>,
}

// ---------------------------------------------------------------------------
// CardPage: one page of a paginated search response
// ---------------------------------------------------------------------------

/// One page of search results: `{data: [...], has_more, next_page?}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPage {
    #[serde(default)]
    pub data: Vec<RawCard>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub next_page: Option<String>,
}

/// Error object the search endpoint returns alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

fn lenient_image_uris<'de, D>(deserializer: D) -> Result<Option<ImageUris>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}
