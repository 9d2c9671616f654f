// file: src/models/search_hit.rs
// description: raw search provider response records with optional fields
// reference: Serply scholar search response shape

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level search response. A body without `results` means zero hits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// One raw hit. Every field may be absent; bibliographic fields are decoded
/// leniently because providers mix strings, numbers and author arrays.
/// Alternate field names are merged, the primary name winning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawSearchHit")]
pub struct SearchHit {
    pub snippet: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
}

/// Wire shape of a hit, one slot per accepted field name.
#[derive(Deserialize)]
struct RawSearchHit {
    #[serde(default, deserialize_with = "lenient_string")]
    snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    authors: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    journal: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    publication: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    volume: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    issue: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pages: Option<String>,
}

impl From<RawSearchHit> for SearchHit {
    fn from(raw: RawSearchHit) -> Self {
        Self {
            snippet: raw.snippet.or(raw.description),
            url: raw.url.or(raw.link),
            title: raw.title,
            author: raw.author.or(raw.authors),
            year: raw.year,
            journal: raw.journal.or(raw.venue).or(raw.publication),
            volume: raw.volume,
            issue: raw.issue,
            pages: raw.pages,
        }
    }
}

impl SearchHit {
    /// Snippet text, if present and not blank.
    pub fn snippet_text(&self) -> Option<&str> {
        self.snippet.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn locator(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

fn value_to_string(value: Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get("name")
            .cloned()
            .and_then(value_to_string)
            .unwrap_or_default(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
