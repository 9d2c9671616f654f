// file: src/models/reference.rs
// description: citation record with placeholder defaults for missing bibliography
// reference: APA-style reference formatting

use crate::models::search_hit::SearchHit;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";
pub const UNDATED: &str = "s.f.";
pub const UNKNOWN_VENUE: &str = "Revista desconocida";

/// A citation backing a definition. Every field is populated: missing
/// bibliographic data is replaced with placeholders when built from a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub author: String,
    pub year: String,
    pub title: String,
    pub venue: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub url: String,
}

impl Reference {
    /// Builds a citation from a raw hit; `None` when the hit has no locator.
    pub fn from_hit(hit: &SearchHit) -> Option<Self> {
        let url = hit.locator()?.to_string();

        Some(Self {
            author: or_default(&hit.author, UNKNOWN_AUTHOR),
            year: or_default(&hit.year, UNDATED),
            title: or_default(&hit.title, ""),
            venue: or_default(&hit.journal, UNKNOWN_VENUE),
            volume: or_default(&hit.volume, ""),
            issue: or_default(&hit.issue, ""),
            pages: or_default(&hit.pages, ""),
            url,
        })
    }

    /// Link-only citation, used when nothing but a locator is known.
    pub fn from_link(url: impl Into<String>) -> Self {
        Self {
            author: UNKNOWN_AUTHOR.to_string(),
            year: UNDATED.to_string(),
            title: String::new(),
            venue: UNKNOWN_VENUE.to_string(),
            volume: String::new(),
            issue: String::new(),
            pages: String::new(),
            url: url.into(),
        }
    }

    /// `Author. (Year). `, the text preceding the title.
    pub fn lead(&self) -> String {
        format!("{}. ({}). ", self.author, self.year)
    }

    /// `. Venue, Volume(Issue), Pages. URL`, the text following the title.
    pub fn tail(&self) -> String {
        format!(
            ". {}, {}({}), {}. {}",
            self.venue, self.volume, self.issue, self.pages, self.url
        )
    }

    /// `Author. (Year). Title. Venue, Volume(Issue), Pages. URL`
    pub fn format_structured(&self) -> String {
        format!("{}{}{}", self.lead(), self.title, self.tail())
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_for_missing_fields() {
        let hit = SearchHit {
            url: Some("https://example.org/ceiba".to_string()),
            title: Some("La ceiba".to_string()),
            ..Default::default()
        };

        let reference = Reference::from_hit(&hit).unwrap();
        assert_eq!(reference.author, UNKNOWN_AUTHOR);
        assert_eq!(reference.year, UNDATED);
        assert_eq!(reference.venue, UNKNOWN_VENUE);
        assert_eq!(reference.volume, "");
        assert_eq!(
            reference.format_structured(),
            "Autor desconocido. (s.f.). La ceiba. Revista desconocida, (), . https://example.org/ceiba"
        );
    }

    #[test]
    fn test_full_record_format() {
        let hit = SearchHit {
            url: Some("https://example.org/ajaw".to_string()),
            title: Some("Of gods and kings".to_string()),
            author: Some("Houston, S.".to_string()),
            year: Some("1996".to_string()),
            journal: Some("RES".to_string()),
            volume: Some("30".to_string()),
            issue: Some("2".to_string()),
            pages: Some("132-151".to_string()),
            ..Default::default()
        };

        let reference = Reference::from_hit(&hit).unwrap();
        assert_eq!(
            reference.format_structured(),
            "Houston, S.. (1996). Of gods and kings. RES, 30(2), 132-151. https://example.org/ajaw"
        );
    }

    #[test]
    fn test_hit_without_locator_has_no_reference() {
        let hit = SearchHit {
            snippet: Some("context only".to_string()),
            ..Default::default()
        };
        assert!(Reference::from_hit(&hit).is_none());
    }
}
