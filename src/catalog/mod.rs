// file: src/catalog/mod.rs
// description: ordered, read-only term catalog with free-text override
// reference: compiled-in term list, selection by index or custom text

mod maya;

pub use maya::MAYA_TERMS;

use crate::error::{DictionaryError, Result};
use crate::models::Term;
use std::collections::HashSet;
use tracing::debug;

/// How the caller picks the term for single-entry mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermSelection {
    /// Position in the ordered catalog.
    Catalog(usize),
    /// Arbitrary caller-supplied text, bypassing the catalog.
    FreeText(String),
}

/// Fixed set of terms in code-point order. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCatalog {
    terms: Vec<Term>,
}

impl TermCatalog {
    /// The built-in Maya catalog.
    pub fn maya() -> Self {
        Self::from_terms(MAYA_TERMS.iter().copied())
    }

    /// Builds a catalog from raw strings, dropping blank ones and sorting.
    pub fn from_terms<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<Term> = raw
            .into_iter()
            .filter_map(|s| Term::parse(s.as_ref()).ok())
            .collect();
        terms.sort();
        Self { terms }
    }

    /// Drops exact repeats, keeping the first occurrence. Diacritic and
    /// parenthetical variants are distinct terms and stay.
    pub fn deduplicated(self) -> Self {
        let before = self.terms.len();
        let mut seen = HashSet::new();
        let terms: Vec<Term> = self
            .terms
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        debug!("Catalog deduplicated: {} -> {} terms", before, terms.len());
        Self { terms }
    }

    /// Keeps only the first `limit` terms.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.terms.truncate(limit);
        self
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    /// Resolves a selection to the raw term text. Free text is returned
    /// untouched; validation happens in the pipeline.
    pub fn resolve(&self, selection: &TermSelection) -> Result<String> {
        match selection {
            TermSelection::Catalog(index) => self
                .get(*index)
                .map(|t| t.as_str().to_string())
                .ok_or_else(|| {
                    DictionaryError::Validation(format!(
                        "Catalog index {} out of range (catalog has {} terms)",
                        index,
                        self.len()
                    ))
                }),
            TermSelection::FreeText(text) => Ok(text.clone()),
        }
    }
}

impl Default for TermCatalog {
    fn default() -> Self {
        Self::maya()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_maya_catalog_is_sorted() {
        let catalog = TermCatalog::maya();
        assert_eq!(catalog.len(), MAYA_TERMS.len());
        assert!(catalog.terms().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(catalog.get(0).unwrap().as_str(), "Agua");
    }

    #[test]
    fn test_from_terms_drops_blank() {
        let catalog = TermCatalog::from_terms(["Sol", " ", "Ajaw", ""]);
        let terms: Vec<&str> = catalog.terms().iter().map(Term::as_str).collect();
        assert_eq!(terms, vec!["Ajaw", "Sol"]);
    }

    #[test]
    fn test_deduplicated_keeps_variants() {
        let catalog = TermCatalog::from_terms(["Sol", "Muerte", "Sol", "Kukulkan", "Kukulcán"]);
        assert_eq!(catalog.len(), 5);

        let deduped = catalog.deduplicated();
        let terms: Vec<&str> = deduped.terms().iter().map(Term::as_str).collect();
        assert_eq!(terms, vec!["Kukulcán", "Kukulkan", "Muerte", "Sol"]);
    }

    #[test]
    fn test_maya_catalog_contains_known_duplicates() {
        let catalog = TermCatalog::maya();
        let deduped = catalog.clone().deduplicated();
        assert!(deduped.len() < catalog.len());
    }

    #[test]
    fn test_resolve_selection() {
        let catalog = TermCatalog::from_terms(["Ajaw", "Sol"]);
        assert_eq!(catalog.resolve(&TermSelection::Catalog(1)).unwrap(), "Sol");
        assert_eq!(
            catalog
                .resolve(&TermSelection::FreeText("Pop Wuj".to_string()))
                .unwrap(),
            "Pop Wuj"
        );
        assert!(matches!(
            catalog.resolve(&TermSelection::Catalog(7)),
            Err(DictionaryError::Validation(_))
        ));
    }

    #[test]
    fn test_truncated() {
        let catalog = TermCatalog::from_terms(["C", "A", "B"]).truncated(2);
        let terms: Vec<&str> = catalog.terms().iter().map(Term::as_str).collect();
        assert_eq!(terms, vec!["A", "B"]);
    }
}
