// file: src/models/entry.rs
// description: dictionary entry assembled from a term, its definition and sources
// reference: internal data structures

use crate::error::Result;
use crate::models::{Reference, Term};
use serde::Serialize;

/// One section of the output document. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    term: Term,
    definition: String,
    sources: Vec<Reference>,
}

impl DictionaryEntry {
    /// Pure assembly step; fails only when the term is blank.
    pub fn assemble(
        term: impl AsRef<str>,
        definition: impl Into<String>,
        sources: Vec<Reference>,
    ) -> Result<Self> {
        let term = Term::parse(term.as_ref())?;
        Ok(Self {
            term,
            definition: definition.into(),
            sources,
        })
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn sources(&self) -> &[Reference] {
        &self.sources
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
