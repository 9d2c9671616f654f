// file: src/models/term.rs
// description: validated cultural term newtype
// reference: internal data structures

use crate::error::{DictionaryError, Result};
use crate::utils::validation::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cultural concept string, guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term(String);

impl Term {
    pub fn parse(raw: &str) -> Result<Self> {
        Validator::validate_term(raw)?;
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Term {
    type Error = DictionaryError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.into_inner()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
