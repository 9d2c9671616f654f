// file: src/utils/validation.rs
// description: input validation and sanitizing helpers
// reference: input validation patterns

use crate::error::{DictionaryError, Result};

const UNSAFE_FILE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

pub struct Validator;

impl Validator {
    pub fn validate_term(term: &str) -> Result<()> {
        if term.trim().is_empty() {
            return Err(DictionaryError::Validation("Term is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DictionaryError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Turns a free-text term into a file stem: whitespace and path-unsafe
    /// characters become underscores.
    pub fn sanitize_file_stem(term: &str) -> String {
        term.trim()
            .chars()
            .map(|c| {
                if c.is_whitespace() || c.is_control() || UNSAFE_FILE_CHARS.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
