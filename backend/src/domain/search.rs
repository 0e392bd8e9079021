//! Case-insensitive substring search over question text.

use thiserror::Error;

use super::Question;

/// Raised when a search term is empty once trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search term must not be blank")]
pub struct BlankSearchTerm;

/// A non-blank search term.
///
/// An empty term means "no search" rather than "match everything", so
/// callers branch before constructing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    /// Validate a raw term.
    ///
    /// A whitespace-only term is blank. Otherwise the term matches exactly
    /// as given, surrounding whitespace included.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::SearchTerm;
    ///
    /// assert!(SearchTerm::new("  title ").is_ok());
    /// assert!(SearchTerm::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, BlankSearchTerm> {
        if raw.trim().is_empty() {
            return Err(BlankSearchTerm);
        }
        Ok(Self {
            raw: raw.to_owned(),
            needle: raw.to_lowercase(),
        })
    }

    /// The term as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `text` contains this term, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// Questions whose text contains `term`, in corpus order.
///
/// Zero matches is a valid outcome and yields an empty vector.
pub fn search(term: &SearchTerm, corpus: &[Question]) -> Vec<Question> {
    corpus
        .iter()
        .filter(|question| term.matches(question.text()))
        .cloned()
        .collect()
}
