//! JSON seed fixture for the in-memory trivia store.
//!
//! The fixture is a single document with a `categories` array of
//! `{id, type}` objects and a `questions` array of
//! `{id, question, answer, category, difficulty}` rows. Rows are validated
//! through [`QuestionDraft::try_new`] before they reach the store.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Category, CategoryId, Question, QuestionDraft, QuestionId, QuestionValidationError};

/// Errors returned while reading or validating a seed fixture.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Fixture file could not be read.
    #[error("failed to read seed fixture at {path}: {source}")]
    Read {
        /// Path to the fixture.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Fixture was not valid JSON or did not match the expected shape.
    #[error("failed to parse seed fixture at {path}: {source}")]
    Parse {
        /// Path to the fixture.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A question row failed validation.
    #[error("seed question {id} is invalid: {source}")]
    InvalidQuestion {
        /// Identifier of the offending row.
        id: QuestionId,
        /// Validation failure.
        #[source]
        source: QuestionValidationError,
    },
    /// A question row references a category missing from the fixture.
    #[error("seed question {id} references unknown category {category}")]
    UnknownCategory {
        /// Identifier of the offending row.
        id: QuestionId,
        /// Missing category.
        category: CategoryId,
    },
    /// Two rows share an identifier.
    #[error("seed fixture repeats identifier {id}")]
    DuplicateId {
        /// Repeated identifier.
        id: u64,
    },
}

#[derive(Debug, Deserialize)]
struct SeedQuestionRow {
    id: u64,
    question: Option<String>,
    answer: Option<String>,
    category: Option<u64>,
    difficulty: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    questions: Vec<SeedQuestionRow>,
}

/// Validated contents of a seed fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriviaSeed {
    /// Categories in fixture order.
    pub categories: Vec<Category>,
    /// Questions in fixture order.
    pub questions: Vec<Question>,
}

impl TriviaSeed {
    /// Parse and validate a fixture held in memory.
    ///
    /// # Examples
    /// ```
    /// use backend::outbound::memory::TriviaSeed;
    ///
    /// let seed = TriviaSeed::from_json(
    ///     r#"{"categories":[{"id":1,"type":"Science"}],
    ///        "questions":[{"id":1,"question":"Hottest planet?","answer":"Venus",
    ///                      "category":1,"difficulty":2}]}"#,
    /// )
    /// .expect("valid seed");
    /// assert_eq!(seed.questions.len(), 1);
    /// ```
    pub fn from_json(contents: &str) -> Result<Self, SeedError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, SeedError> {
        let document: SeedDocument =
            serde_json::from_str(contents).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut category_ids = BTreeSet::new();
        for category in &document.categories {
            if !category_ids.insert(category.id()) {
                return Err(SeedError::DuplicateId {
                    id: category.id().get(),
                });
            }
        }

        let mut question_ids = BTreeSet::new();
        let mut questions = Vec::with_capacity(document.questions.len());
        for row in document.questions {
            let id = QuestionId::new(row.id);
            if !question_ids.insert(id) {
                return Err(SeedError::DuplicateId { id: row.id });
            }
            let draft = QuestionDraft::try_new(
                row.question.as_deref(),
                row.answer.as_deref(),
                row.category.map(CategoryId::new),
                row.difficulty,
            )
            .map_err(|source| SeedError::InvalidQuestion { id, source })?;
            if !category_ids.contains(&draft.category()) {
                return Err(SeedError::UnknownCategory {
                    id,
                    category: draft.category(),
                });
            }
            questions.push(draft.into_question(id));
        }

        Ok(Self {
            categories: document.categories,
            questions,
        })
    }
}

/// Read a seed fixture from disk.
pub fn load_seed(path: &Path) -> Result<TriviaSeed, SeedError> {
    let read_error = |source: std::io::Error| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    TriviaSeed::parse(&contents, path)
}
