//! Trivia question entities and creation drafts.
//!
//! A [`Question`] is immutable once stored: the only mutations in scope are
//! insert (from a validated [`QuestionDraft`]) and delete by identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CategoryId;

/// Stable identifier assigned to a stored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating bounded to `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest rating.
    pub const MIN: u8 = 1;
    /// Hardest rating.
    pub const MAX: u8 = 5;

    /// Validate a raw difficulty rating.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Difficulty;
    ///
    /// assert_eq!(Difficulty::new(3).map(Difficulty::get), Ok(3));
    /// assert!(Difficulty::new(6).is_err());
    /// ```
    pub fn new(raw: u8) -> Result<Self, QuestionValidationError> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(QuestionValidationError::DifficultyOutOfRange { value: raw.into() })
        }
    }

    /// Raw rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QuestionValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

/// Reasons a question draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    /// Question text was missing or blank.
    #[error("question text must not be blank")]
    BlankText,
    /// Answer was missing or blank.
    #[error("answer must not be blank")]
    BlankAnswer,
    /// No category was supplied.
    #[error("category is required")]
    MissingCategory,
    /// No difficulty was supplied.
    #[error("difficulty is required")]
    MissingDifficulty,
    /// Difficulty fell outside `1..=5`.
    #[error("difficulty must be between 1 and 5, got {value}")]
    DifficultyOutOfRange {
        /// Rejected value.
        value: i64,
    },
}

impl QuestionValidationError {
    /// Wire field the failure relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankText => "question",
            Self::BlankAnswer => "answer",
            Self::MissingCategory => "category",
            Self::MissingDifficulty | Self::DifficultyOutOfRange { .. } => "difficulty",
        }
    }
}

/// Validated payload for inserting a new question.
///
/// ## Invariants
/// - `text` and `answer` are non-empty once trimmed; both are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    text: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl QuestionDraft {
    /// Validate raw creation fields.
    ///
    /// Checks run in wire-field order so the first reported failure is
    /// stable: text, answer, category, difficulty.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CategoryId, QuestionDraft, QuestionValidationError};
    ///
    /// let draft = QuestionDraft::try_new(
    ///     Some("Who painted the Mona Lisa?"),
    ///     Some("Leonardo da Vinci"),
    ///     Some(CategoryId::new(2)),
    ///     Some(3),
    /// )?;
    /// assert_eq!(draft.answer(), "Leonardo da Vinci");
    /// # Ok::<(), QuestionValidationError>(())
    /// ```
    pub fn try_new(
        text: Option<&str>,
        answer: Option<&str>,
        category: Option<CategoryId>,
        difficulty: Option<i64>,
    ) -> Result<Self, QuestionValidationError> {
        let text = non_blank(text).ok_or(QuestionValidationError::BlankText)?;
        let answer = non_blank(answer).ok_or(QuestionValidationError::BlankAnswer)?;
        let category = category.ok_or(QuestionValidationError::MissingCategory)?;
        let raw = difficulty.ok_or(QuestionValidationError::MissingDifficulty)?;
        let difficulty = u8::try_from(raw)
            .map_err(|_| QuestionValidationError::DifficultyOutOfRange { value: raw })
            .and_then(Difficulty::new)?;
        Ok(Self {
            text: text.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    /// Question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl Question {
    /// Identifier assigned by the store.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Flat wire representation. Formatting has no hidden state, so repeated
    /// calls yield identical output.
    #[must_use]
    pub fn format(&self) -> FormattedQuestion {
        FormattedQuestion::from(self)
    }
}

/// Flat, wire-shaped question record.
///
/// Field names match the established client contract: `question` carries the
/// text and `category` the category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedQuestion {
    /// Question identifier.
    pub id: QuestionId,
    /// Question text.
    pub question: String,
    /// Expected answer.
    pub answer: String,
    /// Category identifier.
    pub category: CategoryId,
    /// Difficulty rating.
    pub difficulty: Difficulty,
}

impl From<&Question> for FormattedQuestion {
    fn from(value: &Question) -> Self {
        Self {
            id: value.id,
            question: value.text.clone(),
            answer: value.answer.clone(),
            category: value.category,
            difficulty: value.difficulty,
        }
    }
}
