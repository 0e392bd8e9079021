//! Driving port for creating and deleting questions.

use async_trait::async_trait;

use crate::domain::{Error, FormattedQuestion, QuestionDraft, QuestionId};

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestionResponse {
    /// The stored question.
    pub question: FormattedQuestion,
    /// Number of questions after the insert.
    pub total_questions: usize,
}

/// Result of a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteQuestionResponse {
    /// Identifier that was removed.
    pub deleted: QuestionId,
    /// Number of questions after the delete.
    pub total_questions: usize,
}

/// Domain use-case port for question mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaCommand: Send + Sync {
    /// Store a validated question.
    async fn create_question(&self, draft: QuestionDraft) -> Result<CreateQuestionResponse, Error>;

    /// Delete a question by identifier.
    async fn delete_question(&self, id: QuestionId) -> Result<DeleteQuestionResponse, Error>;
}
