//! Driven port for the question and category store.
//!
//! The store is the authority on which records exist. Each insert and delete
//! is atomic for a single record and immediately visible to later reads; the
//! domain treats every list result as an immutable snapshot for the duration
//! of one call. A missing record is reported as `Ok(None)` and kept apart from
//! genuine store failures.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId, Question, QuestionDraft, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by trivia store adapters.
    pub enum TriviaRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "trivia store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "trivia store query failed: {message}",
        /// Delete targeted a question that does not exist.
        QuestionNotFound { id: QuestionId } => "question {id} not found",
    }
}

/// Port for reading and mutating stored questions and categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    /// Every question, ordered by identifier ascending.
    async fn list_all_questions(&self) -> Result<Vec<Question>, TriviaRepositoryError>;

    /// Questions in one category, ordered by identifier ascending.
    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, TriviaRepositoryError>;

    /// Fetch a question by identifier.
    async fn get_question(&self, id: QuestionId)
    -> Result<Option<Question>, TriviaRepositoryError>;

    /// Store a validated draft and return it with its assigned identifier.
    async fn insert_question(&self, draft: QuestionDraft)
    -> Result<Question, TriviaRepositoryError>;

    /// Remove a question, failing with
    /// [`TriviaRepositoryError::QuestionNotFound`] when it does not exist.
    async fn delete_question(&self, id: QuestionId) -> Result<(), TriviaRepositoryError>;

    /// Every category, ordered by identifier ascending.
    async fn list_all_categories(&self) -> Result<Vec<Category>, TriviaRepositoryError>;

    /// Fetch a category by identifier.
    async fn get_category(&self, id: CategoryId)
    -> Result<Option<Category>, TriviaRepositoryError>;
}
