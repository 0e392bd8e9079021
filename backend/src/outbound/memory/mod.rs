//! In-memory `TriviaRepository` implementation.
//!
//! Questions and categories live behind a single `RwLock`; every insert and
//! delete holds the write lock for the whole mutation, so readers observe
//! either the state before or after it. List results are cloned snapshots
//! ordered by identifier.

mod seed;

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{TriviaRepository, TriviaRepositoryError};
use crate::domain::{Category, CategoryId, Question, QuestionDraft, QuestionId};

pub use seed::{SeedError, TriviaSeed, load_seed};

#[derive(Debug, Default)]
struct StoreState {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_id: u64,
}

/// Lock-guarded, process-local trivia store.
#[derive(Debug, Default)]
pub struct InMemoryTriviaRepository {
    state: RwLock<StoreState>,
}

fn map_poison<T>(_: PoisonError<T>) -> TriviaRepositoryError {
    TriviaRepositoryError::query("trivia store lock poisoned")
}

impl InMemoryTriviaRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a validated seed.
    ///
    /// New questions receive identifiers above the largest seeded one.
    ///
    /// # Examples
    /// ```
    /// use backend::outbound::memory::{InMemoryTriviaRepository, TriviaSeed};
    ///
    /// let seed = TriviaSeed::from_json(r#"{"categories":[{"id":1,"type":"Art"}]}"#)
    ///     .expect("valid seed");
    /// let repo = InMemoryTriviaRepository::from_seed(seed);
    /// # let _ = repo;
    /// ```
    pub fn from_seed(seed: TriviaSeed) -> Self {
        let categories = seed
            .categories
            .into_iter()
            .map(|category| (category.id(), category))
            .collect();
        let questions: BTreeMap<QuestionId, Question> = seed
            .questions
            .into_iter()
            .map(|question| (question.id(), question))
            .collect();
        let last_id = questions.keys().next_back().map_or(0, |id| id.get());
        Self {
            state: RwLock::new(StoreState {
                questions,
                categories,
                last_id,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, TriviaRepositoryError> {
        self.state.read().map_err(map_poison)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, TriviaRepositoryError> {
        self.state.write().map_err(map_poison)
    }
}

#[async_trait]
impl TriviaRepository for InMemoryTriviaRepository {
    async fn list_all_questions(&self) -> Result<Vec<Question>, TriviaRepositoryError> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, TriviaRepositoryError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|question| question.category() == category)
            .cloned()
            .collect())
    }

    async fn get_question(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, TriviaRepositoryError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(
        &self,
        draft: QuestionDraft,
    ) -> Result<Question, TriviaRepositoryError> {
        let mut state = self.write()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| TriviaRepositoryError::query("question identifiers exhausted"))?;
        let question = draft.into_question(QuestionId::new(next));
        state.last_id = next;
        state.questions.insert(question.id(), question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), TriviaRepositoryError> {
        self.write()?
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TriviaRepositoryError::question_not_found(id))
    }

    async fn list_all_categories(&self) -> Result<Vec<Category>, TriviaRepositoryError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, TriviaRepositoryError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }
}
