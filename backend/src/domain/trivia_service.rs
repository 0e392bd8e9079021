//! Trivia domain service.
//!
//! Implements the question, quiz and command driving ports over a
//! [`TriviaRepository`]. Each operation takes one snapshot from the store,
//! applies the pure selection components (pagination, category catalog,
//! search, quiz selector) and returns data or a typed domain error.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber, PageRequest, PageSize};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListing, QuestionPage, QuizQuery,
    QuizRequest, TriviaCommand, TriviaQuery, TriviaRepository, TriviaRepositoryError,
};
use crate::domain::{
    CandidatePicker, Category, CategoryCatalog, CategoryFilter, CategoryId, Error,
    FormattedQuestion, Question, QuestionDraft, QuestionId, QuizDraw, SearchTerm,
    ThreadRngPicker, next_question, search,
};

fn map_repository_error(error: TriviaRepositoryError) -> Error {
    match error {
        TriviaRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("trivia store unavailable: {message}"))
        }
        TriviaRepositoryError::Query { message } => {
            Error::internal(format!("trivia store error: {message}"))
        }
        TriviaRepositoryError::QuestionNotFound { id } => {
            Error::not_found(format!("question {id} not found"))
        }
    }
}

/// Question browsing, quiz and mutation service.
#[derive(Clone)]
pub struct TriviaService<R> {
    repo: Arc<R>,
    picker: Arc<dyn CandidatePicker>,
    page_size: PageSize,
}

impl<R> TriviaService<R> {
    /// Create a service with the default page size and a thread-local RNG.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            picker: Arc::new(ThreadRngPicker),
            page_size: PageSize::default(),
        }
    }

    /// Override the number of questions per page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the random source used for quiz draws.
    #[must_use]
    pub fn with_picker(mut self, picker: Arc<dyn CandidatePicker>) -> Self {
        self.picker = picker;
        self
    }

    fn page_of(
        &self,
        questions: &[Question],
        number: PageNumber,
        current_category: Option<String>,
    ) -> Result<QuestionPage, Error> {
        let page = Page::from_slice(questions, PageRequest::new(number, self.page_size));
        if page.is_beyond_end() {
            return Err(Error::not_found(format!(
                "page {} is beyond the last page",
                number.get()
            ))
            .with_details(json!({ "page": number.get(), "total": page.total() })));
        }
        let total_questions = page.total();
        Ok(QuestionPage {
            questions: page.items().iter().map(Question::format).collect(),
            total_questions,
            current_category,
        })
    }
}

impl<R> TriviaService<R>
where
    R: TriviaRepository,
{
    async fn catalog(&self) -> Result<CategoryCatalog, Error> {
        let categories = self
            .repo
            .list_all_categories()
            .await
            .map_err(map_repository_error)?;
        Ok(CategoryCatalog::new(categories))
    }

    async fn require_category(&self, id: CategoryId) -> Result<Category, Error> {
        self.repo
            .get_category(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("category {id} not found")))
    }

    async fn count_questions(&self) -> Result<usize, Error> {
        self.repo
            .list_all_questions()
            .await
            .map(|questions| questions.len())
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> TriviaQuery for TriviaService<R>
where
    R: TriviaRepository,
{
    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error> {
        let questions = self
            .repo
            .list_all_questions()
            .await
            .map_err(map_repository_error)?;
        let catalog = self.catalog().await?;
        Ok(QuestionListing {
            page: self.page_of(&questions, page, None)?,
            categories: catalog.all_categories(),
        })
    }

    async fn list_category_questions(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<QuestionPage, Error> {
        let catalog = self.catalog().await?;
        let current = catalog
            .resolve(category)
            .map_err(|err| Error::not_found(err.to_string()))?;
        let questions = self
            .repo
            .list_questions_by_category(category)
            .await
            .map_err(map_repository_error)?;
        self.page_of(&questions, page, Some(current.kind().to_owned()))
    }

    async fn search_questions(
        &self,
        term: SearchTerm,
        page: PageNumber,
    ) -> Result<QuestionPage, Error> {
        let corpus = self
            .repo
            .list_all_questions()
            .await
            .map_err(map_repository_error)?;
        let matches = search(&term, &corpus);
        debug!(term = term.as_str(), matches = matches.len(), "question search");
        self.page_of(&matches, page, None)
    }

    async fn get_question(&self, id: QuestionId) -> Result<FormattedQuestion, Error> {
        self.repo
            .get_question(id)
            .await
            .map_err(map_repository_error)?
            .map(|question| question.format())
            .ok_or_else(|| Error::not_found(format!("question {id} not found")))
    }

    async fn list_categories(&self) -> Result<BTreeMap<CategoryId, String>, Error> {
        Ok(self.catalog().await?.all_categories())
    }

    async fn resolve_category(&self, id: CategoryId) -> Result<Category, Error> {
        let catalog = self.catalog().await?;
        catalog
            .resolve(id)
            .cloned()
            .map_err(|err| Error::not_found(err.to_string()))
    }
}

#[async_trait]
impl<R> QuizQuery for TriviaService<R>
where
    R: TriviaRepository,
{
    async fn next_question(&self, request: QuizRequest) -> Result<QuizDraw, Error> {
        let QuizRequest { filter, asked } = request;
        let pool = match filter {
            CategoryFilter::Any => self.repo.list_all_questions().await,
            CategoryFilter::Only(id) => {
                self.require_category(id).await?;
                self.repo.list_questions_by_category(id).await
            }
        }
        .map_err(map_repository_error)?;

        let draw = next_question(filter, &asked, &pool, self.picker.as_ref());
        if matches!(draw, QuizDraw::Exhausted) {
            debug!(asked = asked.len(), pool = pool.len(), "quiz session exhausted");
        }
        Ok(draw)
    }
}

#[async_trait]
impl<R> TriviaCommand for TriviaService<R>
where
    R: TriviaRepository,
{
    async fn create_question(&self, draft: QuestionDraft) -> Result<CreateQuestionResponse, Error> {
        let category = draft.category();
        let known = self
            .repo
            .get_category(category)
            .await
            .map_err(map_repository_error)?;
        if known.is_none() {
            return Err(
                Error::invalid_request(format!("category {category} does not exist"))
                    .with_details(json!({ "field": "category", "value": category.get() })),
            );
        }

        let question = self
            .repo
            .insert_question(draft)
            .await
            .map_err(map_repository_error)?;
        let total_questions = self.count_questions().await?;
        info!(question_id = %question.id(), category = %category, "question created");
        Ok(CreateQuestionResponse {
            question: question.format(),
            total_questions,
        })
    }

    async fn delete_question(&self, id: QuestionId) -> Result<DeleteQuestionResponse, Error> {
        self.repo
            .delete_question(id)
            .await
            .map_err(|err| match err {
                TriviaRepositoryError::QuestionNotFound { id } => {
                    Error::unprocessable(format!("question {id} does not exist"))
                }
                other => map_repository_error(other),
            })?;
        let total_questions = self.count_questions().await?;
        info!(question_id = %id, "question deleted");
        Ok(DeleteQuestionResponse {
            deleted: id,
            total_questions,
        })
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
