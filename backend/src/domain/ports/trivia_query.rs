//! Driving ports for question browsing and quiz draws.
//!
//! Inbound adapters call these ports with explicit parameters (page number,
//! search term, quiz state) rather than reading any ambient request context.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use pagination::PageNumber;

use crate::domain::{
    Category, CategoryFilter, CategoryId, Error, FormattedQuestion, QuestionId, QuizDraw,
    SearchTerm,
};

/// One page of formatted questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// Questions on the requested page, ordered by identifier.
    pub questions: Vec<FormattedQuestion>,
    /// Size of the whole filtered collection, not just this page.
    pub total_questions: usize,
    /// Display name of the category the page is scoped to, if any.
    pub current_category: Option<String>,
}

/// First view of the question list: a page plus the category index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    /// The requested page.
    pub page: QuestionPage,
    /// Mapping from category identifier to display name.
    pub categories: BTreeMap<CategoryId, String>,
}

/// Domain use-case port for reading questions and categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// Page through every question.
    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error>;

    /// Page through the questions of one category.
    async fn list_category_questions(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<QuestionPage, Error>;

    /// Page through questions whose text contains `term`.
    async fn search_questions(
        &self,
        term: SearchTerm,
        page: PageNumber,
    ) -> Result<QuestionPage, Error>;

    /// Fetch one question.
    async fn get_question(&self, id: QuestionId) -> Result<FormattedQuestion, Error>;

    /// Mapping from category identifier to display name.
    async fn list_categories(&self) -> Result<BTreeMap<CategoryId, String>, Error>;

    /// Resolve one category.
    async fn resolve_category(&self, id: CategoryId) -> Result<Category, Error>;
}

/// Caller-held state of one quiz session plus the category to draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRequest {
    /// Category restriction.
    pub filter: CategoryFilter,
    /// Identifiers already asked in this session.
    pub asked: HashSet<QuestionId>,
}

/// Domain use-case port for quiz draws.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuery: Send + Sync {
    /// Draw one unseen question, or report that the session is exhausted.
    async fn next_question(&self, request: QuizRequest) -> Result<QuizDraw, Error>;
}
