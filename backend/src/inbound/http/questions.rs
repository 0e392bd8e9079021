//! Question endpoints.
//!
//! ```text
//! GET    /api/v1/questions?page=N
//! GET    /api/v1/questions/{question_id}
//! POST   /api/v1/questions          search when `searchTerm` is set, create otherwise
//! DELETE /api/v1/questions/{question_id}
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, delete, get, post, web};
use pagination::PageNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListing, QuestionPage,
};
use crate::domain::{CategoryId, FormattedQuestion, QuestionDraft, QuestionId, SearchTerm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::FormattedQuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, map_question_validation_error, optional_identifier, optional_integer,
};

/// `?page=` query parameter shared by paged endpoints.
///
/// Anything other than a positive integer selects the first page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-indexed page number.
    #[param(value_type = Option<u64>, example = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Resolve the requested page.
    pub fn page_number(&self) -> PageNumber {
        PageNumber::parse_lenient(self.page.as_deref())
    }
}

/// One page of the full question list, plus the category index.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    /// Always `true`.
    pub success: bool,
    /// Questions on the requested page.
    #[schema(value_type = Vec<FormattedQuestionSchema>)]
    pub questions: Vec<FormattedQuestion>,
    /// Size of the whole collection.
    pub total_questions: usize,
    /// Mapping from category identifier to display name.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: BTreeMap<CategoryId, String>,
    /// Always `null` for the unscoped list.
    pub current_category: Option<String>,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            questions: listing.page.questions,
            total_questions: listing.page.total_questions,
            categories: listing.categories,
            current_category: listing.page.current_category,
        }
    }
}

/// One page of a category listing or of search results.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponse {
    /// Always `true`.
    pub success: bool,
    /// Questions on the requested page.
    #[schema(value_type = Vec<FormattedQuestionSchema>)]
    pub questions: Vec<FormattedQuestion>,
    /// Size of the whole filtered collection.
    pub total_questions: usize,
    /// Category display name for category listings, `null` for searches.
    pub current_category: Option<String>,
}

impl From<QuestionPage> for QuestionPageResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: page.current_category,
        }
    }
}

/// A single question.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    /// Always `true`.
    pub success: bool,
    /// The requested question.
    #[schema(value_type = FormattedQuestionSchema)]
    pub question: FormattedQuestion,
}

/// Body of `POST /questions`.
///
/// A non-blank `searchTerm` turns the request into a search and the other
/// fields are ignored. `category` and `difficulty` accept numbers or numeric
/// strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct QuestionsPostRequest {
    /// Case-insensitive substring to search for.
    #[serde(rename = "searchTerm", skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Question text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Expected answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<u64>, example = 1)]
    pub category: Option<Value>,
    /// Difficulty from 1 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<u8>, example = 3)]
    pub difficulty: Option<Value>,
}

impl QuestionsPostRequest {
    fn search_term(&self) -> Option<SearchTerm> {
        self.search_term
            .as_deref()
            .and_then(|raw| SearchTerm::new(raw).ok())
    }

    fn into_draft(self) -> ApiResult<QuestionDraft> {
        let category = optional_identifier(self.category.as_ref(), FieldName::new("category"))?
            .map(CategoryId::new);
        let difficulty = optional_integer(self.difficulty.as_ref(), FieldName::new("difficulty"))?;
        QuestionDraft::try_new(
            self.question.as_deref(),
            self.answer.as_deref(),
            category,
            difficulty,
        )
        .map_err(map_question_validation_error)
    }
}

/// Outcome of a successful create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier assigned to the new question.
    #[schema(value_type = u64, example = 24)]
    pub created: QuestionId,
    /// Number of questions after the insert.
    pub total_questions: usize,
}

impl From<CreateQuestionResponse> for CreatedResponse {
    fn from(response: CreateQuestionResponse) -> Self {
        Self {
            success: true,
            created: response.question.id,
            total_questions: response.total_questions,
        }
    }
}

/// Outcome of a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier that was removed.
    #[schema(value_type = u64, example = 5)]
    pub deleted: QuestionId,
    /// Number of questions after the delete.
    pub total_questions: usize,
}

impl From<DeleteQuestionResponse> for DeletedResponse {
    fn from(response: DeleteQuestionResponse) -> Self {
        Self {
            success: true,
            deleted: response.deleted,
            total_questions: response.total_questions,
        }
    }
}

/// List every question, one page at a time.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Question page", body = QuestionListResponse),
        (status = 404, description = "Page beyond the last question", body = ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let listing = state.query.list_questions(query.page_number()).await?;
    Ok(HttpResponse::Ok().json(QuestionListResponse::from(listing)))
}

/// Fetch one question.
#[utoipa::path(
    get,
    path = "/api/v1/questions/{question_id}",
    params(("question_id" = u64, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question", body = QuestionResponse),
        (status = 404, description = "Unknown question", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "getQuestion"
)]
#[get("/questions/{question_id}")]
pub async fn get_question(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let question = state
        .query
        .get_question(QuestionId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(QuestionResponse {
        success: true,
        question,
    }))
}

/// Search questions or create one, depending on the body.
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    params(PageQuery),
    request_body = QuestionsPostRequest,
    responses(
        (status = 200, description = "Creation outcome; searches return a question page instead",
            body = CreatedResponse),
        (status = 400, description = "Invalid question or malformed body", body = ErrorEnvelope),
        (status = 404, description = "Page beyond the last match", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "searchOrCreateQuestion"
)]
#[post("/questions")]
pub async fn post_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<QuestionsPostRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    if let Some(term) = payload.search_term() {
        let page = state
            .query
            .search_questions(term, query.page_number())
            .await?;
        return Ok(HttpResponse::Ok().json(QuestionPageResponse::from(page)));
    }

    let draft = payload.into_draft()?;
    let created = state.command.create_question(draft).await?;
    Ok(HttpResponse::Ok().json(CreatedResponse::from(created)))
}

/// Delete one question.
#[utoipa::path(
    delete,
    path = "/api/v1/questions/{question_id}",
    params(("question_id" = u64, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 422, description = "Question does not exist", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let deleted = state
        .command
        .delete_question(QuestionId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::from(deleted)))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
