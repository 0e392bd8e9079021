//! Category endpoints.
//!
//! ```text
//! GET /api/v1/categories
//! GET /api/v1/categories/{category_id}
//! GET /api/v1/categories/{category_id}/questions?page=N
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, CategoryId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{PageQuery, QuestionPageResponse};
use crate::inbound::http::schemas::CategorySchema;
use crate::inbound::http::state::HttpState;

/// Every category as an `id -> type` map.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    /// Always `true`.
    pub success: bool,
    /// Mapping from category identifier to display name.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: BTreeMap<CategoryId, String>,
    /// Number of categories.
    pub total_categories: usize,
}

/// A single category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    /// Always `true`.
    pub success: bool,
    /// The requested category.
    #[schema(value_type = CategorySchema)]
    pub category: Category,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Category index", body = CategoryListResponse),
        (status = 503, description = "Store unavailable", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.query.list_categories().await?;
    Ok(HttpResponse::Ok().json(CategoryListResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// Fetch one category.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = u64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category", body = CategoryResponse),
        (status = 404, description = "Unknown category", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{category_id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let category = state
        .query
        .resolve_category(CategoryId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(CategoryResponse {
        success: true,
        category,
    }))
}

/// List the questions of one category, one page at a time.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category_id}/questions",
    params(
        ("category_id" = u64, Path, description = "Category identifier"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question page", body = QuestionPageResponse),
        (status = 404, description = "Unknown category or page beyond the end", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
#[get("/categories/{category_id}/questions")]
pub async fn list_category_questions(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .query
        .list_category_questions(CategoryId::new(path.into_inner()), query.page_number())
        .await?;
    Ok(HttpResponse::Ok().json(QuestionPageResponse::from(page)))
}
