//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every trivia endpoint plus the health probes
//! - **Schemas**: domain type wrappers ([`FormattedQuestionSchema`],
//!   [`CategorySchema`]) that provide OpenAPI definitions without coupling
//!   domain types to the utoipa framework, and the failure envelope
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::ErrorEnvelope;
use crate::inbound::http::categories::{CategoryListResponse, CategoryResponse};
use crate::inbound::http::questions::{
    CreatedResponse, DeletedResponse, QuestionListResponse, QuestionPageResponse,
    QuestionResponse, QuestionsPostRequest,
};
use crate::inbound::http::quizzes::{QuizCategoryRequest, QuizRequestBody, QuizResponse};
use crate::inbound::http::schemas::{CategorySchema, FormattedQuestionSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Paginated trivia questions, category browsing, search and quiz draws.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::get_question,
        crate::inbound::http::questions::post_questions,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::list_category_questions,
        crate::inbound::http::quizzes::next_quiz_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        FormattedQuestionSchema,
        CategorySchema,
        ErrorEnvelope,
        QuestionListResponse,
        QuestionPageResponse,
        QuestionResponse,
        QuestionsPostRequest,
        CreatedResponse,
        DeletedResponse,
        CategoryListResponse,
        CategoryResponse,
        QuizCategoryRequest,
        QuizRequestBody,
        QuizResponse,
    )),
    tags(
        (name = "questions", description = "Question listing, search and mutation"),
        (name = "categories", description = "Category browsing"),
        (name = "quizzes", description = "Quiz draws"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const QUESTION_SCHEMA_NAME: &str = "crate.domain.FormattedQuestion";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_question_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(QUESTION_SCHEMA_NAME).expect("question schema");

        for field in ["id", "question", "answer", "category", "difficulty"] {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[test]
    fn openapi_envelope_has_numeric_error() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("ErrorEnvelope").expect("envelope schema");

        assert_object_schema_has_field(envelope, "success");
        assert_object_schema_has_field(envelope, "error");
        assert_object_schema_has_field(envelope, "traceId");
    }

    #[test]
    fn openapi_lists_every_trivia_path() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/v1/questions",
            "/api/v1/questions/{question_id}",
            "/api/v1/categories",
            "/api/v1/categories/{category_id}",
            "/api/v1/categories/{category_id}/questions",
            "/api/v1/quizzes",
            "/health/live",
            "/health/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
