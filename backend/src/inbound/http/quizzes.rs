//! Quiz endpoint.
//!
//! ```text
//! POST /api/v1/quizzes
//! ```
//!
//! The client holds the session: every request carries the identifiers
//! already asked and the category to draw from. An absent `quiz_category`,
//! or one with identifier `0`, means "all categories".

use std::collections::HashSet;

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::QuizRequest;
use crate::domain::{CategoryFilter, CategoryId, FormattedQuestion, QuestionId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::FormattedQuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, optional_identifier};

const ALL_CATEGORIES: u64 = 0;

/// Category selector sent by quiz clients.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryRequest {
    /// Category identifier; `0` selects every category.
    #[schema(value_type = u64, example = 1)]
    pub id: Option<Value>,
    /// Display name. Informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Science")]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestBody {
    /// Identifiers already asked in this session.
    #[serde(default, alias = "previous_question")]
    #[schema(value_type = Vec<u64>, example = json!([20, 21]))]
    pub previous_questions: Vec<QuestionId>,
    /// Category to draw from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_category: Option<QuizCategoryRequest>,
}

impl QuizRequestBody {
    fn into_request(self) -> ApiResult<QuizRequest> {
        let raw = match &self.quiz_category {
            Some(category) => {
                optional_identifier(category.id.as_ref(), FieldName::new("quiz_category.id"))?
            }
            None => None,
        };
        let filter = match raw {
            None | Some(ALL_CATEGORIES) => CategoryFilter::Any,
            Some(id) => CategoryFilter::Only(CategoryId::new(id)),
        };
        Ok(QuizRequest {
            filter,
            asked: self.previous_questions.into_iter().collect::<HashSet<_>>(),
        })
    }
}

/// Next quiz question, or `null` once the session is exhausted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    /// Always `true`.
    pub success: bool,
    /// The drawn question.
    #[schema(value_type = Option<FormattedQuestionSchema>)]
    pub question: Option<FormattedQuestion>,
}

/// Draw the next unseen quiz question.
#[utoipa::path(
    post,
    path = "/api/v1/quizzes",
    request_body = QuizRequestBody,
    responses(
        (status = 200, description = "Next question, null when exhausted", body = QuizResponse),
        (status = 400, description = "Malformed quiz body", body = ErrorEnvelope),
        (status = 404, description = "Unknown category", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quizzes")]
pub async fn next_quiz_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_request()?;
    let draw = state.quiz.next_question(request).await?;
    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question: draw.into_question().map(|question| question.format()),
    }))
}

#[cfg(test)]
mod tests {
    //! Handler coverage against a mocked quiz port.
    use super::*;
    use crate::domain::ports::MockQuizQuery;
    use crate::domain::{QuestionDraft, QuizDraw};
    use crate::inbound::http::test_utils::{call_json, state_with_quiz};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;

    fn drawn() -> QuizDraw {
        let question = QuestionDraft::try_new(
            Some("Who discovered penicillin?"),
            Some("Alexander Fleming"),
            Some(CategoryId::new(1)),
            Some(3),
        )
        .expect("valid draft")
        .into_question(QuestionId::new(21));
        QuizDraw::Question(question)
    }

    #[rstest]
    #[case::explicit_category(
        json!({"previous_questions": [20], "quiz_category": {"id": 1, "type": "Science"}}),
        CategoryFilter::Only(CategoryId::new(1)),
        vec![20]
    )]
    #[case::string_identifier(
        json!({"previous_questions": [], "quiz_category": {"id": "1", "type": "Science"}}),
        CategoryFilter::Only(CategoryId::new(1)),
        vec![]
    )]
    #[case::zero_means_all(
        json!({"previous_questions": [2, 4], "quiz_category": {"id": 0, "type": "click"}}),
        CategoryFilter::Any,
        vec![2, 4]
    )]
    #[case::singular_alias(
        json!({"previous_question": [5]}),
        CategoryFilter::Any,
        vec![5]
    )]
    #[case::empty_body(json!({}), CategoryFilter::Any, vec![])]
    fn body_maps_to_quiz_request(
        #[case] body: Value,
        #[case] filter: CategoryFilter,
        #[case] asked: Vec<u64>,
    ) {
        let parsed: QuizRequestBody = serde_json::from_value(body).expect("valid body");

        let request = parsed.into_request().expect("valid request");

        assert_eq!(request.filter, filter);
        assert_eq!(
            request.asked,
            asked.into_iter().map(QuestionId::new).collect::<HashSet<_>>()
        );
    }

    #[rstest]
    fn non_numeric_category_is_rejected() {
        let parsed: QuizRequestBody =
            serde_json::from_value(json!({"quiz_category": {"id": "science"}}))
                .expect("valid body");

        let err = parsed.into_request().expect_err("non-numeric id");

        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_drawn_question() {
        let mut quiz = MockQuizQuery::new();
        quiz.expect_next_question()
            .withf(|request| request.asked.contains(&QuestionId::new(20)))
            .times(1)
            .return_once(|_| Ok(drawn()));

        let (status, body) = call_json(
            state_with_quiz(quiz),
            actix_test::TestRequest::post()
                .uri("/api/v1/quizzes")
                .set_json(json!({"previous_questions": [20], "quiz_category": {"id": 1}})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.pointer("/question/id"), Some(&json!(21)));
        assert_eq!(body.pointer("/question/answer"), Some(&json!("Alexander Fleming")));
    }

    #[rstest]
    #[actix_web::test]
    async fn exhausted_session_returns_null_question() {
        let mut quiz = MockQuizQuery::new();
        quiz.expect_next_question()
            .return_once(|_| Ok(QuizDraw::Exhausted));

        let (status, body) = call_json(
            state_with_quiz(quiz),
            actix_test::TestRequest::post()
                .uri("/api/v1/quizzes")
                .set_json(json!({"previous_questions": [21]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "question": null}));
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let (status, body) = call_json(
            state_with_quiz(MockQuizQuery::new()),
            actix_test::TestRequest::post()
                .uri("/api/v1/quizzes")
                .set_json(json!({"previous_questions": "twenty"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("error"), Some(&json!(400)));
    }
}
