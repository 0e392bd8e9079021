//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{MockQuizQuery, MockTriviaCommand, MockTriviaQuery};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpState;

/// Build state from mocked ports.
pub fn state_with(
    query: MockTriviaQuery,
    quiz: MockQuizQuery,
    command: MockTriviaCommand,
) -> HttpState {
    HttpState::new(Arc::new(query), Arc::new(quiz), Arc::new(command))
}

/// State where only the query port has expectations.
pub fn state_with_query(query: MockTriviaQuery) -> HttpState {
    state_with(query, MockQuizQuery::new(), MockTriviaCommand::new())
}

/// State where only the quiz port has expectations.
pub fn state_with_quiz(quiz: MockQuizQuery) -> HttpState {
    state_with(MockTriviaQuery::new(), quiz, MockTriviaCommand::new())
}

/// State where only the command port has expectations.
pub fn state_with_command(command: MockTriviaCommand) -> HttpState {
    state_with(MockTriviaQuery::new(), MockQuizQuery::new(), command)
}

/// Send one request through the full route table and decode the JSON body.
pub async fn call_json(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}
