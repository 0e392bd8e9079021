//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, TriviaSettings};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::error::not_found;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::routes::configure;
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Construct an Actix HTTP server over the given handler state.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is bound.
/// - `http_state`: domain ports used by the handlers.
/// - `config`: binding settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Wiring coverage for the assembled application.
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use backend::domain::TriviaService;
    use backend::outbound::memory::InMemoryTriviaRepository;
    use rstest::rstest;

    fn deps() -> AppDependencies {
        let service = TriviaService::new(Arc::new(InMemoryTriviaRepository::new()));
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::from_service(Arc::new(service))),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_paths_use_the_envelope() {
        let app = actix_test::init_service(build_app(deps())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("trace-id"));
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("error"), Some(&serde_json::json!(404)));
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_store_lists_an_empty_first_page() {
        let app = actix_test::init_service(build_app(deps())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/questions")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_is_false_until_marked() {
        let app = actix_test::init_service(build_app(deps())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
