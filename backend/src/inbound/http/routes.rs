//! Route table for the trivia API.
//!
//! Every known path gets a trailing catch-all resource so that a request with
//! an unsupported method receives a 405 envelope instead of falling through to
//! the 404 default service.

use actix_web::web;

use crate::domain::Error;
use crate::inbound::http::categories::{get_category, list_categories, list_category_questions};
use crate::inbound::http::error::{json_error_handler, method_not_allowed, not_found};
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::questions::{
    delete_question, get_question, list_questions, post_questions,
};
use crate::inbound::http::quizzes::next_quiz_question;

/// Prefix shared by every trivia endpoint.
pub const API_PREFIX: &str = "/api/v1";

const API_PATHS: [&str; 6] = [
    "/questions",
    "/questions/{question_id}",
    "/categories",
    "/categories/{category_id}",
    "/categories/{category_id}/questions",
    "/quizzes",
];

const HEALTH_PATHS: [&str; 2] = ["/health/live", "/health/ready"];

fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            Error::invalid_request(format!("malformed query string: {err}")).into()
        }))
        .app_data(web::PathConfig::default().error_handler(|err, req| {
            Error::not_found(format!("no resource at {}: {err}", req.path())).into()
        }));
}

/// Register the API scope, the health probes and the fallbacks.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_config(cfg);

    let mut api = web::scope(API_PREFIX)
        .service(list_questions)
        .service(get_question)
        .service(post_questions)
        .service(delete_question)
        .service(list_categories)
        .service(get_category)
        .service(list_category_questions)
        .service(next_quiz_question);
    for path in API_PATHS {
        api = api.service(web::resource(path).to(method_not_allowed));
    }
    cfg.service(api.default_service(web::to(not_found)));

    cfg.service(ready).service(live);
    for path in HEALTH_PATHS {
        cfg.service(web::resource(path).to(method_not_allowed));
    }
}
