//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Every failure body uses the same envelope:
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found", "traceId": "..."}
//! ```

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use actix_web::error::JsonPayloadError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Wire shape of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// Numeric HTTP status.
    #[schema(example = 404)]
    pub error: u16,
    /// Human-readable message.
    #[schema(example = "resource not found")]
    pub message: String,
    /// Correlation identifier, when the request was traced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal(INTERNAL_MESSAGE);
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl From<&Error> for ErrorEnvelope {
    fn from(error: &Error) -> Self {
        let visible = redact_if_internal(error);
        Self {
            success: false,
            error: status_for(visible.code()).as_u16(),
            message: visible.message().to_owned(),
            trace_id: visible.trace_id().map(str::to_owned),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorEnvelope::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_MESSAGE)
    }
}

/// Map JSON extractor failures onto the 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected malformed JSON body");
    Error::invalid_request(format!("malformed request body: {err}")).into()
}

/// Fallback for known resources hit with an unsupported method.
pub async fn method_not_allowed(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed(format!(
        "method {} is not allowed for {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for unknown paths.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no resource at {}", req.path())))
}
