//! Domain primitives, selection components and the trivia service.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter and the
//! store adapters, plus the pure components that page, search and draw from
//! snapshots of the store. Nothing in this module performs I/O directly; the
//! service reaches the store through [`ports::TriviaRepository`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error payload with stable code.
//! - Question / QuestionDraft: stored and not-yet-stored trivia records.
//! - Category / CategoryCatalog: category lookup and display names.
//! - SearchTerm / search: case-insensitive substring search.
//! - next_question / QuizDraw: uniform no-repeat quiz draws.
//! - TriviaService: implementation of the driving ports.

pub mod category;
pub mod category_catalog;
pub mod error;
pub mod ports;
pub mod question;
pub mod quiz;
pub mod search;
pub mod trace_id;
pub mod trivia_service;

pub use self::category::{Category, CategoryFilter, CategoryId};
pub use self::category_catalog::{CategoryCatalog, CategoryNotFound};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::question::{
    Difficulty, FormattedQuestion, Question, QuestionDraft, QuestionId, QuestionValidationError,
};
pub use self::quiz::{CandidatePicker, QuizDraw, SeededPicker, ThreadRngPicker, next_question};
pub use self::search::{BlankSearchTerm, SearchTerm, search};
pub use self::trace_id::TraceId;
pub use self::trivia_service::TriviaService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<u32> {
///     Err(Error::not_found("nope"))
/// }
///
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
