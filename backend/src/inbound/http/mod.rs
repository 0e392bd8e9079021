//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::{ApiResult, ErrorEnvelope};
