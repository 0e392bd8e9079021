//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::FormattedQuestion`].
///
/// Flat question record returned by every question endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::FormattedQuestion)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FormattedQuestionSchema {
    /// Question identifier.
    #[schema(example = 20)]
    id: u64,
    /// Question text.
    #[schema(example = "What is the heaviest organ in the human body?")]
    question: String,
    /// Expected answer.
    #[schema(example = "The Liver")]
    answer: String,
    /// Category identifier.
    #[schema(example = 1)]
    category: u64,
    /// Difficulty rating from 1 to 5.
    #[schema(example = 4, minimum = 1, maximum = 5)]
    difficulty: u8,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Category)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CategorySchema {
    /// Category identifier.
    #[schema(example = 1)]
    id: u64,
    /// Display name.
    #[schema(rename = "type", example = "Science")]
    kind: String,
}
