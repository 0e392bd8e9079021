//! Shared validation helpers for inbound HTTP adapters.

use serde_json::{Value, json};

use crate::domain::{Error, QuestionValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: impl Into<String>, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Read an optional integer that clients may send as a number or a numeric
/// string.
///
/// `null` and absence are `Ok(None)`; anything else that is not an integer
/// is an invalid request naming `field`.
pub(crate) fn optional_integer(
    value: Option<&Value>,
    field: FieldName,
) -> Result<Option<i64>, Error> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
        Some(_) => None,
    };
    parsed.map(Some).ok_or_else(|| {
        field_error(
            field,
            format!("{} must be an integer", field.as_str()),
            ErrorCode::InvalidValue,
        )
    })
}

/// Read an optional non-negative identifier.
pub(crate) fn optional_identifier(
    value: Option<&Value>,
    field: FieldName,
) -> Result<Option<u64>, Error> {
    optional_integer(value, field)?
        .map(|raw| {
            u64::try_from(raw).map_err(|_| {
                field_error(
                    field,
                    format!("{} must not be negative", field.as_str()),
                    ErrorCode::InvalidValue,
                )
            })
        })
        .transpose()
}

/// Map a draft validation failure onto a 400 naming the offending field.
pub(crate) fn map_question_validation_error(err: QuestionValidationError) -> Error {
    let code = match err {
        QuestionValidationError::DifficultyOutOfRange { .. } => ErrorCode::InvalidValue,
        QuestionValidationError::BlankText
        | QuestionValidationError::BlankAnswer
        | QuestionValidationError::MissingCategory
        | QuestionValidationError::MissingDifficulty => ErrorCode::MissingField,
    };
    field_error(FieldName::new(err.field()), err.to_string(), code)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("category");

    #[rstest]
    #[case(None, None)]
    #[case(Some(json!(null)), None)]
    #[case(Some(json!(4)), Some(4))]
    #[case(Some(json!("4")), Some(4))]
    #[case(Some(json!(" 12 ")), Some(12))]
    #[case(Some(json!(-3)), Some(-3))]
    fn integers_accept_numbers_and_numeric_strings(
        #[case] value: Option<Value>,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(
            optional_integer(value.as_ref(), FIELD).expect("valid integer"),
            expected
        );
    }

    #[rstest]
    #[case(json!("science"))]
    #[case(json!(1.5))]
    #[case(json!([1]))]
    #[case(json!({"id": 1}))]
    fn non_integers_name_the_field(#[case] value: Value) {
        let err = optional_integer(Some(&value), FIELD).expect_err("not an integer");

        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({"field": "category", "code": "invalid_value"}))
        );
    }

    #[rstest]
    fn negative_identifiers_are_rejected() {
        let err = optional_identifier(Some(&json!(-1)), FIELD).expect_err("negative id");
        assert_eq!(err.message(), "category must not be negative");
    }

    #[rstest]
    #[case(QuestionValidationError::BlankText, "question", "missing_field")]
    #[case(QuestionValidationError::MissingCategory, "category", "missing_field")]
    #[case(
        QuestionValidationError::DifficultyOutOfRange { value: 9 },
        "difficulty",
        "invalid_value"
    )]
    fn draft_failures_name_the_field(
        #[case] err: QuestionValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = map_question_validation_error(err);

        assert_eq!(mapped.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(mapped.details(), Some(&json!({"field": field, "code": code})));
    }
}
