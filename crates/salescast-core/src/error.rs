use thiserror::Error;

/// Validation and contract errors exposed by `salescast-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date '{value}' is not a valid calendar date")]
    InvalidDate { value: String },
    #[error("invalid date input [{tokens}]: enter dates in 'YYYY-MM-DD' format")]
    InvalidDateInput { tokens: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}
