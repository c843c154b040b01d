use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::modules::installments::models::ValidationError;
use crate::modules::installments::services::ScheduleError;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contract terms rejected by the schedule validator
    #[error("Invalid contract terms: {0}")]
    InvalidTerms(#[from] ValidationError),

    /// Terms validated but the schedule could not be laid out
    #[error("Schedule error: {0}")]
    Schedule(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not allowed in the contract's current state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::Invalid(invalid) => AppError::InvalidTerms(invalid),
            other => AppError::Schedule(other.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let mut error = serde_json::json!({
            "message": error_message,
            "code": status_code.as_u16(),
        });
        if let AppError::InvalidTerms(invalid) = self {
            error["kind"] = serde_json::Value::from(invalid.kind());
        }

        HttpResponse::build(status_code).json(serde_json::json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTerms(_) => StatusCode::BAD_REQUEST,
            AppError::Schedule(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }
}
