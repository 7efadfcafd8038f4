//! Unified error handling for the hashmap dashboard
//!
//! Local failures (bad input, configuration) keep their detail in the
//! response. Failures of the remote rating API all collapse into one generic
//! notice for the operator; their detail only goes to the logs.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Notice shown to the operator for any rating API failure
pub const REMOTE_FAILURE_NOTICE: &str = "Unable to complete the request.";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    // ==================== Remote API Errors ====================
    #[error("Rating API error: {0}")]
    Remote(String),

    #[error("Rating API unreachable: {0}")]
    RemoteConnection(String),

    // ==================== Startup Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation(_) | AppError::InvalidInput(_) | AppError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }

            // 502 Bad Gateway
            AppError::Remote(_) | AppError::RemoteConnection(_) => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::MissingField(_) => "missing_field",
            AppError::Remote(_) | AppError::RemoteConnection(_) => "remote_error",
            AppError::Config(_) => "config_error",
        }
    }

    /// Returns true when the failure came from the rating API
    pub fn is_remote(&self) -> bool {
        matches!(self, AppError::Remote(_) | AppError::RemoteConnection(_))
    }

    /// Message safe to show to the operator
    pub fn public_message(&self) -> String {
        if self.is_remote() {
            REMOTE_FAILURE_NOTICE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.public_message(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
