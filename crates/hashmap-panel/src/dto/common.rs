//! Common DTOs used across the panel

use crate::forms::FormView;
use crate::tables::PanelContext;
use serde::{Deserialize, Serialize};

/// Standard response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Notice for the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self { data, message: None }
    }

    /// Create a success response with data and message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Selection posted by a batch action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub object_ids: Vec<String>,
    /// Page the selection was made on
    #[serde(default)]
    pub context: PanelContext,
}

/// Rejected form submission
#[derive(Debug, Clone, Serialize)]
pub struct InvalidFormResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub form: FormView,
}

impl InvalidFormResponse {
    pub fn new(form: FormView) -> Self {
        Self {
            error: "validation_error",
            message: "Please correct the errors below.",
            form,
        }
    }
}

/// Batch action that failed for some of the selected rows
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailureResponse<T> {
    pub error: &'static str,
    pub message: String,
    pub data: T,
}
