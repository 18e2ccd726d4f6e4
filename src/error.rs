use std::io;

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("No course found")]
    NotFound { id: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("No free course id left")]
    IdSpaceExhausted,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CourseError {
    pub fn status(&self) -> StatusCode {
        match self {
            CourseError::NotFound { .. } => StatusCode::NOT_FOUND,
            CourseError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            CourseError::Body(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CourseError::NotFound { .. } => "not_found",
            CourseError::InvalidBody(_) => "invalid_body",
            CourseError::Body(_) => "invalid_body",
            CourseError::IdSpaceExhausted => "id_space_exhausted",
            CourseError::Io(_) => "io_error",
            CourseError::Config(_) => "config_error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type: error_type.into(),
            },
        }
    }
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else if let CourseError::NotFound { id } = &self {
            tracing::warn!(id = %id, "Course not found");
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }

        (status, Json(ErrorResponse::new(self.to_string(), self.kind()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
