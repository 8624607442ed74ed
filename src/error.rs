use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Course not found")]
    NotFound,

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Remote error [{code}]: {message}")]
    Remote { code: String, message: String },

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    pub fn database_unimplemented(action: &str) -> Self {
        AppError::Unimplemented(format!(
            "Database {action} not implemented yet. Set DEBUG_DATA=true to use mock data."
        ))
    }

    /// Connect protocol error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::Unimplemented(_) => "unimplemented",
            AppError::Validation(_) => "invalid_argument",
            _ => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unimplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Connect error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Database(e) => {
                error!("database error: {}", e);
                "Database error occurred".to_string()
            }
            AppError::Http(e) => {
                error!("http client error: {}", e);
                "Upstream request failed".to_string()
            }
            AppError::Remote { code, message } => {
                error!("remote error [{}]: {}", code, message);
                message.clone()
            }
            AppError::InternalServerError => "Internal server error".to_string(),
            AppError::NotFound => "Course with ID not found".to_string(),
            AppError::Unimplemented(msg) | AppError::Validation(msg) => msg.clone(),
        };

        let body = Json(ErrorResponse {
            code: self.code().to_string(),
            message,
        });

        (status, body).into_response()
    }
}
