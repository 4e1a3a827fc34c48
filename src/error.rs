// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("agent API configuration is missing")]
    ConfigurationMissing,

    #[error("{0}")]
    Validation(String),

    #[error("agent API returned status {status}")]
    Upstream { status: u16 },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(err.into())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigurationMissing => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent back to the browser. Only validation messages carry detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ConfigurationMissing => {
                "AI service is not configured. Please contact support.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Upstream { .. } => "Failed to generate response from AI agent".to_string(),
            AppError::Unexpected(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ConfigurationMissing => {
                tracing::error!("Missing agent API configuration");
            }
            AppError::Unexpected(err) => {
                tracing::error!(error = ?err, "Chat relay failed");
            }
            AppError::Validation(msg) => {
                tracing::warn!(reason = %msg, "Rejected chat request");
            }
            AppError::Upstream { .. } => {}
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
