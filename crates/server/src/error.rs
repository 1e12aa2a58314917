//! Unified REST error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding. All REST handlers return `Result<T, AppError>`; every
//! error body has the shape `{"message": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the REST API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Resource or route not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),
}

/// JSON body returned for every error and for plain confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AppError {
    /// Whether this error is the server's fault.
    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::Poisoned))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Repository(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(MessageBody { message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        Self::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use juice_bar_core::{JuiceId, OrderId};

    use super::*;

    async fn into_parts(err: AppError) -> (StatusCode, MessageBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Route not found".to_string());
        assert_eq!(err.to_string(), "Route not found");

        let err = AppError::from(RepositoryError::JuiceNotFound(JuiceId::new("1")));
        assert_eq!(err.to_string(), "Juice not found");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_message() {
        let (status, body) =
            into_parts(RepositoryError::OrderNotFound(OrderId::new("8")).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Order not found");
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) =
            into_parts(AppError::BadRequest("Name and price are required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Name and price are required");
    }

    #[tokio::test]
    async fn test_server_errors_are_redacted() {
        let (status, body) = into_parts(RepositoryError::Poisoned.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
    }
}
