//! Mapping of failures onto HTTP responses
//!
//! Error bodies are the bare message serialized as a JSON string.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tasks_core::TaskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Request body is not syntactically valid JSON
    #[error("Failed to parse the request body as JSON: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Task(TaskError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Task(TaskError::InvalidCreation(_) | TaskError::InvalidUpdate(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(detail) => tracing::error!("Unhandled failure: {}", detail),
            _ => tracing::debug!(status = %status, "Request failed: {}", self),
        }
        (status, Json(self.to_string())).into_response()
    }
}

/// Turn a handler panic into a generic 500
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError::from(TaskError::NotFound("Task not found".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, "Task with ID Task not found not found.");
    }

    #[tokio::test]
    async fn test_invalid_input_maps_to_400() {
        let response =
            ApiError::from(TaskError::InvalidCreation("Title is required.".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Invalid task creation: Title is required.");

        let response =
            ApiError::from(TaskError::InvalidUpdate("Invalid status value.".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Invalid task. Invalid status value.");
    }

    #[tokio::test]
    async fn test_broken_json_maps_to_400() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_of(response)
            .await
            .starts_with("Failed to parse the request body as JSON:"));
    }

    #[tokio::test]
    async fn test_panic_maps_to_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, "Internal Server Error");
    }
}
