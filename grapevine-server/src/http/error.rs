//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "<message>"}` JSON bodies with an
//! appropriate status code. Store failures never escape as raw errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use grapevine_core::PostId;
use serde_json::json;

use crate::store::StoreError;

/// Message returned when a post id does not exist
pub const NOT_FOUND_MESSAGE: &str = "no such post, check the id!";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Post does not exist (404)
    NotFound { id: PostId },

    /// Path id is not an integer (400)
    InvalidId { raw: String },

    /// Request body is not a usable JSON post (400)
    InvalidBody { reason: String },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidId { .. } | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            Self::InvalidId { raw } => format!("invalid post id '{}'", raw),
            Self::InvalidBody { reason } => format!("invalid JSON body: {}", reason),
            Self::Store(_) => "an internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Log the actual error, return generic message
            Self::Store(e) => tracing::error!("Store error: {}", e),
            Self::NotFound { id } => tracing::debug!(id, "post not found"),
            _ => {}
        }

        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            _ => Self::Store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_error_body() {
        let response = ApiError::NotFound { id: 999 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "no such post, check the id!"})
        );
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let response = ApiError::InvalidId { raw: "abc".into() }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid post id 'abc'");
    }

    #[tokio::test]
    async fn store_error_hides_details() {
        let err = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "an internal error occurred");
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err = ApiError::from(StoreError::NotFound { id: 4 });
        assert!(matches!(err, ApiError::NotFound { id: 4 }));
    }
}
