// crates/server/src/error.rs
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use daytrack_core::llm::LlmError;
use daytrack_core::{DayError, ValidationError};
use daytrack_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("LLM call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Database error: {0}")]
    Database(DbError),
}

impl ApiError {
    pub fn category_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Category",
            id,
        }
    }

    pub fn activity_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Activity",
            id,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateCategory(_) | DbError::CategoryNotFound(_) => {
                Self::BadRequest(err.to_string())
            }
            other => Self::Database(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<DayError> for ApiError {
    fn from(err: DayError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::NotFound { resource, id } => {
                tracing::warn!(resource = %resource, id = %id, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details(
                        format!("{resource} not found"),
                        format!("{resource} ID: {id}"),
                    ),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
            ApiError::Upstream(llm_err) => {
                tracing::error!(error = %llm_err, "LLM call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details("LLM call failed", llm_err.to_string()),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// `Json` extractor whose rejections come back as `ApiError::BadRequest`,
/// so malformed bodies get the same `{error, details}` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_not_found_returns_404() {
        let response = ApiError::activity_not_found(12).into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Activity not found");
        assert!(body.details.unwrap().contains("12"));
    }

    #[tokio::test]
    async fn test_validation_error_returns_400() {
        let error: ApiError = ValidationError::Required { field: "title" }.into();
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Bad request");
        assert_eq!(body.details.unwrap(), "title: This field is required.");
    }

    #[tokio::test]
    async fn test_duplicate_category_returns_400() {
        let error: ApiError = DbError::DuplicateCategory("Work".into()).into();
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.unwrap().contains("Work"));
    }

    #[tokio::test]
    async fn test_upstream_error_returns_502_with_reason() {
        let error: ApiError = LlmError::Transport("connection refused".into()).into();
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, "LLM call failed");
        assert!(body.details.unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_database_error_returns_500() {
        let error: ApiError = DbError::NoDataDir.into();
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Database error");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            error: "Test error".into(),
            details: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details"));

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::category_not_found(3);
        assert_eq!(err.to_string(), "Category not found: 3");

        let err: ApiError = DayError::Missing.into();
        assert_eq!(
            err.to_string(),
            "Bad request: Missing 'date' query param YYYY-MM-DD."
        );
    }
}
