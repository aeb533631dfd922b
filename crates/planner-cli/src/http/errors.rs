//! JSON error envelope for the HTTP API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use planner_core::error::CoreError;
use serde::Serialize;

/// Body of every failed API response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid JSON body: {0}")]
    BadJson(#[from] JsonRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadJson(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::error::RecurrenceError;

    #[test]
    fn test_status_mapping() {
        let rule = ApiError::from(CoreError::from(RecurrenceError::EmptyRule));
        assert_eq!(rule.status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(CoreError::NotFound("3".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let io = ApiError::from(CoreError::from(std::io::Error::other("disk")));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
