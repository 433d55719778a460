use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use draft_analysis::DraftError;
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<DraftError> for AppError {
    fn from(e: DraftError) -> Self {
        match &e {
            DraftError::Http(_) | DraftError::Api { .. } => AppError::bad_gateway(e.to_string()),
            DraftError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            _ => {
                tracing::error!(error = %e, "request failed");
                AppError::internal(e.to_string())
            }
        }
    }
}
