use axum::{Json, http::StatusCode, response::IntoResponse};
use riftview_backend::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(BackendError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Static cache error: {0}")]
    Cache(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotFound => AppError::NotFound("Record not found".to_string()),
            other => AppError::Backend(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::UnknownRegion(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Backend(BackendError::Http(_) | BackendError::Status(_)) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
