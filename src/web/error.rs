use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::database::DirectoryError;
use crate::services::activities_service::RosterCommandError;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<RosterCommandError> for ApiError {
    fn from(err: RosterCommandError) -> Self {
        match err {
            RosterCommandError::Directory(DirectoryError::NotFound) => {
                ApiError::NotFound(err.to_string())
            }
            RosterCommandError::Directory(DirectoryError::DuplicateSignup)
            | RosterCommandError::Directory(DirectoryError::NotRegistered)
            | RosterCommandError::MissingEmail => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
