use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::types::PollId;

#[derive(Debug, ThisError)]
pub enum PollsError {
    #[error("Poll {0} not found")]
    NotFound(PollId),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[source] Box<figment::Error>),
}

impl From<figment::Error> for PollsError {
    fn from(e: figment::Error) -> Self {
        PollsError::Config(Box::new(e))
    }
}

impl IntoResponse for PollsError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Missing records answer with a bare 404, no body.
            PollsError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            PollsError::RactorError(_)
            | PollsError::Io(_)
            | PollsError::Json(_)
            | PollsError::Config(_) => {
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorResponse { error: body }),
                )
                    .into_response()
            }
        }
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
