use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to scrape Wikipedia page. Please verify the URL is correct.")]
    Scrape,

    #[error("{0} not configured")]
    Config(&'static str),

    #[error("{0}")]
    Model(String),

    #[error("Could not parse quiz JSON from AI response")]
    Parse,

    #[error("Failed to save quiz")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body shape the frontend surfaces verbatim in its inline alert.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Scrape => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Parse => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The database detail never reaches the client; only the fixed
        // save-failure message does.
        if let AppError::Database(detail) = self {
            log::error!("quiz store failure: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
