//! Error types for the recommendation pipeline.
//!
//! `AppError` is what the web layer sees. Each variant maps to an HTTP
//! status and a short message that is safe to show on the page.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("all cost-efficiency coefficients are zero")]
    DegenerateCoefficients,
}

/// Errors raised while building a recommendation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Scoring error: {0}")]
    Score(#[from] ScoreError),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Score(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Message suitable for display on the results page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => format!("Please check your input: {}", msg),
            AppError::NotFound(what) => format!("We couldn't find {}.", what),
            AppError::Upstream(_) => {
                "A data provider is unavailable right now. Please try again later.".to_string()
            }
            AppError::Score(ScoreError::DegenerateCoefficients) => {
                "No energy source produced a usable score for this location.".to_string()
            }
            AppError::Score(e) => format!("The location data could not be scored ({}).", e),
        }
    }
}
