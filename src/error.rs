use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

const ERROR_PAGE: &str = include_str!("../templates/error.html");

/// Failures that surface as the generic error page. A missing profile is
/// not one of them: that is an `Ok(None)` from resolution, and the handler
/// renders the not-found view itself.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Backend { .. } => StatusCode::BAD_GATEWAY,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("{self}");

        (status, Html(ERROR_PAGE)).into_response()
    }
}
