//! Unified error handling at the request boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shopify::AdminApiError;

/// Application-level error type.
///
/// Write-path handlers never let this escape as an HTTP error: failures are
/// flattened into the `{error}` envelope after [`AppError::report`]. The
/// `IntoResponse` impl covers the page-rendering paths.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error(transparent)]
    Shopify(#[from] AdminApiError),

    /// Unrecognized write-action discriminator.
    #[error("Unknown actionType: {0}")]
    UnknownAction(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Log the error with context and report server-side kinds to Sentry.
    pub fn report(&self) {
        match self {
            Self::Shopify(
                AdminApiError::Http(_)
                | AdminApiError::GraphQL(_)
                | AdminApiError::Parse(_)
                | AdminApiError::RateLimited(_),
            )
            | Self::Internal(_) => {
                let event_id = sentry::capture_error(self);
                tracing::error!(error = %self, sentry_event_id = %event_id, "request error");
            }
            _ => {
                tracing::warn!(error = %self, "request rejected");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report();

        let status = match &self {
            Self::Shopify(AdminApiError::NoSession | AdminApiError::Unauthorized(_)) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Shopify(AdminApiError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
            Self::UnknownAction(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        (status, message).into_response()
    }
}
