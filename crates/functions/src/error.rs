//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Failures are rendered as the
//! `{"success": false, "error": ...}` envelope with a generic message; the
//! underlying error only reaches the logs and Sentry.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use catalog_core::ApiResponse;

use crate::db::RepositoryError;

/// Application-level error type for the functions server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Fetching catalog services from the database failed.
    #[error("Failed to fetch services: {0}")]
    Services(#[source] RepositoryError),

    /// `STRIPE_PUBLISHABLE_KEY` is not set.
    #[error("Stripe publishable key is not configured")]
    StripeKeyMissing,

    /// HTTP method not supported by the handler.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Services(_) | Self::StripeKeyMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::Services(_) => "Failed to fetch services",
            Self::StripeKeyMissing => "Stripe key not configured",
            Self::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ApiResponse::<()>::error(self.client_message());
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::StripeKeyMissing.to_string(),
            "Stripe publishable key is not configured"
        );

        let err = AppError::Services(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        assert!(err.to_string().starts_with("Failed to fetch services: database error"));
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::MethodNotAllowed),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            get_status(AppError::StripeKeyMissing),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Services(RepositoryError::Database(
                sqlx::Error::PoolClosed
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_details() {
        let err = AppError::Services(RepositoryError::Database(sqlx::Error::Protocol(
            "password authentication failed for user postgres".to_string(),
        )));
        assert_eq!(err.client_message(), "Failed to fetch services");
    }
}
