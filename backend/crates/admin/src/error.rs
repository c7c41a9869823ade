//! Admin Error Types
//!
//! Admin-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
///
/// Wrong password and missing server secret are distinct here so logs can
/// tell them apart, but both render the same response.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Too many failed attempts from this client inside the window
    #[error("Too many login attempts, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// ADMIN_PASSWORD is unset or empty
    #[error("Admin password is not configured")]
    SecretNotConfigured,

    /// Missing, unknown, or expired token
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::RateLimited { .. } => ErrorKind::TooManyRequests,
            AdminError::InvalidCredentials
            | AdminError::SecretNotConfigured
            | AdminError::SessionInvalid => ErrorKind::Unauthorized,
            AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to the client-facing AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AdminError::RateLimited { retry_after_secs } => {
                AppError::too_many_requests("Too many login attempts")
                    .with_retry_after(*retry_after_secs)
                    .with_action("Wait before trying again")
            }
            AdminError::InvalidCredentials | AdminError::SecretNotConfigured => {
                AppError::unauthorized("Invalid credentials")
            }
            AdminError::SessionInvalid => AppError::unauthorized("Authentication required"),
            AdminError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::SecretNotConfigured => {
                tracing::error!("Admin login attempted but ADMIN_PASSWORD is not configured");
            }
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            AdminError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
            }
            AdminError::RateLimited { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Admin login rate limited");
            }
            AdminError::SessionInvalid => {
                tracing::debug!(error = %self, "Admin session rejected");
            }
        }
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
