//! Content Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
///
/// Problems inside a single file never surface here; they degrade to defaults
/// or skip the file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    #[error("Post not found: {slug}")]
    PostNotFound { slug: String },

    /// The locale directory exists but cannot be listed
    #[error("Content store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::InvalidLocale(_) => ErrorKind::BadRequest,
            ContentError::PostNotFound { .. } => ErrorKind::NotFound,
            ContentError::Io(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to the client-facing AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ContentError::InvalidLocale(_) => AppError::bad_request("Invalid locale")
                .with_action("Use a locale such as 'en' or 'pt-br'"),
            ContentError::PostNotFound { .. } => AppError::not_found("Post not found"),
            ContentError::Io(_) => AppError::internal("Failed to read content"),
        }
    }

    fn log(&self) {
        match self {
            ContentError::Io(e) => tracing::error!(error = %e, "Content store I/O error"),
            _ => tracing::debug!(error = %self, "Content request rejected"),
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
