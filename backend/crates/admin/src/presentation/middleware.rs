//! Admin Middleware
//!
//! Guards the editing surface behind a valid admin session cookie.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::domain::repository::{LoginAttemptRepository, SessionTokenRepository};
use crate::presentation::handlers::AdminAppState;

/// Set on 401 responses so the frontend can redirect to the login form
pub const ADMIN_AUTH_REQUIRED_HEADER: &str = "X-Admin-Auth-Required";

/// Middleware that requires a valid admin session
///
/// Attach with `axum::middleware::from_fn_with_state(state, require_admin_session::<R>)`.
pub async fn require_admin_session<R>(
    State(state): State<AdminAppState<R>>,
    req: Request,
    next: Next,
) -> Response
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    let authenticated = match state.session_token(req.headers()) {
        Some(token) => {
            CheckSessionUseCase::new(state.repo.clone(), state.clock.clone())
                .verify_token(&token)
                .await
        }
        None => false,
    };

    if !authenticated {
        tracing::debug!(path = %req.uri().path(), "Admin session required");
        return (
            StatusCode::UNAUTHORIZED,
            [(ADMIN_AUTH_REQUIRED_HEADER, "true")],
        )
            .into_response();
    }

    next.run(req).await
}
