//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use kernel::clock::Clock;
use platform::client::client_id;
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};
use platform::secret::SecretString;

use crate::application::config::AdminConfig;
use crate::application::{CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::{LoginAttemptRepository, SessionTokenRepository};
use crate::error::AdminResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, SessionStatusResponse};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<R>
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AdminConfig>,
    pub clock: Arc<dyn Clock>,
}

impl<R> AdminAppState<R>
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AdminConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            clock,
        }
    }

    /// Session token from the request cookie, if any
    pub fn session_token(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.config.session_cookie_name)
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/admin/login
pub async fn login<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> AdminResult<impl IntoResponse>
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    let input = SignInInput {
        password: SecretString::new(req.password),
        client_id: client_id(&headers, Some(addr.ip())),
    };

    let output = use_case.execute(input).await?;
    let cookie = set_cookie_header(&state.config.cookie_config(), &output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /api/admin/logout
pub async fn logout<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
) -> AdminResult<impl IntoResponse>
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = state.session_token(&headers) {
        SignOutUseCase::new(state.repo.clone())
            .invalidate_token(&token)
            .await?;
    }

    let cookie = delete_cookie_header(&state.config.cookie_config());

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/admin/status
pub async fn session_status<R>(
    State(state): State<AdminAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: SessionTokenRepository + LoginAttemptRepository + Clone + Send + Sync + 'static,
{
    let session = match state.session_token(&headers) {
        Some(token) => CheckSessionUseCase::new(state.repo.clone(), state.clock.clone())
            .get_session(&token)
            .await
            .ok(),
        None => None,
    };

    Json(SessionStatusResponse {
        authenticated: session.is_some(),
        expires_at_ms: session.map(|s| s.expires_at_ms),
    })
}
