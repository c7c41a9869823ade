//! Sign In Use Case
//!
//! Checks the shared admin password and issues a session token.

use std::sync::Arc;

use kernel::clock::Clock;
use platform::crypto::{log_fingerprint, random_token};
use platform::secret::SecretString;

use crate::application::config::AdminConfig;
use crate::application::rate_limit::RateLimitUseCase;
use crate::domain::entities::SessionToken;
use crate::domain::repository::{LoginAttemptRepository, SessionTokenRepository};
use crate::domain::services::verify_password;
use crate::error::{AdminError, AdminResult};

/// Fresh tokens drawn before giving up on a collision
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Sign in input
pub struct SignInInput {
    /// Submitted password
    pub password: SecretString,
    /// Client identifier used as the rate limit key
    pub client_id: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub token: String,
    pub expires_at_ms: i64,
}

/// Sign in use case
pub struct SignInUseCase<S, A>
where
    S: SessionTokenRepository,
    A: LoginAttemptRepository,
{
    session_repo: Arc<S>,
    attempt_repo: Arc<A>,
    config: Arc<AdminConfig>,
    clock: Arc<dyn Clock>,
}

impl<S, A> SignInUseCase<S, A>
where
    S: SessionTokenRepository,
    A: LoginAttemptRepository,
{
    pub fn new(
        session_repo: Arc<S>,
        attempt_repo: Arc<A>,
        config: Arc<AdminConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session_repo,
            attempt_repo,
            config,
            clock,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AdminResult<SignInOutput> {
        let client = log_fingerprint(&input.client_id);
        let rate_limit = RateLimitUseCase::new(
            self.attempt_repo.clone(),
            self.config.clone(),
            self.clock.clone(),
        );

        let decision = rate_limit.check(&input.client_id).await?;
        if !decision.allowed {
            return Err(AdminError::RateLimited {
                retry_after_secs: decision.retry_after_secs.unwrap_or(1),
            });
        }

        // Misconfiguration is not the client's fault; no failure is counted
        let expected = self
            .config
            .password()
            .ok_or(AdminError::SecretNotConfigured)?;

        if !verify_password(input.password.expose(), expected) {
            let record = rate_limit.record_failed_attempt(&input.client_id).await?;
            tracing::warn!(
                client = %client,
                failures = record.failure_count,
                "Admin login failed"
            );
            return Err(AdminError::InvalidCredentials);
        }

        rate_limit.clear(&input.client_id).await?;
        self.sweep().await?;

        let session = self.issue_token().await?;
        tracing::info!(client = %client, expires_at_ms = session.expires_at_ms, "Admin login succeeded");

        Ok(SignInOutput {
            token: session.token,
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Create and store a new random session token
    ///
    /// A colliding token is discarded and redrawn, so two live sessions never
    /// share a token string.
    pub async fn issue_token(&self) -> AdminResult<SessionToken> {
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let session = SessionToken::new(
                random_token(self.config.token_bytes),
                self.clock.now_ms(),
                self.config.session_ttl_ms(),
            );
            if self.session_repo.insert_token(&session).await? {
                return Ok(session);
            }
            tracing::warn!("Session token collision, drawing a new token");
        }
        Err(AdminError::Internal(
            "could not allocate a unique session token".to_string(),
        ))
    }

    /// Drop expired tokens and rate limit records
    pub async fn sweep(&self) -> AdminResult<()> {
        let now_ms = self.clock.now_ms();
        let tokens = self.session_repo.sweep_expired_tokens(now_ms).await?;
        let attempts = self.attempt_repo.sweep_expired_attempts(now_ms).await?;
        if tokens > 0 || attempts > 0 {
            tracing::debug!(tokens, attempts, "Swept expired admin state");
        }
        Ok(())
    }
}
