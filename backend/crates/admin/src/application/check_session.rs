//! Check Session Use Case
//!
//! Verifies a presented admin token.

use std::sync::Arc;

use kernel::clock::Clock;

use crate::domain::entities::SessionToken;
use crate::domain::repository::SessionTokenRepository;
use crate::error::{AdminError, AdminResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionTokenRepository,
{
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionTokenRepository,
{
    pub fn new(session_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session_repo,
            clock,
        }
    }

    /// Live session for `token`, or `SessionInvalid`
    ///
    /// An expired token is removed from the store as a side effect.
    pub async fn get_session(&self, token: &str) -> AdminResult<SessionToken> {
        if token.is_empty() {
            return Err(AdminError::SessionInvalid);
        }
        self.session_repo
            .get_token(token, self.clock.now_ms())
            .await?
            .ok_or(AdminError::SessionInvalid)
    }

    /// Just check if the token is valid (returns bool)
    pub async fn verify_token(&self, token: &str) -> bool {
        self.get_session(token).await.is_ok()
    }
}
