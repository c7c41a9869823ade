//! Sign Out Use Case

use std::sync::Arc;

use crate::domain::repository::SessionTokenRepository;
use crate::error::AdminResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionTokenRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionTokenRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Delete the token unconditionally; unknown tokens are not an error
    pub async fn invalidate_token(&self, token: &str) -> AdminResult<()> {
        self.session_repo.delete_token(token).await?;
        tracing::info!("Admin session invalidated");
        Ok(())
    }
}
