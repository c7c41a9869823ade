//! Rate Limit Use Case
//!
//! Per-client failed-login throttling over a fixed window.

use std::sync::Arc;

use kernel::clock::Clock;
use platform::rate_limit::RateLimitDecision;

use crate::application::config::AdminConfig;
use crate::domain::entities::RateLimitRecord;
use crate::domain::repository::LoginAttemptRepository;
use crate::error::AdminResult;

/// Rate limit use case
pub struct RateLimitUseCase<A>
where
    A: LoginAttemptRepository,
{
    attempt_repo: Arc<A>,
    config: Arc<AdminConfig>,
    clock: Arc<dyn Clock>,
}

impl<A> RateLimitUseCase<A>
where
    A: LoginAttemptRepository,
{
    pub fn new(attempt_repo: Arc<A>, config: Arc<AdminConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            attempt_repo,
            config,
            clock,
        }
    }

    /// Decide whether `client_id` may attempt a login now
    pub async fn check(&self, client_id: &str) -> AdminResult<RateLimitDecision> {
        let now_ms = self.clock.now_ms();
        let record = self.attempt_repo.get_attempts(client_id, now_ms).await?;
        Ok(RateLimitDecision::evaluate(
            record.as_ref(),
            &self.config.rate_limit,
            now_ms,
        ))
    }

    /// Count one failed login for `client_id`
    pub async fn record_failed_attempt(&self, client_id: &str) -> AdminResult<RateLimitRecord> {
        let now_ms = self.clock.now_ms();
        self.attempt_repo
            .record_failure(client_id, now_ms, self.config.rate_limit.window_ms())
            .await
    }

    /// Forget every failure recorded for `client_id`
    pub async fn clear(&self, client_id: &str) -> AdminResult<()> {
        self.attempt_repo.delete_attempts(client_id).await
    }
}
