//! Repository Traits
//!
//! Store interfaces for admin state. The in-memory implementation is in the
//! infrastructure layer; a shared key-value store can implement the same
//! traits for multi-instance deployments.
//!
//! Every method is a single atomic step on the store, so implementations must
//! not let a concurrent call observe or overwrite a half-applied update.

use crate::domain::entities::{RateLimitRecord, SessionToken};
use crate::error::AdminResult;

/// Session token store
#[trait_variant::make(SessionTokenRepository: Send)]
pub trait LocalSessionTokenRepository {
    /// Store a new token
    ///
    /// Returns `false` and leaves the store untouched when the token string
    /// is already present.
    async fn insert_token(&self, session: &SessionToken) -> AdminResult<bool>;

    /// Look up a live token; an expired record is deleted and reported absent
    async fn get_token(&self, token: &str, now_ms: i64) -> AdminResult<Option<SessionToken>>;

    /// Remove a token (no-op if absent)
    async fn delete_token(&self, token: &str) -> AdminResult<()>;

    /// Remove every expired token, returning how many were removed
    async fn sweep_expired_tokens(&self, now_ms: i64) -> AdminResult<u64>;
}

/// Failed-login counter store, keyed by client identifier
#[trait_variant::make(LoginAttemptRepository: Send)]
pub trait LocalLoginAttemptRepository {
    /// Look up a live record; an expired record is deleted and reported absent
    async fn get_attempts(&self, client_id: &str, now_ms: i64)
    -> AdminResult<Option<RateLimitRecord>>;

    /// Count one failure (read-modify-write in one step) and return the new record
    async fn record_failure(
        &self,
        client_id: &str,
        now_ms: i64,
        window_ms: i64,
    ) -> AdminResult<RateLimitRecord>;

    /// Remove the record (no-op if absent)
    async fn delete_attempts(&self, client_id: &str) -> AdminResult<()>;

    /// Remove every expired record, returning how many were removed
    async fn sweep_expired_attempts(&self, now_ms: i64) -> AdminResult<u64>;
}
