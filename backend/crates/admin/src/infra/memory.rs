//! In-Memory Store Implementation
//!
//! Process-local maps behind `std::sync::Mutex`. Locks are never held across
//! an `.await`, and every compound update runs under one lock acquisition.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{RateLimitRecord, SessionToken};
use crate::domain::repository::{LoginAttemptRepository, SessionTokenRepository};
use crate::error::AdminResult;

/// In-memory admin store (tokens and login attempts)
///
/// Cloning shares the same maps.
#[derive(Clone, Default)]
pub struct MemoryAdminStore {
    tokens: Arc<Mutex<HashMap<String, SessionToken>>>,
    attempts: Arc<Mutex<HashMap<String, RateLimitRecord>>>,
}

impl MemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tokens, expired ones included
    pub fn token_count(&self) -> usize {
        lock(&self.tokens).len()
    }

    /// Number of stored rate limit records, expired ones included
    pub fn attempt_count(&self) -> usize {
        lock(&self.attempts).len()
    }
}

impl std::fmt::Debug for MemoryAdminStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryAdminStore")
            .field("tokens", &self.token_count())
            .field("attempts", &self.attempt_count())
            .finish()
    }
}

// A panic while holding the lock cannot leave a map half-updated, so a
// poisoned lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Session tokens
// ============================================================================

impl SessionTokenRepository for MemoryAdminStore {
    async fn insert_token(&self, session: &SessionToken) -> AdminResult<bool> {
        let mut tokens = lock(&self.tokens);
        if tokens.contains_key(&session.token) {
            return Ok(false);
        }
        tokens.insert(session.token.clone(), session.clone());
        Ok(true)
    }

    async fn get_token(&self, token: &str, now_ms: i64) -> AdminResult<Option<SessionToken>> {
        let mut tokens = lock(&self.tokens);
        match tokens.get(token).cloned() {
            Some(session) if session.is_expired(now_ms) => {
                tokens.remove(token);
                Ok(None)
            }
            session => Ok(session),
        }
    }

    async fn delete_token(&self, token: &str) -> AdminResult<()> {
        lock(&self.tokens).remove(token);
        Ok(())
    }

    async fn sweep_expired_tokens(&self, now_ms: i64) -> AdminResult<u64> {
        let mut tokens = lock(&self.tokens);
        let before = tokens.len();
        tokens.retain(|_, session| !session.is_expired(now_ms));
        Ok((before - tokens.len()) as u64)
    }
}

// ============================================================================
// Login attempts
// ============================================================================

impl LoginAttemptRepository for MemoryAdminStore {
    async fn get_attempts(
        &self,
        client_id: &str,
        now_ms: i64,
    ) -> AdminResult<Option<RateLimitRecord>> {
        let mut attempts = lock(&self.attempts);
        match attempts.get(client_id).copied() {
            Some(record) if record.is_expired(now_ms) => {
                attempts.remove(client_id);
                Ok(None)
            }
            record => Ok(record),
        }
    }

    async fn record_failure(
        &self,
        client_id: &str,
        now_ms: i64,
        window_ms: i64,
    ) -> AdminResult<RateLimitRecord> {
        let mut attempts = lock(&self.attempts);
        let current = attempts.get(client_id).copied();
        let updated = RateLimitRecord::record_failure(current, now_ms, window_ms);
        attempts.insert(client_id.to_string(), updated);
        Ok(updated)
    }

    async fn delete_attempts(&self, client_id: &str) -> AdminResult<()> {
        lock(&self.attempts).remove(client_id);
        Ok(())
    }

    async fn sweep_expired_attempts(&self, now_ms: i64) -> AdminResult<u64> {
        let mut attempts = lock(&self.attempts);
        let before = attempts.len();
        attempts.retain(|_, record| !record.is_expired(now_ms));
        Ok((before - attempts.len()) as u64)
    }
}
