//! Domain Entities

/// Per-client failure counter; the window arithmetic lives in `platform`
pub use platform::rate_limit::FixedWindow as RateLimitRecord;

/// Session token entity - an issued admin bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// Opaque random token, unique within the store
    pub token: String,
    /// Absolute expiry (Unix ms)
    pub expires_at_ms: i64,
}

impl SessionToken {
    pub fn new(token: String, now_ms: i64, ttl_ms: i64) -> Self {
        Self {
            token,
            expires_at_ms: now_ms + ttl_ms,
        }
    }

    /// Valid strictly before `expires_at_ms`
    #[inline]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}
