//! Rate Limiting Infrastructure
//!
//! Fixed-window failure counting. Storage is left to the caller; this module
//! only holds the window arithmetic so every store applies the same rules.

use std::time::Duration;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Failures allowed inside one window before requests are rejected
    pub max_attempts: u32,
    /// Window length, measured from the first failure
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window: Duration::from_secs(15 * 60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_attempts: u32, window_secs: u64) -> Self {
        Self {
            max_attempts,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Failure counter for one client inside one window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindow {
    pub failure_count: u32,
    pub window_reset_at_ms: i64,
}

impl FixedWindow {
    /// Counter for the first failure of a new window
    pub fn start(now_ms: i64, window_ms: i64) -> Self {
        Self {
            failure_count: 1,
            window_reset_at_ms: now_ms + window_ms,
        }
    }

    /// Once the reset instant is reached the record behaves as if absent
    #[inline]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.window_reset_at_ms
    }

    #[inline]
    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.failure_count >= max_attempts
    }

    /// Count one more failure
    ///
    /// Inside the window the count grows and the reset instant is kept;
    /// an expired window restarts at 1.
    pub fn record_failure(current: Option<Self>, now_ms: i64, window_ms: i64) -> Self {
        match current {
            Some(mut window) if !window.is_expired(now_ms) => {
                window.failure_count = window.failure_count.saturating_add(1);
                window
            }
            _ => Self::start(now_ms, window_ms),
        }
    }

    /// Whole seconds until the window resets, rounded up, at least 1
    pub fn retry_after_secs(&self, now_ms: i64) -> u64 {
        let remaining_ms = (self.window_reset_at_ms - now_ms).max(0) as u64;
        remaining_ms.div_ceil(1000).max(1)
    }
}

/// Rate limit check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub retry_after_secs: Option<u64>,
}

impl RateLimitDecision {
    pub const fn allow() -> Self {
        Self {
            allowed: true,
            retry_after_secs: None,
        }
    }

    pub const fn deny(retry_after_secs: u64) -> Self {
        Self {
            allowed: false,
            retry_after_secs: Some(retry_after_secs),
        }
    }

    /// Decide for a live (non-expired) record, or none
    pub fn evaluate(window: Option<&FixedWindow>, config: &RateLimitConfig, now_ms: i64) -> Self {
        match window {
            Some(w) if !w.is_expired(now_ms) && w.is_exhausted(config.max_attempts) => {
                Self::deny(w.retry_after_secs(now_ms))
            }
            _ => Self::allow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_MS: i64 = 15 * 60 * 1000;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.window_ms(), WINDOW_MS);
    }

    #[test]
    fn test_first_failure_starts_window() {
        let w = FixedWindow::record_failure(None, 1_000, WINDOW_MS);
        assert_eq!(w.failure_count, 1);
        assert_eq!(w.window_reset_at_ms, 1_000 + WINDOW_MS);
    }

    #[test]
    fn test_failure_inside_window_keeps_reset() {
        let w = FixedWindow::start(0, WINDOW_MS);
        let w = FixedWindow::record_failure(Some(w), 60_000, WINDOW_MS);
        assert_eq!(w.failure_count, 2);
        assert_eq!(w.window_reset_at_ms, WINDOW_MS);
    }

    #[test]
    fn test_failure_after_window_restarts() {
        let w = FixedWindow {
            failure_count: 9,
            window_reset_at_ms: 100,
        };
        let w = FixedWindow::record_failure(Some(w), 100, WINDOW_MS);
        assert_eq!(w.failure_count, 1);
        assert_eq!(w.window_reset_at_ms, 100 + WINDOW_MS);
    }

    #[test]
    fn test_retry_after_rounds_up() {
        let w = FixedWindow {
            failure_count: 5,
            window_reset_at_ms: 10_001,
        };
        assert_eq!(w.retry_after_secs(0), 11);
        assert_eq!(w.retry_after_secs(10_000), 1);
        assert_eq!(w.retry_after_secs(10_001), 1);
    }

    #[test]
    fn test_evaluate() {
        let config = RateLimitConfig::default();
        assert_eq!(RateLimitDecision::evaluate(None, &config, 0), RateLimitDecision::allow());

        let w = FixedWindow {
            failure_count: 4,
            window_reset_at_ms: WINDOW_MS,
        };
        assert!(RateLimitDecision::evaluate(Some(&w), &config, 0).allowed);

        let w = FixedWindow {
            failure_count: 5,
            window_reset_at_ms: WINDOW_MS,
        };
        let decision = RateLimitDecision::evaluate(Some(&w), &config, 0);
        assert!(!decision.allowed);
        assert_eq!(decision.retry_after_secs, Some(900));

        // expired windows never block
        assert!(RateLimitDecision::evaluate(Some(&w), &config, WINDOW_MS).allowed);
    }
}
