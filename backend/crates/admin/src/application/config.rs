//! Admin Configuration

use std::time::Duration;

use platform::cookie::{CookieConfig, SameSite};
use platform::rate_limit::RateLimitConfig;
use platform::secret::SecretString;

/// Admin session guard configuration
#[derive(Debug)]
pub struct AdminConfig {
    /// Shared admin secret; `None` or empty disables login entirely
    pub admin_password: Option<SecretString>,
    /// Session token lifetime
    pub session_ttl: Duration,
    /// Random bytes per session token
    pub token_bytes: usize,
    /// Failed-login throttling
    pub rate_limit: RateLimitConfig,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Set the `Secure` cookie attribute (production)
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_password: None,
            session_ttl: Duration::from_secs(24 * 60 * 60),
            token_bytes: 32,
            rate_limit: RateLimitConfig::default(),
            session_cookie_name: "admin_token".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
        }
    }
}

impl AdminConfig {
    /// Development config: cookies without `Secure` so plain http://localhost works
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(SecretString::new(password));
        self
    }

    /// Configured secret, treating an empty value as unset
    pub fn password(&self) -> Option<&str> {
        self.admin_password
            .as_ref()
            .filter(|secret| !secret.is_empty())
            .map(SecretString::expose)
    }

    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert!(config.password().is_none());
        assert_eq!(config.session_ttl_ms(), 86_400_000);
        assert_eq!(config.token_bytes, 32);
        assert_eq!(config.rate_limit.max_attempts, 5);
        assert_eq!(config.rate_limit.window_ms(), 900_000);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_empty_password_is_unset() {
        let config = AdminConfig::development().with_password("");
        assert!(config.password().is_none());

        let config = AdminConfig::development().with_password("hunter2");
        assert_eq!(config.password(), Some("hunter2"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AdminConfig::development().with_password("hunter2");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_cookie_config() {
        let cookie = AdminConfig::development().cookie_config();
        assert_eq!(cookie.name, "admin_token");
        assert!(!cookie.secure);
        assert!(cookie.http_only);
        assert_eq!(cookie.same_site, SameSite::Strict);
        assert_eq!(cookie.max_age_secs, Some(86_400));
    }
}
