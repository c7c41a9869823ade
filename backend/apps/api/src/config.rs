//! Server configuration from environment variables

use std::net::SocketAddr;
use std::path::PathBuf;

use admin::AdminConfig;
use axum::http::HeaderValue;
use content::ContentConfig;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_CONTENT_DIR: &str = "content/blog";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
pub const DEFAULT_LOG_FILTER: &str = "site_api=info,admin=info,content=info,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            _ => Err(ConfigError::invalid(
                "APP_ENV",
                raw,
                "expected development or production",
            )),
        }
    }
}

/// Everything the server needs at startup
#[derive(Debug)]
pub struct ApiConfig {
    pub app_env: AppEnv,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub admin: AdminConfig,
    pub content: ContentConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let app_env = match get("APP_ENV") {
            Some(raw) => AppEnv::parse(&raw)?,
            None => AppEnv::Development,
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", &bind_addr, e))?;

        let origins =
            get("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| ConfigError::invalid("FRONTEND_ORIGINS", origin, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut admin = match app_env {
            AppEnv::Development => AdminConfig::development(),
            AppEnv::Production => AdminConfig::default(),
        };
        // Kept verbatim; surrounding spaces are part of the secret
        if let Some(password) = lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty()) {
            admin = admin.with_password(password);
        }

        let content = ContentConfig::new(
            get("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
        );

        Ok(Self {
            app_env,
            bind_addr,
            frontend_origins,
            admin,
            content,
        })
    }
}
