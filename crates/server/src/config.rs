//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `JUICE_BAR_HOST` - Bind address (default: 127.0.0.1)
//! - `JUICE_BAR_PORT` - Listen port (default: 4000)
//! - `JUICE_BAR_CORS_ORIGINS` - Comma-separated CORS allow-list
//!   (default: `http://localhost:3000`)
//! - `JUICE_BAR_EVENT_CAPACITY` - Events buffered per subscription (default: 64)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

use crate::events::DEFAULT_EVENT_CAPACITY;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "4000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<HeaderValue>,
    /// Buffered events per GraphQL subscription
    pub event_capacity: usize,
    /// Emit JSON logs instead of text
    pub json_logs: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 4000,
            cors_origins: vec![HeaderValue::from_static(DEFAULT_CORS_ORIGINS)],
            event_capacity: DEFAULT_EVENT_CAPACITY,
            json_logs: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("JUICE_BAR_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("JUICE_BAR_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("JUICE_BAR_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("JUICE_BAR_PORT".to_string(), e.to_string()))?;
        let cors_origins = parse_origins(
            "JUICE_BAR_CORS_ORIGINS",
            &get_env_or_default("JUICE_BAR_CORS_ORIGINS", DEFAULT_CORS_ORIGINS),
        )?;
        let event_capacity = parse_capacity(
            "JUICE_BAR_EVENT_CAPACITY",
            get_optional_env("JUICE_BAR_EVENT_CAPACITY").as_deref(),
        )?;
        let json_logs =
            get_optional_env("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            host,
            port,
            cors_origins,
            event_capacity,
            json_logs,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, skipping blanks.
fn parse_origins(var_name: &str, raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                ConfigError::InvalidEnvVar(var_name.to_string(), format!("{origin}: {e}"))
            })
        })
        .collect()
}

/// Parse a broadcast capacity. Zero is rejected because the channel requires
/// at least one slot.
fn parse_capacity(var_name: &str, raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_EVENT_CAPACITY);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("TEST", "http://a.test, http://b.test ,,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://a.test");
        assert_eq!(origins[1], "http://b.test");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        let result = parse_origins("TEST", "http://ok.test,bad\norigin");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("TEST", None).unwrap(), DEFAULT_EVENT_CAPACITY);
        assert_eq!(parse_capacity("TEST", Some("16")).unwrap(), 16);
        assert!(parse_capacity("TEST", Some("0")).is_err());
        assert!(parse_capacity("TEST", Some("lots")).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 8080,
            ..ServerConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }
}
