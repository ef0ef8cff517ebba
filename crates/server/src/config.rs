//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to documented defaults:
//!
//! - `FEEDBACK_DATABASE_URL` - `PostgreSQL` connection string
//!   (fallback: `DATABASE_URL`, default: `postgres://localhost:5432/feedback`)
//! - `FEEDBACK_HOST` - Bind address (default: 127.0.0.1)
//! - `FEEDBACK_PORT` - Listen port (default: 5000)
//! - `SENTRY_DSN` - Sentry error tracking DSN (tracking disabled when unset)
//! - `SENTRY_ENVIRONMENT` - Environment tag for Sentry events

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default connection string for a local development database.
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/feedback";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (may contain a password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Environment tag attached to Sentry events (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url();
        let host = get_env_or_default("FEEDBACK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FEEDBACK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FEEDBACK_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FEEDBACK_PORT".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            sentry_dsn,
            sentry_environment,
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

/// Get the database URL with fallback to generic `DATABASE_URL`.
fn get_database_url() -> SecretString {
    if let Ok(value) = std::env::var("FEEDBACK_DATABASE_URL") {
        return SecretString::from(value);
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return SecretString::from(value);
    }
    SecretString::from(DEFAULT_DATABASE_URL)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 5000,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        // A variable name that is never set in any environment
        let value = get_env_or_default("FEEDBACK_TEST_UNSET_VARIABLE_XYZ", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_get_optional_env_missing() {
        assert!(get_optional_env("FEEDBACK_TEST_UNSET_VARIABLE_XYZ").is_none());
    }
}
