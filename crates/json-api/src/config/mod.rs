//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Has-One-Product JSON API Server configuration
#[derive(Debug, Parser)]
#[command(
    name = "has-one-product-json",
    about = "Has-One-Product JSON API Server",
    long_about = None
)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Host database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_required_settings_with_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "has-one-product-json",
            "--database-url",
            "postgres://localhost/host",
            "--admin-token",
            "secret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8720");
        assert_eq!(config.auth.admin_base_path, "/admin");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn admin_token_is_required() {
        let result = ServerConfig::try_parse_from([
            "has-one-product-json",
            "--database-url",
            "postgres://localhost/host",
        ]);

        assert!(result.is_err(), "expected missing admin token to fail");
    }
}
