//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL gateway endpoint
    pub gateway_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Override for the credential file location (defaults to the
    /// per-user data directory)
    pub credential_path: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:4000/graphql".to_string(),
            request_timeout_secs: 30,
            credential_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gateway_url: env::var("INTERNMATCH_GATEWAY_URL")
                .map_err(|_| ConfigError::Missing("INTERNMATCH_GATEWAY_URL"))?,
            request_timeout_secs: env::var("INTERNMATCH_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("INTERNMATCH_REQUEST_TIMEOUT_SECS"))?,
            credential_path: env::var("INTERNMATCH_CREDENTIAL_FILE")
                .ok()
                .map(PathBuf::from),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("INTERNMATCH_GATEWAY_URL", "http://gw.test/graphql");
        env::set_var("INTERNMATCH_REQUEST_TIMEOUT_SECS", "12");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.gateway_url, "http://gw.test/graphql");
        assert_eq!(config.request_timeout_secs, 12);
    }
}
