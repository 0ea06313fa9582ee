use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// The placeholder shipped in config/default.toml. Only acceptable in
/// development mode.
const DEV_SECRET: &str = "dev-only-signing-secret-0123456789abcdef";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token verification configuration. The secret must match whatever
/// user-service signs with, or every request gets rejected.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate_secret(&run_mode)?;

        Ok(config)
    }

    fn validate_secret(&self, run_mode: &str) -> Result<(), ConfigError> {
        if self.auth.secret.len() < 32 {
            return Err(ConfigError::Message(
                "auth.secret must be at least 32 bytes for HS256".to_string(),
            ));
        }
        if run_mode != "development" && self.auth.secret == DEV_SECRET {
            return Err(ConfigError::Message(format!(
                "auth.secret must be configured explicitly when RUN_MODE={}",
                run_mode
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/schedules".to_string(),
            },
            server: ServerConfig { http_port: 8002 },
            auth: AuthConfig {
                secret: secret.to_string(),
            },
        }
    }

    #[test]
    fn test_dev_secret_rejected_in_production() {
        let config = config_with_secret(DEV_SECRET);
        assert!(config.validate_secret("production").is_err());
        assert!(config.validate_secret("development").is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = config_with_secret("too-short");
        assert!(config.validate_secret("development").is_err());
    }
}
