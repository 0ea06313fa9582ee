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

/// Token signing configuration, read once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Startup fails when the signing secret is unusable outside development
    /// rather than silently falling back to the shipped placeholder.
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
