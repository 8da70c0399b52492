use std::env;
use std::time::Duration;

use auth::ttl::parse_ttl;
use auth::TokenIssuer;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Signing keys and token lifetimes.
///
/// Lifetimes are strings with an explicit unit ("15m", "24h"); they are
/// validated once at startup. A bad lifetime or an empty key means the
/// process must not serve traffic.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: String,
    pub refresh_ttl: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
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

        Ok(config)
    }
}

impl JwtConfig {
    /// Validate the signing configuration and build the token issuer.
    ///
    /// # Errors
    /// Fatal `ConfigError` on an empty key or an unparseable lifetime.
    pub fn build_issuer(&self) -> Result<TokenIssuer, ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.access_secret must not be empty".to_string(),
            ));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.refresh_secret must not be empty".to_string(),
            ));
        }

        let access_ttl = self.parse_lifetime("jwt.access_ttl", &self.access_ttl)?;
        let refresh_ttl = self.parse_lifetime("jwt.refresh_ttl", &self.refresh_ttl)?;

        Ok(TokenIssuer::new(
            self.access_secret.as_bytes(),
            self.refresh_secret.as_bytes(),
            access_ttl,
            refresh_ttl,
        ))
    }

    fn parse_lifetime(&self, key: &str, value: &str) -> Result<Duration, ConfigError> {
        parse_ttl(value).map_err(|e| ConfigError::Message(format!("{}: {}", key, e)))
    }
}
