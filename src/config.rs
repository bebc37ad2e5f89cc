//! Configuration module
//!
//! Settings are read from a TOML file; every section falls back to its
//! default when missing, so a partial (or absent) file is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database URL (e.g., "sqlite://./hizmet.db?mode=rwc")
    pub url: String,
}

impl DatabaseSettings {
    /// Effective connection URL; `DATABASE_URL` overrides the file value
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./hizmet.db?mode=rwc".to_string(),
        }
    }
}

/// Fixed credential pair and the bearer token it issues
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "bilgi@gallaxdesign.com".to_string(),
            password: "gallax11".to_string(),
            token: "authenticated".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by `RUST_LOG`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default config path: `<user config dir>/hizmet-service/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hizmet-service")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.auth.token, "authenticated");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [auth]
            token = "other-secret"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.auth.token, "other-secret");
        assert_eq!(cfg.auth.email, "bilgi@gallaxdesign.com");
    }
}
