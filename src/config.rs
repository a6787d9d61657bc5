//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/eshop-service/config.toml`).
//! Every field has a default, so a partial file is fine. A few environment
//! variables override the file after loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::support::InfraError;

/// Overrides `[database] url`
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Overrides `[seed] image_base_path`
pub const IMAGE_PATH_ENV: &str = "DEVELOPMENT_IMAGE_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 10,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub sql_logging: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            sql_logging: defaults.sql_logging,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or any `EnvFilter` directive)
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Insert the starter catalog into an empty database
    pub enabled: bool,
    /// Prefix for seeded picture URIs
    pub image_base_path: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            image_base_path: None,
        }
    }
}

impl AppConfig {
    /// Read and parse the file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        toml::from_str(raw).map_err(|e| InfraError::Config(e.to_string()))
    }

    /// Apply `DATABASE_URL` and `DEVELOPMENT_IMAGE_PATH` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(DATABASE_URL_ENV).ok(),
            std::env::var(IMAGE_PATH_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, database_url: Option<String>, image_path: Option<String>) {
        if let Some(url) = database_url.filter(|v| !v.trim().is_empty()) {
            self.database.url = url;
        }
        if let Some(path) = image_path.filter(|v| !v.trim().is_empty()) {
            self.seed.image_base_path = Some(path);
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            sql_logging: self.database.sql_logging,
        }
    }
}

/// `~/.config/eshop-service/config.toml`, or `./config.toml` when no config
/// directory can be determined.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("eshop-service"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}
