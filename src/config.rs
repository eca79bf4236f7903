use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::embeddings::Strategy;

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with `{ "input", "output" }` objects
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Tries `config.toml`, then `config.example.toml`, and falls back to the
    /// built-in defaults when neither exists. `PORT` is applied on top.
    pub fn load() -> crate::Result<Self> {
        let mut config = if Path::new("config.toml").exists() {
            Self::from_file("config.toml")?
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!("Using config.example.toml. Create config.toml for production use.");
            Self::from_file("config.example.toml")?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `PORT` from the process environment.
    pub fn apply_env_overrides(&mut self) -> crate::Result<()> {
        self.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    fn apply_port_override(&mut self, value: Option<&str>) -> crate::Result<()> {
        let Some(raw) = value else {
            return Ok(());
        };
        let port = raw.trim().parse::<u16>().map_err(|e| {
            crate::FaqBotError::ConfigError(format!("invalid {PORT_ENV} value {raw:?}: {e}"))
        })?;
        self.server.port = port;
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog.path
    }

    pub fn strategy(&self) -> Strategy {
        self.matcher.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_replaces_port() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("8080")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn port_override_absent_keeps_default() {
        let mut config = AppConfig::default();
        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn port_override_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = config.apply_port_override(Some("fifty")).unwrap_err();
        assert!(matches!(err, crate::FaqBotError::ConfigError(_)));
        assert_eq!(config.server.port, 5000);
    }
}
