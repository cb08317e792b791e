//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `bayanchor.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use bayanchor_domain::stat::Stat;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Static dashboard hosting.
    pub dashboard: DashboardConfig,
    /// Shipments loaded at startup.
    pub seed: SeedConfig,
    /// Homepage statistics, in display order.
    pub stats: Vec<Stat>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Dashboard asset configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the built dashboard (`index.html`, wasm, css).
    pub dir: Option<PathBuf>,
}

/// Seed data configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON file containing an array of shipment records.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `bayanchor.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bayanchor.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("BAYANCHOR_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("BAYANCHOR_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("BAYANCHOR_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("BAYANCHOR_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("BAYANCHOR_DASHBOARD_DIR") {
            self.dashboard.dir = Some(PathBuf::from(val));
        }
        if let Some(val) = var("BAYANCHOR_SEED") {
            self.seed.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("BAYANCHOR_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        for stat in &self.stats {
            stat.validate().map_err(|err| {
                ConfigError::Validation(format!("stat {:?}: {err}", stat.label))
            })?;
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            dashboard: DashboardConfig::default(),
            seed: SeedConfig::default(),
            stats: default_stats(),
        }
    }
}

/// The figures shown on the homepage out of the box.
fn default_stats() -> Vec<Stat> {
    vec![
        Stat::new(190.0, "Countries served")
            .with_suffix("+")
            .with_icon("globe"),
        Stat::new(50.0, "Shipments delivered")
            .with_suffix("K+")
            .with_icon("package")
            .with_delay(1),
        Stat::new(99.8, "On-time delivery")
            .with_suffix("%")
            .with_icon("clock")
            .with_delay(2),
        Stat::new(24.0, "Customer support")
            .with_suffix("/7")
            .with_icon("headset")
            .with_delay(3),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:bayanchor.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bayanchord=info,bayanchor=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
