use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Orbit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring engine configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Essay archive configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to allow cross-origin requests from the editor client
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Upper bound on essays returned by one history request
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_true() -> bool {
    true
}

const fn default_history_limit() -> usize {
    50
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_true(),
            history_limit: default_history_limit(),
        }
    }
}

/// Where clarity/impact jitter comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    /// Fresh thread-local randomness per request
    Random,
    /// Reproducible sequence from `scoring.seed`
    Seeded,
    /// Constant midpoint, no randomness
    None,
}

impl Default for JitterMode {
    fn default() -> Self {
        Self::Random
    }
}

/// Scoring engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Word counts above this are labelled persuasive
    #[serde(default = "default_long_threshold")]
    pub long_threshold: usize,

    /// Word counts above this are labelled formal
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: usize,

    /// Jitter source for clarity/impact
    #[serde(default)]
    pub jitter: JitterMode,

    /// Seed used when `jitter` is `seeded`
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_long_threshold() -> usize {
    200
}

const fn default_medium_threshold() -> usize {
    100
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            long_threshold: default_long_threshold(),
            medium_threshold: default_medium_threshold(),
            jitter: JitterMode::default(),
            seed: None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".orbit/essays.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// `sqlx` connection URL for the configured path.
    pub fn url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite:{}", self.path)
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url() {
        let mut config = DatabaseConfig::default();
        assert_eq!(config.url(), "sqlite:.orbit/essays.db");

        config.path = "sqlite::memory:".to_string();
        assert_eq!(config.url(), "sqlite::memory:");
    }

    #[test]
    fn test_jitter_mode_parses_lowercase() {
        let mode: JitterMode = serde_yaml::from_str("seeded").unwrap();
        assert_eq!(mode, JitterMode::Seeded);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.scoring.long_threshold, 200);
        assert_eq!(config.logging.format, "pretty");
    }
}
