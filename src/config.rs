//! Configuration management for the library catalogue

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Directory the rolling log files are written to
    pub directory: String,
    pub file_prefix: String,
    pub rotation: LogRotation,
}

/// How often the log file rolls over. Any other value fails at load.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Daily => "daily",
            LogRotation::Hourly => "hourly",
            LogRotation::Never => "never",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub banner: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)?.build()?.try_deserialize()
    }

    fn builder(
        run_mode: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = LoggingConfig::default();
        let console = ConsoleConfig::default();

        Config::builder()
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", defaults.format)?
            .set_default("logging.directory", defaults.directory)?
            .set_default("logging.file_prefix", defaults.file_prefix)?
            .set_default("logging.rotation", defaults.rotation.as_str())?
            .set_default("console.banner", console.banner)?
            // Shared defaults, then the run-mode specific file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix CATALOGUE_), e.g. CATALOGUE_LOGGING__LEVEL
            .add_source(
                Environment::with_prefix("CATALOGUE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override log directory from LOG_DIR env var if present
            .set_override_option("logging.directory", env::var("LOG_DIR").ok())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: "logs".to_string(),
            file_prefix: "catalogue.log".to_string(),
            rotation: LogRotation::Daily,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: "Library Management System".to_string(),
        }
    }
}
