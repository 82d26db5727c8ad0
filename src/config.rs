//! Production configuration system
//!
//! Provides centralized configuration management with:
//! - Environment variable support
//! - Config file loading (optional)
//! - Runtime defaults
//! - Validation and type safety

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Refresh loop configuration
    pub polling: PollingConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

const LOG_FORMATS: &[&str] = &["pretty", "json"];
const LOG_OUTPUTS: &[&str] = &["console", "file", "both"];

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "WARN".to_string(),
                format: "pretty".to_string(),
                output: "console".to_string(),
            },
            polling: PollingConfig { interval_secs: 2 },
            output: OutputConfig { json_pretty: true },
            paths: PathsConfig {
                log_directory: PathBuf::from("logs"),
            },
            loaded_from: None,
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Load configuration from environment, file, and defaults
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let config_paths = [
            PathBuf::from("event-summary.toml"),
            PathBuf::from(".event-summary.toml"),
            dirs::config_dir()
                .map(|d| d.join("event-summary").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                config = Self::load_from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.loaded_from = Some(path.to_path_buf());

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        if let Ok(val) = env::var("EVENT_SUMMARY_POLL_INTERVAL_SECS") {
            self.polling.interval_secs = val
                .parse()
                .context("Invalid EVENT_SUMMARY_POLL_INTERVAL_SECS")?;
        }
        if let Ok(val) = env::var("EVENT_SUMMARY_JSON_PRETTY") {
            self.output.json_pretty = val.parse().context("Invalid EVENT_SUMMARY_JSON_PRETTY")?;
        }

        if let Ok(val) = env::var("EVENT_SUMMARY_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.polling.interval_secs == 0 {
            return Err(anyhow::anyhow!("Poll interval must be greater than 0 seconds"));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Unknown log format '{}', expected one of {:?}",
                self.logging.format,
                LOG_FORMATS
            ));
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            return Err(anyhow::anyhow!(
                "Unknown log output '{}', expected one of {:?}",
                self.logging.output,
                LOG_OUTPUTS
            ));
        }

        if self.logging.output != "console" && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory)
                .context("Failed to create log directory")?;
        }

        Ok(())
    }

    /// Report where the configuration came from and any questionable
    /// values. Loading happens before logging is set up, so this is called
    /// once a subscriber is installed.
    pub fn log_loaded(&self) {
        match &self.loaded_from {
            Some(path) => info!(config_file = %path.display(), "Loaded configuration from file"),
            None => info!("No configuration file found, using defaults"),
        }

        if self.polling.interval_secs > 3600 {
            warn!(
                interval_secs = self.polling.interval_secs,
                "Poll interval is over an hour, changes will be picked up slowly"
            );
        }
    }
}

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install an already loaded configuration as the global instance.
/// Returns the configuration that ends up installed.
pub fn init_config(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Get the global configuration instance, falling back to defaults when
/// nothing was installed and loading fails
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load configuration, using defaults");
            Config::default()
        })
    })
}
