//! Configuration management for the car price predictor

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the reference dataset and the model bundle
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// CSV of historical listings
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// JSON model bundle
    #[serde(default = "default_bundle_path")]
    pub bundle_path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/car_price.csv")
}

fn default_bundle_path() -> PathBuf {
    PathBuf::from("models/models.json")
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            bundle_path: default_bundle_path(),
        }
    }
}

/// Result presentation
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Prefix of rendered prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Show estimator class names under the result
    #[serde(default = "default_show_model_details")]
    pub show_model_details: bool,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_show_model_details() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            show_model_details: default_show_model_details(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, json)
    #[serde(default)]
    pub format: LogFormat,
    /// Log file used while the terminal UI owns the screen
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("car-price-predictor.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific path. A missing file yields the
    /// defaults; a present but invalid one is an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .with_context(|| format!("Failed to build configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.artifacts.dataset_path, PathBuf::from("data/car_price.csv"));
        assert_eq!(config.artifacts.bundle_path, PathBuf::from("models/models.json"));
        assert_eq!(config.display.currency_symbol, "₹");
        assert!(config.display.show_model_details);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[display]\ncurrency_symbol = \"$\"\n\n[logging]\nformat = \"json\"\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.display.show_model_details);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.artifacts.bundle_path, PathBuf::from("models/models.json"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nformat = \"xml\"").unwrap();

        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
