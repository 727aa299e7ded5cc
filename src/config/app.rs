//! Main application configuration
//!
//! This module defines the configuration structures for the rating report,
//! including TOML file loading, environment variable overrides, and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub source: SourceSettings,
    pub rating: RatingConfig,
    pub report: ReportSettings,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where game records come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// CSV export of the `Games` sheet
    pub games_csv: PathBuf,
}

/// Output format of the player summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err(anyhow!("Invalid report format: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: ReportFormat,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "catan-elo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            games_csv: PathBuf::from("games.csv"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&text)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text without validation
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(path) = env::var("GAMES_CSV") {
            self.source.games_csv = PathBuf::from(path);
        }
        if let Ok(rating) = env::var("INITIAL_RATING") {
            self.rating.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(k) = env::var("K_FACTOR") {
            self.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR value: {}", k))?;
        }
        if let Ok(threshold) = env::var("WIN_THRESHOLD") {
            self.rating.win_threshold = threshold
                .parse()
                .map_err(|_| anyhow!("Invalid WIN_THRESHOLD value: {}", threshold))?;
        }
        if let Ok(min_games) = env::var("MIN_GAMES") {
            self.rating.min_games = min_games
                .parse()
                .map_err(|_| anyhow!("Invalid MIN_GAMES value: {}", min_games))?;
        }
        if let Ok(format) = env::var("REPORT_FORMAT") {
            self.report.format = format.parse()?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.source.games_csv.as_os_str().is_empty() {
        return Err(anyhow!("Games CSV path cannot be empty"));
    }

    if !config.rating.initial_rating.is_finite() {
        return Err(anyhow!("Initial rating must be a finite number"));
    }
    if !(config.rating.k_factor.is_finite() && config.rating.k_factor > 0.0) {
        return Err(anyhow!("K-factor must be positive"));
    }
    if config.rating.min_games == 0 {
        return Err(anyhow!("Minimum games must be at least 1"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.rating.initial_rating, 1000.0);
        assert_eq!(config.rating.k_factor, 15.0);
        assert_eq!(config.rating.win_threshold, 10);
        assert_eq!(config.report.format, ReportFormat::Table);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [rating]
            k_factor = 24.0

            [report]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.rating.k_factor, 24.0);
        assert_eq!(config.rating.initial_rating, 1000.0);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.rating.k_factor = 0.0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.rating.min_games = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("table".parse::<ReportFormat>().unwrap(), ReportFormat::Table);
        assert!("html".parse::<ReportFormat>().is_err());
    }
}
