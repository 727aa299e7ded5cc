//! Configuration management for the rating report
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ReportFormat, ReportSettings, ServiceSettings, SourceSettings};
pub use rating::RatingConfig;
