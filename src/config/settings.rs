//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use chrono::{DateTime, FixedOffset, Weekday};
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Remote event manager API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Event list pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// First day of the week for week-based date ranges, e.g. "monday"
    pub week_start: String,
    pub top_events_limit: usize,
    pub upcoming_limit: usize,
    pub description_word_limit: usize,
    /// Offset used as "local time" by the system clock, e.g. "+06:00"
    pub utc_offset: String,
}

/// Credentials for the command-line dashboard
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory the rolling log files are written to
    pub file_path: String,
    pub file_name: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(config::File::with_name("config").required(false))
    }

    /// Load settings from a specific file, still honouring environment overrides
    pub fn from_file(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::load(config::File::from(path))
    }

    fn load<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_seconds", defaults.api.timeout_seconds)?
            .set_default("api.user_agent", defaults.api.user_agent)?
            .set_default("pipeline.week_start", defaults.pipeline.week_start)?
            .set_default("pipeline.top_events_limit", defaults.pipeline.top_events_limit as u64)?
            .set_default("pipeline.upcoming_limit", defaults.pipeline.upcoming_limit as u64)?
            .set_default(
                "pipeline.description_word_limit",
                defaults.pipeline.description_word_limit as u64,
            )?
            .set_default("pipeline.utc_offset", defaults.pipeline.utc_offset)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .set_default("logging.file_name", defaults.logging.file_name)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("EVENTMANAGER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventManagerError> {
        super::validation::validate_settings(self)
    }
}

impl PipelineConfig {
    /// Parsed first day of the week
    pub fn week_start(&self) -> Option<Weekday> {
        self.week_start.parse::<Weekday>().ok()
    }

    /// Parsed offset for the system clock
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        let probe = format!("2000-01-01T00:00:00{}", self.utc_offset.trim());
        DateTime::parse_from_rfc3339(&probe).ok().map(|dt| *dt.offset())
    }
}

impl SessionConfig {
    /// Both halves of the credentials, if configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() => Some((email, password)),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: 10,
                user_agent: "EventManager-Client/0.1".to_string(),
            },
            pipeline: PipelineConfig {
                week_start: "monday".to_string(),
                top_events_limit: 3,
                upcoming_limit: 3,
                description_word_limit: 10,
                utc_offset: "+00:00".to_string(),
            },
            session: SessionConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
                file_name: "eventmanager.log".to_string(),
            },
        }
    }
}
