//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventManagerError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_pipeline_config(&settings.pipeline)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventManagerError::Config(
            "API base URL is required".to_string()
        ));
    }

    url::Url::parse(&config.base_url).map_err(|e| {
        EventManagerError::Config(format!("Invalid API base URL {}: {}", config.base_url, e))
    })?;

    if config.timeout_seconds == 0 {
        return Err(EventManagerError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate event pipeline configuration
fn validate_pipeline_config(config: &super::PipelineConfig) -> Result<()> {
    if config.week_start().is_none() {
        return Err(EventManagerError::Config(
            format!("Invalid week start: {}. Expected a weekday name", config.week_start)
        ));
    }

    if config.utc_offset().is_none() {
        return Err(EventManagerError::Config(
            format!("Invalid UTC offset: {}. Expected e.g. +06:00", config.utc_offset)
        ));
    }

    if config.top_events_limit == 0 || config.upcoming_limit == 0 {
        return Err(EventManagerError::Config(
            "Highlight limits must be greater than 0".to_string()
        ));
    }

    if config.description_word_limit == 0 {
        return Err(EventManagerError::Config(
            "Description word limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.email.is_some() != config.password.is_some() {
        return Err(EventManagerError::Config(
            "Session email and password must be configured together".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventManagerError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventManagerError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(EventManagerError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}
