//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventManager client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventManagerError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| EventManagerError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(email: &str, action: &str, details: Option<&str>) {
    info!(
        email = email,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log event management actions
pub fn log_event_action(event_id: &str, action: &str, participant: Option<&str>, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        participant = participant,
        details = details,
        "Event action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log the outcome of a derived view
pub fn log_view_derived(view: &str, input: usize, output: usize, malformed: usize) {
    if malformed > 0 {
        warn!(
            view = view,
            input = input,
            output = output,
            malformed = malformed,
            "Derived view skipped events with malformed timestamps"
        );
    } else {
        debug!(view = view, input = input, output = output, "Derived view");
    }
}

/// Log API request timings
pub fn log_api_request(method: &str, endpoint: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            method = method,
            endpoint = endpoint,
            duration_ms = duration_ms,
            "API request completed"
        );
    } else {
        warn!(
            method = method,
            endpoint = endpoint,
            duration_ms = duration_ms,
            "API request failed"
        );
    }
}
