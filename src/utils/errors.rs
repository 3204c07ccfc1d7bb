//! Error handling for EventManager
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the EventManager client
#[derive(Error, Debug)]
pub enum EventManagerError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("You have already joined event {event_id}")]
    AlreadyJoined { event_id: String },

    #[error("A request for event {event_id} is still in progress")]
    ActionPending { event_id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Remote API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed with HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for EventManager operations
pub type Result<T> = std::result::Result<T, EventManagerError>;

impl From<config::ConfigError> for EventManagerError {
    fn from(err: config::ConfigError) -> Self {
        EventManagerError::Config(err.to_string())
    }
}

impl EventManagerError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventManagerError::Api(ApiError::RequestFailed { status, .. }) => *status >= 500,
            EventManagerError::Api(ApiError::InvalidResponse(_)) => false,
            EventManagerError::Api(_) => true,
            EventManagerError::Config(_) => false,
            EventManagerError::Unauthenticated => false,
            EventManagerError::EventNotFound { .. } => false,
            EventManagerError::AlreadyJoined { .. } => false,
            EventManagerError::ActionPending { .. } => true,
            EventManagerError::Http(_) => true,
            EventManagerError::Serialization(_) => false,
            EventManagerError::Io(_) => true,
            EventManagerError::UrlParse(_) => false,
            EventManagerError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventManagerError::Config(_) => ErrorSeverity::Critical,
            EventManagerError::Serialization(_) => ErrorSeverity::Critical,
            EventManagerError::Unauthenticated => ErrorSeverity::Warning,
            EventManagerError::AlreadyJoined { .. } => ErrorSeverity::Info,
            EventManagerError::ActionPending { .. } => ErrorSeverity::Info,
            EventManagerError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
