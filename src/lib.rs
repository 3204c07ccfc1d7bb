//! EventManager client
//!
//! Client library for an event management service: session handling, event
//! CRUD and joins against the remote API, plus the in-memory pipeline that
//! filters and orders event snapshots into the dashboard and listing views.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventManagerError, Result};

// Re-export main components for easy access
pub use models::{DateRange, Event, FilterCriteria};
pub use pipeline::{EventListPipeline, View, ViewOrder};
pub use services::ServiceFactory;
pub use state::{Clock, EventBoard, MyEvents};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
