//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Generate a new request correlation id
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Format an event time for display, e.g. "Jul 2, 2025, 10:00 AM"
pub fn format_event_time(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Format a timestamp as a `datetime-local` form value
pub fn to_datetime_local(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M").to_string()
}

/// Keep the first `word_limit` words of a description, marking the cut with "..."
pub fn truncate_description(text: &str, word_limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > word_limit {
        format!("{}...", words[..word_limit].join(" "))
    } else {
        text.to_string()
    }
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}
