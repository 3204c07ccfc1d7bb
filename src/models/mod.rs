//! Data models module
//!
//! This module contains all data structures used throughout the client

pub mod user;
pub mod event;
pub mod filter;

// Re-export commonly used models
pub use user::{User, CreateUserRequest, Credentials};
pub use event::{Event, NewEvent, EventForm, JoinRequest, parse_timestamp};
pub use filter::{FilterCriteria, DateRange};
