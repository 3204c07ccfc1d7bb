//! State management module
//!
//! This module holds the in-memory view state: the event board behind the
//! dashboard and listing, the user's own events and join bookkeeping.

pub mod board;
pub mod clock;
pub mod join;
pub mod my_events;

// Re-export commonly used state components
pub use board::{EventBoard, Overview};
pub use clock::{Clock, FixedClock, SystemClock};
pub use join::{JoinButton, JoinState, JoinTracker};
pub use my_events::MyEvents;
