//! Reference time sources
//!
//! Views never read the wall clock directly; they ask a [`Clock`] so that a
//! fixed instant can be injected in tests.

use chrono::{DateTime, FixedOffset, Utc};

pub trait Clock {
    /// The instant used as "now" for relative date ranges
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in a configured offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
