//! Join action state
//!
//! Tracks which join requests are in flight and the outcome of the most
//! recent attempt, and turns both into the label and enabled state of an
//! event's join button.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::join::JoinRegistry;
use crate::utils::errors::{ApiError, EventManagerError, Result};

/// Outcome of the most recent join attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinState {
    pub event_id: String,
    pub error: Option<String>,
    pub success: bool,
}

/// Display state of a join button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JoinTracker {
    pending: HashSet<String>,
    last: Option<JoinState>,
}

impl JoinTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a join for `event_id` as in flight. Fails while one already is.
    pub fn begin(&mut self, event_id: &str) -> Result<()> {
        if !self.pending.insert(event_id.to_string()) {
            debug!(event_id = event_id, "Join already in flight");
            return Err(EventManagerError::ActionPending { event_id: event_id.to_string() });
        }
        Ok(())
    }

    /// Clear the in-flight mark and remember the outcome
    pub fn finish(&mut self, event_id: &str, outcome: &Result<()>) {
        self.pending.remove(event_id);
        self.record(event_id, outcome);
    }

    /// Remember an outcome without touching the in-flight set
    pub fn record(&mut self, event_id: &str, outcome: &Result<()>) {
        self.last = Some(JoinState {
            event_id: event_id.to_string(),
            error: outcome.as_ref().err().map(join_error_message),
            success: outcome.is_ok(),
        });
    }

    pub fn is_pending(&self, event_id: &str) -> bool {
        self.pending.contains(event_id)
    }

    pub fn last_state(&self) -> Option<&JoinState> {
        self.last.as_ref()
    }

    /// Error of the last attempt, if it was for `event_id`
    pub fn error_for(&self, event_id: &str) -> Option<&str> {
        self.last
            .as_ref()
            .filter(|state| state.event_id == event_id)
            .and_then(|state| state.error.as_deref())
    }

    /// Button state: "Joined" once joined; disabled while joined, in flight,
    /// or after the last attempt for this event failed
    pub fn button<R: JoinRegistry>(&self, registry: &R, event_id: &str, participant_id: Option<&str>) -> JoinButton {
        let joined = participant_id.is_some_and(|p| registry.has_joined(event_id, p));
        JoinButton {
            label: if joined { "Joined" } else { "Join" },
            disabled: joined || self.is_pending(event_id) || self.error_for(event_id).is_some(),
        }
    }
}

fn join_error_message(error: &EventManagerError) -> String {
    match error {
        EventManagerError::AlreadyJoined { .. } => "You have already joined this event.".to_string(),
        EventManagerError::Api(ApiError::RequestFailed { message, .. }) => message.clone(),
        EventManagerError::Api(_) | EventManagerError::Http(_) => {
            "An error occurred while joining the event.".to_string()
        }
        other => other.to_string(),
    }
}
