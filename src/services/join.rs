//! Join bookkeeping
//!
//! [`JoinRegistry`] answers "has this participant joined this event". The one
//! implementation, [`SnapshotJoinRegistry`], is built from the server-side
//! `joins` lists of the current event snapshot and is refreshed whenever the
//! snapshot is refetched.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::event::Event;
use crate::utils::errors::{EventManagerError, Result};

/// Which participants have joined which events
pub trait JoinRegistry {
    fn has_joined(&self, event_id: &str, participant_id: &str) -> bool;

    /// Record a join. Joining twice fails with [`EventManagerError::AlreadyJoined`].
    fn record_join(&mut self, event_id: &str, participant_id: &str) -> Result<()>;
}

/// Registry backed by the `joins` lists of an event snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotJoinRegistry {
    joins: HashMap<String, HashSet<String>>,
}

impl SnapshotJoinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: &[Event]) -> Self {
        let mut registry = Self::new();
        registry.refresh(events);
        registry
    }

    /// Replace all bookkeeping with the joins of a fresh snapshot
    pub fn refresh(&mut self, events: &[Event]) {
        self.joins = events
            .iter()
            .map(|event| (event.id.clone(), event.joined_by.iter().cloned().collect()))
            .collect();
        debug!(events = self.joins.len(), "Join registry refreshed from snapshot");
    }

    /// Distinct participants of one event
    pub fn distinct_joiners(&self, event_id: &str) -> usize {
        self.joins.get(event_id).map_or(0, HashSet::len)
    }

    /// Number of events `participant_id` has joined
    pub fn joined_count(&self, participant_id: &str) -> usize {
        self.joins
            .values()
            .filter(|participants| participants.contains(participant_id))
            .count()
    }
}

impl JoinRegistry for SnapshotJoinRegistry {
    fn has_joined(&self, event_id: &str, participant_id: &str) -> bool {
        self.joins
            .get(event_id)
            .is_some_and(|participants| participants.contains(participant_id))
    }

    fn record_join(&mut self, event_id: &str, participant_id: &str) -> Result<()> {
        let inserted = self
            .joins
            .entry(event_id.to_string())
            .or_default()
            .insert(participant_id.to_string());

        if inserted {
            Ok(())
        } else {
            Err(EventManagerError::AlreadyJoined { event_id: event_id.to_string() })
        }
    }
}
