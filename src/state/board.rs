//! Event board state
//!
//! Owns the snapshot behind the all-events listing and the dashboard, the
//! current filter selection and the join bookkeeping. Every view is derived
//! on demand from the snapshot; nothing is cached between calls, so the last
//! write to the snapshot or the criteria always wins.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::event::Event;
use crate::models::filter::FilterCriteria;
use crate::pipeline::{malformed_count, EventListPipeline, View};
use crate::services::events::{EventService, EventSource};
use crate::services::join::{JoinRegistry, SnapshotJoinRegistry};
use crate::state::clock::Clock;
use crate::state::join::{JoinButton, JoinTracker};
use crate::utils::errors::{EventManagerError, Result};
use crate::utils::logging::log_view_derived;

/// Dashboard metric cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub total_events: usize,
    pub events_joined: usize,
    pub upcoming_events: usize,
}

pub struct EventBoard<C: Clock> {
    pipeline: EventListPipeline,
    clock: C,
    participant: Option<String>,
    events: Vec<Event>,
    criteria: FilterCriteria,
    registry: SnapshotJoinRegistry,
    tracker: JoinTracker,
}

impl<C: Clock> EventBoard<C> {
    /// `participant` is the logged-in user's email, `None` for visitors
    pub fn new(pipeline: EventListPipeline, clock: C, participant: Option<String>) -> Self {
        Self {
            pipeline,
            clock,
            participant,
            events: Vec::new(),
            criteria: FilterCriteria::default(),
            registry: SnapshotJoinRegistry::new(),
            tracker: JoinTracker::new(),
        }
    }

    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    /// Reference instant for every derived view
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn registry(&self) -> &SnapshotJoinRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &JoinTracker {
        &self.tracker
    }

    /// Replace the snapshot
    pub fn set_events(&mut self, events: Vec<Event>) {
        let malformed = malformed_count(&events, *self.clock.now().offset());
        if malformed > 0 {
            warn!(malformed = malformed, "Snapshot contains events with unparseable timestamps");
        }
        self.registry.refresh(&events);
        self.events = events;
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!(criteria = ?criteria, "Filter criteria changed");
        self.criteria = criteria;
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Fetch a new snapshot for the current criteria. On failure the board is
    /// left empty.
    pub async fn refresh<S: EventSource>(&mut self, source: &S) -> Result<()> {
        match source.fetch_events(&self.criteria).await {
            Ok(events) => {
                info!(count = events.len(), "Event snapshot loaded");
                self.set_events(events);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load events");
                self.set_events(Vec::new());
                Err(e)
            }
        }
    }

    /// Derive `view` under the current criteria
    pub fn view(&self, view: View) -> Vec<Event> {
        self.derive(&self.criteria, view)
    }

    /// The filtered all-events listing, most recent first
    pub fn listing(&self) -> Vec<Event> {
        self.view(View::recent())
    }

    /// Most attended events, ignoring the filter controls
    pub fn top_events(&self, n: usize) -> Vec<Event> {
        self.derive(&FilterCriteria::default(), View::top_events(n))
    }

    /// Next events to happen, ignoring the filter controls
    pub fn upcoming_events(&self, n: usize) -> Vec<Event> {
        self.derive(&FilterCriteria::default(), View::upcoming_highlight(n))
    }

    pub fn overview(&self) -> Overview {
        Overview {
            total_events: self.events.len(),
            events_joined: self
                .participant
                .as_deref()
                .map_or(0, |participant| self.registry.joined_count(participant)),
            upcoming_events: self.derive(&FilterCriteria::default(), View::upcoming()).len(),
        }
    }

    pub fn join_button(&self, event_id: &str) -> JoinButton {
        self.tracker.button(&self.registry, event_id, self.participant.as_deref())
    }

    /// Join an event, then refetch the unfiltered snapshot.
    ///
    /// Rejected without a network call when the participant has already
    /// joined. The exclusive borrow serializes joins made through this
    /// method; callers that want to show the in-flight state drive
    /// [`EventBoard::start_join`] and [`EventBoard::finish_join`] themselves.
    pub async fn join(&mut self, service: &EventService, event_id: &str) -> Result<()> {
        let participant = self.start_join(event_id)?;
        let outcome = service.join_event(event_id, &participant).await;
        self.finish_join(event_id, outcome)?;

        // A failed refetch keeps the current snapshot and the join just recorded
        match service.fetch_events(&FilterCriteria::default()).await {
            Ok(events) => self.set_events(events),
            Err(e) => warn!(event_id = event_id, error = %e, "Joined, but refetching events failed"),
        }
        Ok(())
    }

    /// Check that a join may be sent and mark it in flight. Returns the
    /// participant to send.
    pub fn start_join(&mut self, event_id: &str) -> Result<String> {
        let participant = self.participant.clone().ok_or(EventManagerError::Unauthenticated)?;

        if self.registry.has_joined(event_id, &participant) {
            let outcome = Err(EventManagerError::AlreadyJoined { event_id: event_id.to_string() });
            self.tracker.record(event_id, &outcome);
            return outcome.map(|()| participant);
        }

        self.tracker.begin(event_id)?;
        Ok(participant)
    }

    /// Settle an in-flight join with the server's outcome
    pub fn finish_join(&mut self, event_id: &str, outcome: Result<()>) -> Result<()> {
        let outcome = match (outcome, self.participant.as_deref()) {
            (Ok(()), Some(participant)) => self.registry.record_join(event_id, participant),
            (Ok(()), None) => Err(EventManagerError::Unauthenticated),
            (Err(e), _) => Err(e),
        };
        self.tracker.finish(event_id, &outcome);
        outcome
    }

    fn derive(&self, criteria: &FilterCriteria, view: View) -> Vec<Event> {
        let now = self.clock.now();
        let derived = self.pipeline.derive_view(&self.events, criteria, now, view);
        log_view_derived(view.name(), self.events.len(), derived.len(), malformed_count(&self.events, *now.offset()));
        derived
    }
}
