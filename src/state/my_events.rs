//! "My events" state
//!
//! The logged-in user's own events, kept most recent first and edited in
//! place after each successful update or delete.

use tracing::{info, warn};

use crate::models::event::{Event, EventForm};
use crate::models::filter::FilterCriteria;
use crate::pipeline::{EventListPipeline, View};
use crate::services::events::EventService;
use crate::state::clock::Clock;
use crate::utils::errors::{EventManagerError, Result};

const UPDATE_FAILED: &str = "Failed to update event. Please try again.";

pub struct MyEvents<C: Clock> {
    pipeline: EventListPipeline,
    clock: C,
    events: Vec<Event>,
    error: Option<String>,
}

impl<C: Clock> MyEvents<C> {
    pub fn new(pipeline: EventListPipeline, clock: C) -> Self {
        Self {
            pipeline,
            clock,
            events: Vec::new(),
            error: None,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Message of the last failed mutation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Prefilled edit form for one of the user's events
    pub fn form_for(&self, event_id: &str) -> Option<EventForm> {
        let offset = *self.clock.now().offset();
        self.find(event_id).map(|event| EventForm::from_event(event, offset))
    }

    pub async fn load(&mut self, service: &EventService) -> Result<()> {
        let events = service.my_events().await?;
        self.set_events(events);
        Ok(())
    }

    /// Replace the list, keeping it most recent first
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = self.sorted(&events);
    }

    pub async fn update(&mut self, service: &EventService, event_id: &str, form: &EventForm) -> Result<()> {
        let current = self
            .find(event_id)
            .cloned()
            .ok_or_else(|| EventManagerError::EventNotFound { event_id: event_id.to_string() })?;
        let update = form.validate()?;

        if let Err(e) = service.update_event(event_id, &update).await {
            warn!(event_id = event_id, error = %e, "Event update failed");
            self.error = Some(UPDATE_FAILED.to_string());
            return Err(e);
        }

        let updated = current.with_update(&update);
        let events: Vec<Event> = self
            .events
            .iter()
            .map(|event| if event.id == event_id { updated.clone() } else { event.clone() })
            .collect();
        self.events = self.sorted(&events);
        self.error = None;
        info!(event_id = event_id, "Event updated");
        Ok(())
    }

    pub async fn delete(&mut self, service: &EventService, event_id: &str) -> Result<()> {
        if self.find(event_id).is_none() {
            return Err(EventManagerError::EventNotFound { event_id: event_id.to_string() });
        }

        service.delete_event(event_id).await?;
        self.events.retain(|event| event.id != event_id);
        info!(event_id = event_id, "Event deleted");
        Ok(())
    }

    fn sorted(&self, events: &[Event]) -> Vec<Event> {
        self.pipeline
            .derive_view(events, &FilterCriteria::default(), self.clock.now(), View::recent())
    }
}
