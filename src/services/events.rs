//! Event service implementation
//!
//! Fetches event snapshots and submits event mutations. Nothing here filters
//! or orders events for display; that is the pipeline's job once a snapshot
//! is in memory.

use std::future::Future;

use reqwest::Method;
use tracing::debug;

use crate::models::event::{Event, EventForm, JoinRequest, NewEvent};
use crate::models::filter::FilterCriteria;
use crate::services::api::ApiClient;
use crate::utils::errors::Result;
use crate::utils::logging::log_event_action;

/// Supplier of raw event snapshots
pub trait EventSource {
    fn fetch_events(&self, criteria: &FilterCriteria) -> impl Future<Output = Result<Vec<Event>>> + Send;
}

/// Fixed in-memory snapshot, used for visitors who are not logged in
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Sample events shown on the dashboard before login
    pub fn mock() -> Self {
        Self::new(mock_events())
    }
}

impl EventSource for StaticEventSource {
    async fn fetch_events(&self, _criteria: &FilterCriteria) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }
}

/// Sample events shown to visitors
pub fn mock_events() -> Vec<Event> {
    let sample = |id: &str, title: &str, owner: &str, email: &str, at: &str, location: &str, description: &str, count: u32| Event {
        id: id.to_string(),
        title: title.to_string(),
        owner_name: owner.to_string(),
        owner_email: Some(email.to_string()),
        occurs_at: at.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        attendee_count: count,
        joined_by: Vec::new(),
    };

    vec![
        sample("1", "Mock Tech Conference", "John Doe", "john@example.com",
            "2025-07-02T10:00:00+06:00", "Online", "A great tech event with workshops.", 150),
        sample("2", "Mock Music Festival", "Jane Smith", "jane@example.com",
            "2025-07-03T14:00:00+06:00", "City Park", "Enjoy live music and food stalls.", 200),
        sample("3", "Mock Coding Bootcamp", "Alex Brown", "alex@example.com",
            "2025-07-04T09:00:00+06:00", "Tech Hub", "Learn coding skills in a day.", 100),
    ]
}

/// Event service backed by the remote API
#[derive(Clone, Debug)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All events, narrowed server-side by the criteria's query parameters
    pub async fn list_events(&self, criteria: &FilterCriteria) -> Result<Vec<Event>> {
        let params = criteria.query_params();
        debug!(params = ?params, "Fetching all events");
        let events: Vec<Event> = self.api.get_data("events/all-events", &params).await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    /// Events posted by the logged-in user
    pub async fn my_events(&self) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.api.get_data("events/my-events", &[]).await?;
        debug!(count = events.len(), "Fetched my events");
        Ok(events)
    }

    /// Validate and submit the create-event form
    pub async fn create_event(&self, form: &EventForm) -> Result<NewEvent> {
        let new_event = form.validate()?;
        self.api.send_json(Method::POST, "events/create-event", &new_event).await?;
        log_event_action("new", "create", None, Some(&new_event.title));
        Ok(new_event)
    }

    pub async fn update_event(&self, event_id: &str, update: &NewEvent) -> Result<()> {
        let path = format!("events/update-event/{}", urlencoding::encode(event_id));
        self.api.send_json(Method::PUT, &path, update).await?;
        log_event_action(event_id, "update", None, None);
        Ok(())
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        let path = format!("events/delete-event/{}", urlencoding::encode(event_id));
        self.api.send_empty(Method::DELETE, &path).await?;
        log_event_action(event_id, "delete", None, None);
        Ok(())
    }

    pub async fn join_event(&self, event_id: &str, participant_id: &str) -> Result<()> {
        let path = format!("events/join/{}", urlencoding::encode(event_id));
        let body = JoinRequest { user_email: participant_id.to_string() };
        self.api.send_json(Method::POST, &path, &body).await?;
        log_event_action(event_id, "join", Some(participant_id), None);
        Ok(())
    }
}

impl EventSource for EventService {
    async fn fetch_events(&self, criteria: &FilterCriteria) -> Result<Vec<Event>> {
        self.list_events(criteria).await
    }
}
