//! Services module
//!
//! This module contains the clients of the remote event manager API and
//! the join bookkeeping shared by the views.

pub mod api;
pub mod auth;
pub mod events;
pub mod join;

// Re-export commonly used services
pub use api::ApiClient;
pub use auth::AuthService;
pub use events::{EventService, EventSource, StaticEventSource, mock_events};
pub use join::{JoinRegistry, SnapshotJoinRegistry};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub auth_service: AuthService,
    pub event_service: EventService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one HTTP session
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        let auth_service = AuthService::new(api.clone());
        let event_service = EventService::new(api.clone());

        Ok(Self {
            api,
            auth_service,
            event_service,
        })
    }
}
