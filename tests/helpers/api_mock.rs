//! Mock event manager API server for testing
//!
//! This module provides a mock HTTP server that simulates the event manager
//! REST API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use EventManager::config::Settings;
use EventManager::services::ServiceFactory;

pub const SESSION_COOKIE: &str = "token=test-session";

/// Mock event manager API server
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        super::init_test_env();
        Self { server: MockServer::start().await }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Default settings pointing at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.uri();
        settings.api.timeout_seconds = 2;
        settings
    }

    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::new(&self.settings()).expect("Failed to build services")
    }

    /// Successful login that sets the session cookie
    pub async fn mock_login(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", format!("{}; Path=/; HttpOnly", SESSION_COOKIE).as_str())
                    .set_body_json(json!({ "success": true, "message": "Login successful" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Token validation that only succeeds when the session cookie is sent
    pub async fn mock_validate_token(&self, user: Value) {
        Mock::given(method("POST"))
            .and(path("/auth/validate-token"))
            .and(header("cookie", SESSION_COOKIE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": user })))
            .mount(&self.server)
            .await;
    }

    /// Token validation rejected with `status`
    pub async fn mock_validate_token_rejected(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/auth/validate-token"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "success": false,
                "message": "Unauthorized access",
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_logout(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/expire-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// `events/all-events` returning `events` regardless of query
    pub async fn mock_all_events(&self, events: Value) {
        Mock::given(method("GET"))
            .and(path("/events/all-events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": events })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_my_events(&self, events: Value) {
        Mock::given(method("GET"))
            .and(path("/events/my-events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": events })))
            .mount(&self.server)
            .await;
    }

    /// Successful join for `participant`, expected exactly `times` times
    pub async fn mock_join(&self, event_id: &str, participant: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/events/join/{}", event_id)))
            .and(body_json(json!({ "userEmail": participant })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Failing join with an API error envelope
    pub async fn mock_join_error(&self, event_id: &str, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/events/join/{}", event_id)))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "success": false,
                "message": message,
                "errorSources": [{ "path": "", "message": message }],
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_update(&self, event_id: &str, status: u16) {
        Mock::given(method("PUT"))
            .and(path(format!("/events/update-event/{}", event_id)))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "success": status < 400 })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_delete(&self, event_id: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/events/delete-event/{}", event_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
