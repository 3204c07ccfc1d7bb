//! Test data helpers for creating events and reference instants

use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};

use EventManager::models::Event;
use EventManager::state::FixedClock;

pub const TEST_EMAIL: &str = "alice@example.com";
pub const TEST_PASSWORD: &str = "secret123";

/// Tuesday 2025-07-01 14:47 at UTC+6
pub fn reference_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-07-01T14:47:00+06:00").unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(reference_now())
}

/// Helper function to create a test event
pub fn create_test_event(id: &str, title: &str, occurs_at: &str, attendee_count: u32) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        owner_name: "Test Owner".to_string(),
        owner_email: Some("owner@example.com".to_string()),
        occurs_at: occurs_at.to_string(),
        location: "Community Hall".to_string(),
        description: "An event used in tests".to_string(),
        attendee_count,
        joined_by: Vec::new(),
    }
}

/// Wire representation of an event as the API returns it
pub fn event_json(id: &str, title: &str, occurs_at: &str, attendee_count: u32, joins: &[&str]) -> Value {
    json!({
        "_id": id,
        "eventTitle": title,
        "name": "Test Owner",
        "userEmail": "owner@example.com",
        "dateAndTime": occurs_at,
        "location": "Community Hall",
        "description": "An event used in tests",
        "attendeeCount": attendee_count,
        "joins": joins,
    })
}

/// Three events around [`reference_now`]: one past, two upcoming
pub fn sample_events_json() -> Value {
    json!([
        event_json("A", "Tech Talk", "2025-06-29T10:00:00+06:00", 10, &[TEST_EMAIL]),
        event_json("B", "Music Night", "2025-07-02T10:00:00+06:00", 5, &[]),
        event_json("C", "Tech Conference", "2025-07-03T10:00:00+06:00", 50, &[]),
    ])
}

pub fn user_json(email: &str) -> Value {
    json!({
        "_id": "u1",
        "name": "Alice",
        "email": email,
        "photoURL": "https://example.com/alice.png",
        "role": "user",
    })
}
