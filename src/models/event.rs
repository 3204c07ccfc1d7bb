//! Event model

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{EventManagerError, Result};
use crate::utils::helpers::to_datetime_local;

/// Naive layouts accepted in addition to RFC 3339
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "eventTitle")]
    pub title: String,
    #[serde(rename = "name")]
    pub owner_name: String,
    #[serde(rename = "userEmail", default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    /// Raw timestamp as supplied by the source; see [`parse_timestamp`]
    #[serde(rename = "dateAndTime", alias = "dateTime")]
    pub occurs_at: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "attendeeCount", default)]
    pub attendee_count: u32,
    #[serde(rename = "joins", default)]
    pub joined_by: Vec<String>,
}

impl Event {
    /// Parse `occurs_at`, reading naive timestamps in `offset`
    pub fn occurs_at_in(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.occurs_at, offset)
    }

    /// Whether `participant_id` appears in the join list
    pub fn has_joined(&self, participant_id: &str) -> bool {
        self.joined_by.iter().any(|p| p == participant_id)
    }

    /// Number of distinct participants, duplicates counted once
    pub fn distinct_joiners(&self) -> usize {
        self.joined_by.iter().collect::<HashSet<_>>().len()
    }

    /// Copy of this event with the editable fields replaced
    pub fn with_update(&self, update: &NewEvent) -> Event {
        Event {
            id: self.id.clone(),
            title: update.title.clone(),
            owner_name: update.owner_name.clone(),
            owner_email: self.owner_email.clone(),
            occurs_at: update.occurs_at.clone(),
            location: update.location.clone(),
            description: update.description.clone(),
            attendee_count: update.attendee_count,
            joined_by: self.joined_by.clone(),
        }
    }
}

/// Parse an event timestamp.
///
/// The result is always expressed in `offset`: RFC 3339 values are converted,
/// naive values (`2025-07-10T18:00`, `2025-07-10 18:00`) are read as
/// wall-clock time there.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&offset));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
}

/// Validated payload for creating or updating an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(rename = "eventTitle")]
    pub title: String,
    #[serde(rename = "name")]
    pub owner_name: String,
    #[serde(rename = "dateAndTime")]
    pub occurs_at: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "attendeeCount")]
    pub attendee_count: u32,
}

/// Raw values of the create/update event form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub owner_name: String,
    pub occurs_at: String,
    pub location: String,
    pub description: String,
    pub attendee_count: String,
}

impl EventForm {
    /// Prefill the form from an existing event
    pub fn from_event(event: &Event, offset: FixedOffset) -> Self {
        let occurs_at = event
            .occurs_at_in(offset)
            .map(to_datetime_local)
            .unwrap_or_else(|| event.occurs_at.clone());

        Self {
            title: event.title.clone(),
            owner_name: event.owner_name.clone(),
            occurs_at,
            location: event.location.clone(),
            description: event.description.clone(),
            attendee_count: event.attendee_count.to_string(),
        }
    }

    /// Check the required fields and parse the attendee count
    pub fn validate(&self) -> Result<NewEvent> {
        let attendee_count = self.attendee_count.trim().parse::<u32>().ok();

        match attendee_count {
            Some(attendee_count)
                if !self.title.trim().is_empty()
                    && !self.owner_name.trim().is_empty()
                    && !self.occurs_at.trim().is_empty()
                    && !self.location.trim().is_empty() =>
            {
                Ok(NewEvent {
                    title: self.title.trim().to_string(),
                    owner_name: self.owner_name.trim().to_string(),
                    occurs_at: self.occurs_at.trim().to_string(),
                    location: self.location.trim().to_string(),
                    description: self.description.clone(),
                    attendee_count,
                })
            }
            _ => Err(EventManagerError::InvalidInput(
                "Please fill in all fields correctly.".to_string(),
            )),
        }
    }
}

/// Body of a join request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Timelike;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn event_json() -> &'static str {
        r#"{
            "_id": "64f1",
            "eventTitle": "Tech Conference",
            "name": "John Doe",
            "dateAndTime": "2025-07-02T10:00:00+06:00",
            "location": "Online",
            "description": "A great tech event with workshops.",
            "attendeeCount": 150,
            "joins": ["a@x.com", "a@x.com", "b@x.com"]
        }"#
    }

    #[test]
    fn test_event_deserialization() {
        let event: Event = serde_json::from_str(event_json()).unwrap();
        assert_eq!(event.id, "64f1");
        assert_eq!(event.title, "Tech Conference");
        assert_eq!(event.owner_name, "John Doe");
        assert_eq!(event.attendee_count, 150);
        assert!(event.has_joined("a@x.com"));
        assert!(!event.has_joined("c@x.com"));
        assert_eq!(event.distinct_joiners(), 2);
    }

    #[test]
    fn test_event_without_joins_or_id_alias() {
        let json = r#"{"id": "1", "eventTitle": "Team Meeting", "name": "John Doe",
            "dateTime": "2025-07-10 18:00", "location": "Conference Room A",
            "description": "Monthly meeting", "attendeeCount": 10}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "1");
        assert!(event.joined_by.is_empty());
        assert_eq!(event.occurs_at_in(utc()).map(|t| t.hour()), Some(18));
    }

    #[test]
    fn test_negative_attendee_count_is_rejected() {
        let json = event_json().replace("150", "-1");
        assert!(serde_json::from_str::<Event>(&json).is_err());
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        let plus_six = FixedOffset::east_opt(6 * 3600).unwrap();

        let with_offset = parse_timestamp("2025-07-02T10:00:00+06:00", utc()).unwrap();
        assert_eq!(with_offset.offset(), &utc());
        assert_eq!(with_offset.hour(), 4);
        assert_eq!(with_offset, DateTime::parse_from_rfc3339("2025-07-02T04:00:00Z").unwrap());

        let naive = parse_timestamp("2025-07-10T18:00", plus_six).unwrap();
        assert_eq!(naive.offset(), &plus_six);
        assert_eq!(naive.hour(), 18);

        assert!(parse_timestamp("2025-07-10 18:00:30", utc()).is_some());
        assert!(parse_timestamp("not-a-date", utc()).is_none());
        assert!(parse_timestamp("", utc()).is_none());
    }

    #[test]
    fn test_event_form_validation() {
        let mut form = EventForm {
            title: "Tech Meetup".to_string(),
            owner_name: "Jane".to_string(),
            occurs_at: "2025-07-20T10:00".to_string(),
            location: "Hub".to_string(),
            description: String::new(),
            attendee_count: "25".to_string(),
        };
        let new_event = form.validate().unwrap();
        assert_eq!(new_event.attendee_count, 25);

        form.attendee_count = "-3".to_string();
        assert_matches!(form.validate(), Err(EventManagerError::InvalidInput(_)));

        form.attendee_count = "3".to_string();
        form.location = "  ".to_string();
        assert_matches!(form.validate(), Err(EventManagerError::InvalidInput(_)));
    }

    #[test]
    fn test_form_prefill_and_update() {
        let event: Event = serde_json::from_str(event_json()).unwrap();
        let plus_six = FixedOffset::east_opt(6 * 3600).unwrap();
        let mut form = EventForm::from_event(&event, plus_six);
        assert_eq!(form.occurs_at, "2025-07-02T10:00");
        assert_eq!(form.attendee_count, "150");

        form.title = "Renamed".to_string();
        let updated = event.with_update(&form.validate().unwrap());
        assert_eq!(updated.id, event.id);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.joined_by, event.joined_by);
    }

    #[test]
    fn test_form_round_trip_keeps_instant() {
        let plus_six = FixedOffset::east_opt(6 * 3600).unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        for raw in ["2025-07-02T04:00:00Z", "2025-07-01T23:30:00-05:00", "2025-07-02T10:00:00+06:00"] {
            let mut event: Event = serde_json::from_str(event_json()).unwrap();
            event.occurs_at = raw.to_string();
            let original = DateTime::parse_from_rfc3339(raw).unwrap();

            for offset in [utc(), plus_six, minus_five] {
                let form = EventForm::from_event(&event, offset);
                let updated = event.with_update(&form.validate().unwrap());
                assert_eq!(updated.occurs_at_in(offset), Some(original), "{} viewed at {}", raw, offset);
            }
        }
    }

    #[test]
    fn test_new_event_wire_names() {
        let new_event = NewEvent {
            title: "t".to_string(),
            owner_name: "o".to_string(),
            occurs_at: "2025-07-20T10:00".to_string(),
            location: "l".to_string(),
            description: "d".to_string(),
            attendee_count: 1,
        };
        let value = serde_json::to_value(&new_event).unwrap();
        assert_eq!(value["eventTitle"], "t");
        assert_eq!(value["name"], "o");
        assert_eq!(value["dateAndTime"], "2025-07-20T10:00");
        assert_eq!(value["attendeeCount"], 1);
    }
}
