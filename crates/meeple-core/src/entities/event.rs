//! Event entity - a scheduled board-game meetup

use chrono::{DateTime, Utc};

/// Status a freshly created event starts in. Status is a free-form
/// string, not a constrained set.
pub const DEFAULT_EVENT_STATUS: &str = "recruiting";

/// Event entity representing a scheduled meetup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub participant_count: i32,
    pub max_participants: Option<i32>,
    /// Participation cost, free-form (e.g. "free", "5000 KRW")
    pub cost: Option<String>,
    /// User organizing the event, if any
    pub organizer_id: Option<i64>,
    /// Stored and serialized as `type`; `kind` avoids the Rust keyword
    pub kind: Option<String>,
    pub join_type: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

/// Draft for creating an event; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub participant_count: i32,
    pub max_participants: Option<i32>,
    pub cost: Option<String>,
    pub organizer_id: Option<i64>,
    pub kind: Option<String>,
    pub join_type: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

impl NewEvent {
    /// Create a draft with the required fields; the event starts
    /// recruiting with no participants
    pub fn new(name: String, date: DateTime<Utc>) -> Self {
        Self {
            name,
            description: None,
            date,
            location: None,
            address: None,
            status: DEFAULT_EVENT_STATUS.to_string(),
            participant_count: 0,
            max_participants: None,
            cost: None,
            organizer_id: None,
            kind: None,
            join_type: None,
            city: None,
            image: None,
            event_type: None,
        }
    }
}

/// Updatable event fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub participant_count: Option<i32>,
    pub max_participants: Option<i32>,
    pub cost: Option<String>,
    pub organizer_id: Option<i64>,
    pub kind: Option<String>,
    pub join_type: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}
