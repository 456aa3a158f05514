//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use meeple_core::entities::Event;

/// Database model for the events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
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
    /// The column is named `type`, which is a Rust keyword
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub join_type: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            name: model.name,
            description: model.description,
            date: model.date,
            location: model.location,
            address: model.address,
            status: model.status,
            participant_count: model.participant_count,
            max_participants: model.max_participants,
            cost: model.cost,
            organizer_id: model.organizer_id,
            kind: model.kind,
            join_type: model.join_type,
            city: model.city,
            image: model.image,
            event_type: model.event_type,
        }
    }
}
