//! Cafe database model

use sqlx::FromRow;

use meeple_core::entities::Cafe;

/// Database model for the cafes table
#[derive(Debug, Clone, FromRow)]
pub struct CafeModel {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub weekday_hours: Option<String>,
    pub weekend_hours: Option<String>,
    pub holiday_hours: Option<String>,
    pub average_budget: Option<String>,
    pub board_game_count: i32,
    pub event_count: i32,
    pub image: Option<String>,
}

impl From<CafeModel> for Cafe {
    fn from(model: CafeModel) -> Self {
        Cafe {
            id: model.id,
            name: model.name,
            location: model.location,
            address: model.address,
            weekday_hours: model.weekday_hours,
            weekend_hours: model.weekend_hours,
            holiday_hours: model.holiday_hours,
            average_budget: model.average_budget,
            board_game_count: model.board_game_count,
            event_count: model.event_count,
            image: model.image,
        }
    }
}
