//! Cafe entity - a board-game cafe venue

/// Cafe entity representing a board-game cafe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub weekday_hours: Option<String>,
    pub weekend_hours: Option<String>,
    pub holiday_hours: Option<String>,
    /// Typical spend per visit, free-form (e.g. "10000-15000 KRW")
    pub average_budget: Option<String>,
    pub board_game_count: i32,
    pub event_count: i32,
    pub image: Option<String>,
}

/// Draft for registering a cafe; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewCafe {
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

impl NewCafe {
    /// Create a draft with the required fields; counters start at zero
    pub fn new(name: String) -> Self {
        Self {
            name,
            location: None,
            address: None,
            weekday_hours: None,
            weekend_hours: None,
            holiday_hours: None,
            average_budget: None,
            board_game_count: 0,
            event_count: 0,
            image: None,
        }
    }
}

/// Updatable cafe fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct CafePatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub weekday_hours: Option<String>,
    pub weekend_hours: Option<String>,
    pub holiday_hours: Option<String>,
    pub average_budget: Option<String>,
    pub board_game_count: Option<i32>,
    pub event_count: Option<i32>,
    pub image: Option<String>,
}
