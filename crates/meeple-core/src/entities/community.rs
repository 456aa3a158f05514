//! Community entity - a local board-game group

use chrono::{DateTime, Utc};

/// Community entity representing a local player group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub member_count: i32,
    /// User who administers the community, if any
    pub administrator_id: Option<i64>,
    pub main_area: Option<String>,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

/// Draft for creating a community; the id and `created_at` are assigned
/// by the database
#[derive(Debug, Clone)]
pub struct NewCommunity {
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub member_count: i32,
    pub administrator_id: Option<i64>,
    pub main_area: Option<String>,
    pub image: Option<String>,
}

impl NewCommunity {
    /// Create a draft with the required fields; membership starts at zero
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            city: None,
            member_count: 0,
            administrator_id: None,
            main_area: None,
            image: None,
        }
    }
}

/// Updatable community fields; `None` leaves the stored value untouched.
/// The id and `created_at` are immutable and deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct CommunityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub member_count: Option<i32>,
    pub administrator_id: Option<i64>,
    pub main_area: Option<String>,
    pub image: Option<String>,
}
