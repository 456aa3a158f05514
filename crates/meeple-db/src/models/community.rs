//! Community database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use meeple_core::entities::Community;

/// Database model for the communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub member_count: i32,
    pub administrator_id: Option<i64>,
    pub main_area: Option<String>,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: model.id,
            name: model.name,
            description: model.description,
            city: model.city,
            member_count: model.member_count,
            administrator_id: model.administrator_id,
            main_area: model.main_area,
            created_at: model.created_at,
            image: model.image,
        }
    }
}
