//! Game database model

use sqlx::FromRow;

use meeple_core::entities::Game;

/// Database model for the games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub age_recommendation: Option<String>,
    pub player_count: Option<String>,
    pub rating: Option<f64>,
    pub likes: i32,
    pub owners: i32,
    pub comments: i32,
    pub categories: Vec<String>,
}

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: model.id,
            name: model.name,
            image: model.image,
            description: model.description,
            publisher: model.publisher,
            age_recommendation: model.age_recommendation,
            player_count: model.player_count,
            rating: model.rating,
            likes: model.likes,
            owners: model.owners,
            comments: model.comments,
            categories: model.categories,
        }
    }
}
