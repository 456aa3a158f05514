//! Game entity - a board game in the catalogue

/// Game entity representing one board game
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    /// Recommended minimum age, free-form (e.g. "8+")
    pub age_recommendation: Option<String>,
    /// Supported player range, free-form (e.g. "2-4")
    pub player_count: Option<String>,
    pub rating: Option<f64>,
    pub likes: i32,
    pub owners: i32,
    pub comments: i32,
    pub categories: Vec<String>,
}

/// Draft for adding a game to the catalogue
#[derive(Debug, Clone)]
pub struct NewGame {
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

impl NewGame {
    /// Create a draft with the required fields; counters start at zero
    pub fn new(name: String) -> Self {
        Self {
            name,
            image: None,
            description: None,
            publisher: None,
            age_recommendation: None,
            player_count: None,
            rating: None,
            likes: 0,
            owners: 0,
            comments: 0,
            categories: Vec::new(),
        }
    }
}

/// Updatable game fields; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct GamePatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub age_recommendation: Option<String>,
    pub player_count: Option<String>,
    pub rating: Option<f64>,
    pub likes: Option<i32>,
    pub owners: Option<i32>,
    pub comments: Option<i32>,
    pub categories: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_counters_start_at_zero() {
        let draft = NewGame::new("Catan".to_string());
        assert_eq!(draft.likes, 0);
        assert_eq!(draft.owners, 0);
        assert_eq!(draft.comments, 0);
        assert!(draft.categories.is_empty());
        assert!(draft.rating.is_none());
    }
}
