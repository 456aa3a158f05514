//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// User creation request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub age: Option<i32>,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            phone_number: None,
            city: Some("Seoul".to_string()),
            age: Some(29),
        }
    }
}

/// Partial user update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<i32>,
}

/// Game creation request
#[derive(Debug, Serialize)]
pub struct CreateGameRequest {
    pub name: String,
    pub publisher: Option<String>,
    pub rating: Option<f64>,
    pub likes: Option<i32>,
    pub categories: Option<Vec<String>>,
}

impl CreateGameRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Game {suffix}"),
            publisher: Some("Test Publisher".to_string()),
            rating: None,
            likes: None,
            categories: None,
        }
    }

    pub fn with_category(category: &str) -> Self {
        let mut request = Self::unique();
        request.categories = Some(vec![category.to_string()]);
        request
    }

    pub fn with_rating(rating: f64) -> Self {
        let mut request = Self::unique();
        request.rating = Some(rating);
        request
    }

    pub fn with_likes(likes: i32) -> Self {
        let mut request = Self::unique();
        request.likes = Some(likes);
        request
    }
}

/// Partial game update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateGameRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

/// Creation confirmation response
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// Confirmation message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Full user record
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub external_account_ref: Option<String>,
    pub age: Option<i32>,
    pub joined_date: String,
    pub profile_image: Option<String>,
}

/// User summary from the list endpoint
#[derive(Debug, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}

/// Full game record
#[derive(Debug, Deserialize)]
pub struct GameResponse {
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

/// Community summary from the list endpoint
#[derive(Debug, Deserialize)]
pub struct CommunitySummary {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub member_count: i32,
    pub main_area: Option<String>,
    pub image: Option<String>,
}

/// Event summary from the list endpoint
#[derive(Debug, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: Option<String>,
    pub status: String,
    pub participant_count: i32,
    pub max_participants: Option<i32>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

/// Cafe summary from the list endpoint
#[derive(Debug, Deserialize)]
pub struct CafeSummary {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub average_budget: Option<String>,
    pub board_game_count: i32,
    pub image: Option<String>,
}

/// Error response envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
