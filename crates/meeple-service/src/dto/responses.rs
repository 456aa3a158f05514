//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are JSON
//! numbers and timestamps serialize as RFC 3339 strings. Optional fields
//! serialize as explicit nulls so list and detail payloads always carry
//! their full key sets.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Confirmation message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation message response carrying the generated id
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User summary for list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}

/// Full user record
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub external_account_ref: Option<String>,
    pub age: Option<i32>,
    pub joined_date: DateTime<Utc>,
    pub profile_image: Option<String>,
}

// ============================================================================
// Game Responses
// ============================================================================

/// Full game record (the game list has no summary projection)
#[derive(Debug, Clone, Serialize)]
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

// ============================================================================
// Community Responses
// ============================================================================

/// Community summary for list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CommunitySummaryResponse {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub member_count: i32,
    pub main_area: Option<String>,
    pub image: Option<String>,
}

/// Full community record
#[derive(Debug, Clone, Serialize)]
pub struct CommunityResponse {
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

// ============================================================================
// Event Responses
// ============================================================================

/// Event summary for list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct EventSummaryResponse {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub status: String,
    pub participant_count: i32,
    pub max_participants: Option<i32>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

/// Full event record
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
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
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub join_type: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
}

// ============================================================================
// Cafe Responses
// ============================================================================

/// Cafe summary for list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CafeSummaryResponse {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub average_budget: Option<String>,
    pub board_game_count: i32,
    pub image: Option<String>,
}

/// Full cafe record
#[derive(Debug, Clone, Serialize)]
pub struct CafeResponse {
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

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
