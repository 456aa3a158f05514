//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{cafes, communities, events, games, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API endpoints
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(game_routes())
        .merge(community_routes())
        .merge(event_routes())
        .merge(cafe_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games))
        .route("/games", post(games::create_game))
        .route("/games/:game_id", get(games::get_game))
        .route("/games/:game_id", put(games::update_game))
        .route("/games/:game_id", delete(games::delete_game))
}

/// Community routes
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/communities", get(communities::list_communities))
        .route("/communities/:community_id", get(communities::get_community))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events/:event_id", get(events::get_event))
}

/// Cafe routes
fn cafe_routes() -> Router<AppState> {
    Router::new()
        .route("/cafes", get(cafes::list_cafes))
        .route("/cafes/:cafe_id", get(cafes::get_cafe))
}
