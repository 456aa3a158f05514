//! Game handlers
//!
//! Endpoints for the board game catalogue.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::{CreateGameRequest, GameResponse, GameService, UpdateGameRequest};

use crate::extractors::{GameFilter, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List games, optionally filtered by category, trending, or rating
///
/// GET /games
pub async fn list_games(
    State(state): State<AppState>,
    GameFilter(query): GameFilter,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let games = service.list_games(query).await?;
    Ok(Json(games))
}

/// Get game by ID
///
/// GET /games/{game_id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<Json<GameResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = GameService::new(state.service_context());
    let response = service.get_game(game_id).await?;
    Ok(Json(response))
}

/// Add a game to the catalogue
///
/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGameRequest>,
) -> ApiResult<Created<Json<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.create_game(request).await?;
    Ok(Created(Json(response)))
}

/// Update game details
///
/// PUT /games/{game_id}
pub async fn update_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGameRequest>,
) -> ApiResult<Json<GameResponse>> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = GameService::new(state.service_context());
    let response = service.update_game(game_id, request).await?;
    Ok(Json(response))
}

/// Remove a game from the catalogue
///
/// DELETE /games/{game_id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<NoContent> {
    let game_id = game_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid game_id format"))?;

    let service = GameService::new(state.service_context());
    service.delete_game(game_id).await?;
    Ok(NoContent)
}
