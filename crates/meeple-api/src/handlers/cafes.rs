//! Cafe handlers
//!
//! Read-only endpoints for browsing board game cafes.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::{CafeResponse, CafeService, CafeSummaryResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all cafes
///
/// GET /cafes
pub async fn list_cafes(State(state): State<AppState>) -> ApiResult<Json<Vec<CafeSummaryResponse>>> {
    let service = CafeService::new(state.service_context());
    let cafes = service.list_cafes().await?;
    Ok(Json(cafes))
}

/// Get cafe by ID
///
/// GET /cafes/{cafe_id}
pub async fn get_cafe(
    State(state): State<AppState>,
    Path(cafe_id): Path<String>,
) -> ApiResult<Json<CafeResponse>> {
    let cafe_id = cafe_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid cafe_id format"))?;

    let service = CafeService::new(state.service_context());
    let response = service.get_cafe(cafe_id).await?;
    Ok(Json(response))
}
