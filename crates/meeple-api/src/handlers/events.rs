//! Event handlers
//!
//! Read-only endpoints for browsing meetups and tournaments.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::{EventResponse, EventService, EventSummaryResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all events
///
/// GET /events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventSummaryResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list_events().await?;
    Ok(Json(events))
}

/// Get event by ID
///
/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = EventService::new(state.service_context());
    let response = service.get_event(event_id).await?;
    Ok(Json(response))
}
