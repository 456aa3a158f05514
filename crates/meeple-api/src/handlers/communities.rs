//! Community handlers
//!
//! Read-only endpoints for browsing communities.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::{CommunityResponse, CommunityService, CommunitySummaryResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all communities
///
/// GET /communities
pub async fn list_communities(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommunitySummaryResponse>>> {
    let service = CommunityService::new(state.service_context());
    let communities = service.list_communities().await?;
    Ok(Json(communities))
}

/// Get community by ID
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
) -> ApiResult<Json<CommunityResponse>> {
    let community_id = community_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid community_id format"))?;

    let service = CommunityService::new(state.service_context());
    let response = service.get_community(community_id).await?;
    Ok(Json(response))
}
