//! Community service
//!
//! Read-only surface over local player groups.

use meeple_core::error::DomainError;
use tracing::instrument;

use crate::dto::{CommunityResponse, CommunitySummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all communities as summaries
    #[instrument(skip(self))]
    pub async fn list_communities(&self) -> ServiceResult<Vec<CommunitySummaryResponse>> {
        let communities = self.ctx.community_repo().find_all().await?;
        Ok(communities
            .iter()
            .map(CommunitySummaryResponse::from)
            .collect())
    }

    /// Get community by ID (full record)
    #[instrument(skip(self))]
    pub async fn get_community(&self, community_id: i64) -> ServiceResult<CommunityResponse> {
        let community = self
            .ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or(DomainError::CommunityNotFound(community_id))?;

        Ok(CommunityResponse::from(&community))
    }
}
