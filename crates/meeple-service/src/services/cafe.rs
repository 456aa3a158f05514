//! Cafe service
//!
//! Read-only surface over board-game cafe venues.

use meeple_core::error::DomainError;
use tracing::instrument;

use crate::dto::{CafeResponse, CafeSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cafe service
pub struct CafeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CafeService<'a> {
    /// Create a new CafeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all cafes as summaries
    #[instrument(skip(self))]
    pub async fn list_cafes(&self) -> ServiceResult<Vec<CafeSummaryResponse>> {
        let cafes = self.ctx.cafe_repo().find_all().await?;
        Ok(cafes.iter().map(CafeSummaryResponse::from).collect())
    }

    /// Get cafe by ID (full record)
    #[instrument(skip(self))]
    pub async fn get_cafe(&self, cafe_id: i64) -> ServiceResult<CafeResponse> {
        let cafe = self
            .ctx
            .cafe_repo()
            .find_by_id(cafe_id)
            .await?
            .ok_or(DomainError::CafeNotFound(cafe_id))?;

        Ok(CafeResponse::from(&cafe))
    }
}
