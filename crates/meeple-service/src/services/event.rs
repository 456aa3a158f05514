//! Event service
//!
//! Read-only surface over scheduled meetups.

use meeple_core::error::DomainError;
use tracing::instrument;

use crate::dto::{EventResponse, EventSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all events as summaries
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventSummaryResponse>> {
        let events = self.ctx.event_repo().find_all().await?;
        Ok(events.iter().map(EventSummaryResponse::from).collect())
    }

    /// Get event by ID (full record)
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: i64) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        Ok(EventResponse::from(&event))
    }
}
