//! PostgreSQL implementation of EventRepository
//!
//! The `type` column is a reserved word in SQL and a keyword in Rust, so
//! it is quoted in queries and surfaces as `kind` on the model.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::{Event, EventPatch, NewEvent};
use meeple_core::error::DomainError;
use meeple_core::traits::{CrudRepository, EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error, map_fk_violation};

fn missing_organizer() -> DomainError {
    DomainError::ValidationError("organizer_id references a missing user".to_string())
}

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgEventRepository {
    type Entity = Event;
    type Draft = NewEvent;
    type Patch = EventPatch;

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, name, description, date, location, address, status,
                   participant_count, max_participants, cost, organizer_id,
                   "type", join_type, city, image, event_type
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, name, description, date, location, address, status,
                   participant_count, max_participants, cost, organizer_id,
                   "type", join_type, city, image, event_type
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewEvent) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            INSERT INTO events (name, description, date, location, address, status,
                                participant_count, max_participants, cost, organizer_id,
                                "type", join_type, city, image, event_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, name, description, date, location, address, status,
                      participant_count, max_participants, cost, organizer_id,
                      "type", join_type, city, image, event_type
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.date)
        .bind(&draft.location)
        .bind(&draft.address)
        .bind(&draft.status)
        .bind(draft.participant_count)
        .bind(draft.max_participants)
        .bind(&draft.cost)
        .bind(draft.organizer_id)
        .bind(&draft.kind)
        .bind(&draft.join_type)
        .bind(&draft.city)
        .bind(&draft.image)
        .bind(&draft.event_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, missing_organizer))?;

        Ok(Event::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: EventPatch) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                location = COALESCE($5, location),
                address = COALESCE($6, address),
                status = COALESCE($7, status),
                participant_count = COALESCE($8, participant_count),
                max_participants = COALESCE($9, max_participants),
                cost = COALESCE($10, cost),
                organizer_id = COALESCE($11, organizer_id),
                "type" = COALESCE($12, "type"),
                join_type = COALESCE($13, join_type),
                city = COALESCE($14, city),
                image = COALESCE($15, image),
                event_type = COALESCE($16, event_type)
            WHERE id = $1
            RETURNING id, name, description, date, location, address, status,
                      participant_count, max_participants, cost, organizer_id,
                      "type", join_type, city, image, event_type
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.date)
        .bind(patch.location)
        .bind(patch.address)
        .bind(patch.status)
        .bind(patch.participant_count)
        .bind(patch.max_participants)
        .bind(patch.cost)
        .bind(patch.organizer_id)
        .bind(patch.kind)
        .bind(patch.join_type)
        .bind(patch.city)
        .bind(patch.image)
        .bind(patch.event_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, missing_organizer))?;

        result.map(Event::from).ok_or_else(|| event_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

impl EventRepository for PgEventRepository {}
