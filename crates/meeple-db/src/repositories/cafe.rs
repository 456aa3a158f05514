//! PostgreSQL implementation of CafeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::{Cafe, CafePatch, NewCafe};
use meeple_core::traits::{CafeRepository, CrudRepository, RepoResult};

use crate::models::CafeModel;

use super::error::{cafe_not_found, map_db_error};

/// PostgreSQL implementation of CafeRepository
#[derive(Clone)]
pub struct PgCafeRepository {
    pool: PgPool,
}

impl PgCafeRepository {
    /// Create a new PgCafeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgCafeRepository {
    type Entity = Cafe;
    type Draft = NewCafe;
    type Patch = CafePatch;

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Cafe>> {
        let results = sqlx::query_as::<_, CafeModel>(
            r"
            SELECT id, name, location, address, weekday_hours, weekend_hours,
                   holiday_hours, average_budget, board_game_count, event_count, image
            FROM cafes
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Cafe::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cafe>> {
        let result = sqlx::query_as::<_, CafeModel>(
            r"
            SELECT id, name, location, address, weekday_hours, weekend_hours,
                   holiday_hours, average_budget, board_game_count, event_count, image
            FROM cafes
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Cafe::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewCafe) -> RepoResult<Cafe> {
        let result = sqlx::query_as::<_, CafeModel>(
            r"
            INSERT INTO cafes (name, location, address, weekday_hours, weekend_hours,
                               holiday_hours, average_budget, board_game_count,
                               event_count, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, location, address, weekday_hours, weekend_hours,
                      holiday_hours, average_budget, board_game_count, event_count, image
            ",
        )
        .bind(&draft.name)
        .bind(&draft.location)
        .bind(&draft.address)
        .bind(&draft.weekday_hours)
        .bind(&draft.weekend_hours)
        .bind(&draft.holiday_hours)
        .bind(&draft.average_budget)
        .bind(draft.board_game_count)
        .bind(draft.event_count)
        .bind(&draft.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Cafe::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: CafePatch) -> RepoResult<Cafe> {
        let result = sqlx::query_as::<_, CafeModel>(
            r"
            UPDATE cafes
            SET name = COALESCE($2, name),
                location = COALESCE($3, location),
                address = COALESCE($4, address),
                weekday_hours = COALESCE($5, weekday_hours),
                weekend_hours = COALESCE($6, weekend_hours),
                holiday_hours = COALESCE($7, holiday_hours),
                average_budget = COALESCE($8, average_budget),
                board_game_count = COALESCE($9, board_game_count),
                event_count = COALESCE($10, event_count),
                image = COALESCE($11, image)
            WHERE id = $1
            RETURNING id, name, location, address, weekday_hours, weekend_hours,
                      holiday_hours, average_budget, board_game_count, event_count, image
            ",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.location)
        .bind(patch.address)
        .bind(patch.weekday_hours)
        .bind(patch.weekend_hours)
        .bind(patch.holiday_hours)
        .bind(patch.average_budget)
        .bind(patch.board_game_count)
        .bind(patch.event_count)
        .bind(patch.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Cafe::from).ok_or_else(|| cafe_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM cafes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

impl CafeRepository for PgCafeRepository {}
