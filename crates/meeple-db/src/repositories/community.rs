//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::{Community, CommunityPatch, NewCommunity};
use meeple_core::error::DomainError;
use meeple_core::traits::{CommunityRepository, CrudRepository, RepoResult};

use crate::models::CommunityModel;

use super::error::{community_not_found, map_db_error, map_fk_violation};

fn missing_administrator() -> DomainError {
    DomainError::ValidationError("administrator_id references a missing user".to_string())
}

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgCommunityRepository {
    type Entity = Community;
    type Draft = NewCommunity;
    type Patch = CommunityPatch;

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Community>> {
        let results = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, city, member_count, administrator_id,
                   main_area, created_at, image
            FROM communities
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Community::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, city, member_count, administrator_id,
                   main_area, created_at, image
            FROM communities
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewCommunity) -> RepoResult<Community> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            INSERT INTO communities (name, description, city, member_count,
                                     administrator_id, main_area, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, city, member_count, administrator_id,
                      main_area, created_at, image
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.city)
        .bind(draft.member_count)
        .bind(draft.administrator_id)
        .bind(&draft.main_area)
        .bind(&draft.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, missing_administrator))?;

        Ok(Community::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: CommunityPatch) -> RepoResult<Community> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            UPDATE communities
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                city = COALESCE($4, city),
                member_count = COALESCE($5, member_count),
                administrator_id = COALESCE($6, administrator_id),
                main_area = COALESCE($7, main_area),
                image = COALESCE($8, image)
            WHERE id = $1
            RETURNING id, name, description, city, member_count, administrator_id,
                      main_area, created_at, image
            ",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.city)
        .bind(patch.member_count)
        .bind(patch.administrator_id)
        .bind(patch.main_area)
        .bind(patch.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, missing_administrator))?;

        result
            .map(Community::from)
            .ok_or_else(|| community_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM communities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

impl CommunityRepository for PgCommunityRepository {}
