//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::{Game, GamePatch, NewGame};
use meeple_core::traits::{CrudRepository, GameRepository, RepoResult};

use crate::models::GameModel;

use super::error::{game_not_found, map_db_error};

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgGameRepository {
    type Entity = Game;
    type Draft = NewGame;
    type Patch = GamePatch;

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, name, image, description, publisher, age_recommendation,
                   player_count, rating, likes, owners, comments, categories
            FROM games
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, name, image, description, publisher, age_recommendation,
                   player_count, rating, likes, owners, comments, categories
            FROM games
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewGame) -> RepoResult<Game> {
        let result = sqlx::query_as::<_, GameModel>(
            r"
            INSERT INTO games (name, image, description, publisher, age_recommendation,
                               player_count, rating, likes, owners, comments, categories)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, image, description, publisher, age_recommendation,
                      player_count, rating, likes, owners, comments, categories
            ",
        )
        .bind(&draft.name)
        .bind(&draft.image)
        .bind(&draft.description)
        .bind(&draft.publisher)
        .bind(&draft.age_recommendation)
        .bind(&draft.player_count)
        .bind(draft.rating)
        .bind(draft.likes)
        .bind(draft.owners)
        .bind(draft.comments)
        .bind(&draft.categories)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Game::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: GamePatch) -> RepoResult<Game> {
        let result = sqlx::query_as::<_, GameModel>(
            r"
            UPDATE games
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                description = COALESCE($4, description),
                publisher = COALESCE($5, publisher),
                age_recommendation = COALESCE($6, age_recommendation),
                player_count = COALESCE($7, player_count),
                rating = COALESCE($8, rating),
                likes = COALESCE($9, likes),
                owners = COALESCE($10, owners),
                comments = COALESCE($11, comments),
                categories = COALESCE($12, categories)
            WHERE id = $1
            RETURNING id, name, image, description, publisher, age_recommendation,
                      player_count, rating, likes, owners, comments, categories
            ",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.image)
        .bind(patch.description)
        .bind(patch.publisher)
        .bind(patch.age_recommendation)
        .bind(patch.player_count)
        .bind(patch.rating)
        .bind(patch.likes)
        .bind(patch.owners)
        .bind(patch.comments)
        .bind(patch.categories)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Game::from).ok_or_else(|| game_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, name, image, description, publisher, age_recommendation,
                   player_count, rating, likes, owners, comments, categories
            FROM games
            WHERE $1 = ANY(categories)
            ORDER BY id
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_trending(&self, limit: i64) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, name, image, description, publisher, age_recommendation,
                   player_count, rating, likes, owners, comments, categories
            FROM games
            ORDER BY likes DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_rating(&self, min_rating: f64) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, name, image, description, publisher, age_recommendation,
                   player_count, rating, likes, owners, comments, categories
            FROM games
            WHERE rating >= $1
            ORDER BY id
            ",
        )
        .bind(min_rating)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }
}
