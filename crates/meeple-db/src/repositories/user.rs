//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::{NewUser, User, UserPatch};
use meeple_core::error::DomainError;
use meeple_core::traits::{CrudRepository, RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch at most two rows for a lookup that must be unique; a second
    /// row turns into a MultipleMatches failure instead of a silent pick
    async fn find_unique_by(
        &self,
        sql: &str,
        value: &str,
        criterion: &'static str,
    ) -> RepoResult<Option<User>> {
        let rows = sqlx::query_as::<_, UserModel>(sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        if rows.len() > 1 {
            return Err(DomainError::MultipleMatches {
                entity: "user",
                criterion,
            });
        }

        Ok(rows.into_iter().next().map(User::from))
    }
}

#[async_trait]
impl CrudRepository for PgUserRepository {
    type Entity = User;
    type Draft = NewUser;
    type Patch = UserPatch;

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone_number, city, gender, external_account_ref,
                   age, joined_date, profile_image
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone_number, city, gender, external_account_ref,
                   age, joined_date, profile_image
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: NewUser) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, phone_number, city, gender,
                               external_account_ref, age, profile_image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, email, phone_number, city, gender, external_account_ref,
                      age, joined_date, profile_image
            ",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone_number)
        .bind(&draft.city)
        .bind(&draft.gender)
        .bind(&draft.external_account_ref)
        .bind(draft.age)
        .bind(&draft.profile_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(User::from(result))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: UserPatch) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone_number = COALESCE($4, phone_number),
                city = COALESCE($5, city),
                gender = COALESCE($6, gender),
                external_account_ref = COALESCE($7, external_account_ref),
                age = COALESCE($8, age),
                profile_image = COALESCE($9, profile_image)
            WHERE id = $1
            RETURNING id, name, email, phone_number, city, gender, external_account_ref,
                      age, joined_date, profile_image
            ",
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.phone_number)
        .bind(patch.city)
        .bind(patch.gender)
        .bind(patch.external_account_ref)
        .bind(patch.age)
        .bind(patch.profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_unique_by(
            r"
            SELECT id, name, email, phone_number, city, gender, external_account_ref,
                   age, joined_date, profile_image
            FROM users
            WHERE email = $1
            LIMIT 2
            ",
            email,
            "email",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        self.find_unique_by(
            r"
            SELECT id, name, email, phone_number, city, gender, external_account_ref,
                   age, joined_date, profile_image
            FROM users
            WHERE phone_number = $1
            LIMIT 2
            ",
            phone,
            "phone number",
        )
        .await
    }
}
