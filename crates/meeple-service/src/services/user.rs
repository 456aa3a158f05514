//! User service
//!
//! Handles user listing, lookup, registration and profile updates.

use meeple_core::entities::{NewUser, UserPatch};
use meeple_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreateUserRequest, CreatedResponse, MessageResponse, UpdateUserRequest, UserResponse,
    UserSummaryResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users as summaries
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserSummaryResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserSummaryResponse::from).collect())
    }

    /// Get user by ID (full record)
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(&user))
    }

    /// Register a new user
    ///
    /// Checks for a duplicate email up front for a friendly failure; the
    /// unique constraint on the table closes the race either way.
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<CreatedResponse> {
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let mut draft = NewUser::new(request.name, request.email);
        draft.phone_number = request.phone_number;
        draft.city = request.city;
        draft.gender = request.gender;
        draft.external_account_ref = request.external_account_ref;
        draft.age = request.age;
        draft.profile_image = request.profile_image;

        let user = self.ctx.user_repo().create(draft).await?;
        info!(user_id = user.id, "User created");

        Ok(CreatedResponse::new("User created successfully", user.id))
    }

    /// Update a user (partial)
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<MessageResponse> {
        let patch = UserPatch {
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            city: request.city,
            gender: request.gender,
            external_account_ref: request.external_account_ref,
            age: request.age,
            profile_image: request.profile_image,
        };

        self.ctx.user_repo().update(user_id, patch).await?;
        info!(user_id, "User updated");

        Ok(MessageResponse::new("User updated successfully"))
    }
}
