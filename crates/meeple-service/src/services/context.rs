//! Service context - dependency container for services
//!
//! Holds the database pool and all repositories needed by services.

use std::sync::Arc;

use meeple_core::traits::{
    CafeRepository, CommunityRepository, EventRepository, GameRepository, UserRepository,
};
use meeple_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database pool (for health checks)
/// - One repository per entity
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    game_repo: Arc<dyn GameRepository>,
    community_repo: Arc<dyn CommunityRepository>,
    event_repo: Arc<dyn EventRepository>,
    cafe_repo: Arc<dyn CafeRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        game_repo: Arc<dyn GameRepository>,
        community_repo: Arc<dyn CommunityRepository>,
        event_repo: Arc<dyn EventRepository>,
        cafe_repo: Arc<dyn CafeRepository>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            game_repo,
            community_repo,
            event_repo,
            cafe_repo,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the community repository
    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the cafe repository
    pub fn cafe_repo(&self) -> &dyn CafeRepository {
        self.cafe_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    game_repo: Option<Arc<dyn GameRepository>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    cafe_repo: Option<Arc<dyn CafeRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            game_repo: None,
            community_repo: None,
            event_repo: None,
            cafe_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn cafe_repo(mut self, repo: Arc<dyn CafeRepository>) -> Self {
        self.cafe_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.game_repo
                .ok_or_else(|| super::error::ServiceError::validation("game_repo is required"))?,
            self.community_repo.ok_or_else(|| {
                super::error::ServiceError::validation("community_repo is required")
            })?,
            self.event_repo
                .ok_or_else(|| super::error::ServiceError::validation("event_repo is required"))?,
            self.cafe_repo
                .ok_or_else(|| super::error::ServiceError::validation("cafe_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
