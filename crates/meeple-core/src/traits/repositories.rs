//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every entity gets the same generic CRUD
//! contract; entity-specific queries live in small subtraits that pin
//! the associated types, which keeps `Arc<dyn UserRepository>` and
//! friends object-safe.

use async_trait::async_trait;

use crate::entities::{
    Cafe, CafePatch, Community, CommunityPatch, Event, EventPatch, Game, GamePatch, NewCafe,
    NewCommunity, NewEvent, NewGame, NewUser, User, UserPatch,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Row cap applied to trending-game queries when the caller does not
/// pass an explicit limit
pub const DEFAULT_TRENDING_LIMIT: i64 = 10;

/// Conventional rating threshold (inclusive) for "highly rated" queries
pub const DEFAULT_MIN_RATING: f64 = 4.0;

// ============================================================================
// Generic CRUD Repository
// ============================================================================

/// Uniform CRUD contract over one table.
///
/// Each call is a single round trip to the storage backend; there is no
/// caching and no batching.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// The stored record type
    type Entity: Send + 'static;
    /// Payload accepted by [`create`](Self::create)
    type Draft: Send + 'static;
    /// Partial-update payload accepted by [`update`](Self::update)
    type Patch: Send + 'static;

    /// Fetch every record, ordered by insertion (ascending id).
    /// An empty table yields an empty vector, not an error.
    async fn find_all(&self) -> RepoResult<Vec<Self::Entity>>;

    /// Fetch the single record with the given id, if any
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Self::Entity>>;

    /// Insert a new record and return it with its generated id
    async fn create(&self, draft: Self::Draft) -> RepoResult<Self::Entity>;

    /// Merge the supplied fields into the record with the given id and
    /// return the updated record. Fails with the entity's not-found
    /// error when the id does not exist.
    async fn update(&self, id: i64, patch: Self::Patch) -> RepoResult<Self::Entity>;

    /// Hard-delete the record with the given id. Returns whether a
    /// record was actually removed; deleting an absent id is a no-op,
    /// not an error.
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository:
    CrudRepository<Entity = User, Draft = NewUser, Patch = UserPatch>
{
    /// Find the user with the given email.
    ///
    /// At most one row may match; a second match is a
    /// [`DomainError::MultipleMatches`] failure, never a silent pick.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find the user with the given phone number, under the same
    /// single-match contract as [`find_by_email`](Self::find_by_email).
    /// Phone numbers carry no uniqueness constraint, so the multiple-
    /// match failure is reachable here.
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository:
    CrudRepository<Entity = Game, Draft = NewGame, Patch = GamePatch>
{
    /// Games whose category list contains the given category
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Game>>;

    /// Games ordered by likes, descending, capped at `limit` rows
    /// (conventionally [`DEFAULT_TRENDING_LIMIT`])
    async fn find_trending(&self, limit: i64) -> RepoResult<Vec<Game>>;

    /// Games rated at or above `min_rating`; unrated games never match
    async fn find_by_rating(&self, min_rating: f64) -> RepoResult<Vec<Game>>;
}

// ============================================================================
// Read-mostly Repositories
// ============================================================================

/// Community storage; no queries beyond the generic contract
pub trait CommunityRepository:
    CrudRepository<Entity = Community, Draft = NewCommunity, Patch = CommunityPatch>
{
}

/// Event storage; no queries beyond the generic contract
pub trait EventRepository:
    CrudRepository<Entity = Event, Draft = NewEvent, Patch = EventPatch>
{
}

/// Cafe storage; no queries beyond the generic contract
pub trait CafeRepository: CrudRepository<Entity = Cafe, Draft = NewCafe, Patch = CafePatch> {}
