//! # meeple-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Cafe, CafePatch, Community, CommunityPatch, Event, EventPatch, Game, GamePatch, NewCafe,
    NewCommunity, NewEvent, NewGame, NewUser, User, UserPatch, DEFAULT_EVENT_STATUS,
};
pub use error::DomainError;
pub use traits::{
    CafeRepository, CommunityRepository, CrudRepository, EventRepository, GameRepository,
    RepoResult, UserRepository, DEFAULT_MIN_RATING, DEFAULT_TRENDING_LIMIT,
};
