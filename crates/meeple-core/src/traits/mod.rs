//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CafeRepository, CommunityRepository, CrudRepository, EventRepository, GameRepository,
    RepoResult, UserRepository, DEFAULT_MIN_RATING, DEFAULT_TRENDING_LIMIT,
};
