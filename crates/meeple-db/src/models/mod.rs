//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Each model carries its `From<Model>` conversion into the domain
//! entity defined in `meeple-core`.

mod cafe;
mod community;
mod event;
mod game;
mod user;

pub use cafe::CafeModel;
pub use community::CommunityModel;
pub use event::EventModel;
pub use game::GameModel;
pub use user::UserModel;
