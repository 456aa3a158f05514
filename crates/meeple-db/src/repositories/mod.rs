//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in meeple-core.
//! Every repository implements the generic CRUD contract; users and games
//! additionally implement their specialized query traits.

mod cafe;
mod community;
mod error;
mod event;
mod game;
mod user;

pub use cafe::PgCafeRepository;
pub use community::PgCommunityRepository;
pub use event::PgEventRepository;
pub use game::PgGameRepository;
pub use user::PgUserRepository;
