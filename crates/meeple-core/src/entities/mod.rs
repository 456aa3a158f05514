//! Domain entities - core business objects
//!
//! Each entity comes with a draft type (`New*`) used for creation and a
//! patch type (`*Patch`) listing exactly the fields a partial update may
//! touch. Ids and creation timestamps are assigned by the database and
//! never appear in drafts or patches.

mod cafe;
mod community;
mod event;
mod game;
mod user;

pub use cafe::{Cafe, CafePatch, NewCafe};
pub use community::{Community, CommunityPatch, NewCommunity};
pub use event::{Event, EventPatch, NewEvent, DEFAULT_EVENT_STATUS};
pub use game::{Game, GamePatch, NewGame};
pub use user::{NewUser, User, UserPatch};
