//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod cafe;
pub mod community;
pub mod context;
pub mod error;
pub mod event;
pub mod game;
pub mod user;

// Re-export all services for convenience
pub use cafe::CafeService;
pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use game::GameService;
pub use user::UserService;
