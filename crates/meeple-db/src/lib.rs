//! # meeple-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `meeple-core`. It handles:
//!
//! - Connection pool management
//! - Embedded schema migrations
//! - Database models with SQLx `FromRow` derives and their entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeple_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//! use meeple_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, health_check, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCafeRepository, PgCommunityRepository, PgEventRepository, PgGameRepository,
    PgUserRepository,
};
