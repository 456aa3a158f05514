//! Error handling utilities for repositories

use meeple_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign-key violation (a reference to a missing row) and
/// return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "game not found" error
pub fn game_not_found(id: i64) -> DomainError {
    DomainError::GameNotFound(id)
}

/// Create a "community not found" error
pub fn community_not_found(id: i64) -> DomainError {
    DomainError::CommunityNotFound(id)
}

/// Create an "event not found" error
pub fn event_not_found(id: i64) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "cafe not found" error
pub fn cafe_not_found(id: i64) -> DomainError {
    DomainError::CafeNotFound(id)
}
