//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod cafes;
pub mod communities;
pub mod events;
pub mod games;
pub mod health;
pub mod users;
