//! User entity - a registered member of the platform

use chrono::{DateTime, Utc};

/// User entity representing a registered platform member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub external_account_ref: Option<String>,
    pub age: Option<i32>,
    pub joined_date: DateTime<Utc>,
    pub profile_image: Option<String>,
}

/// Draft for creating a user; the id and `joined_date` are assigned by
/// the database
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub external_account_ref: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}

impl NewUser {
    /// Create a draft with the required fields
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            phone_number: None,
            city: None,
            gender: None,
            external_account_ref: None,
            age: None,
            profile_image: None,
        }
    }
}

/// Updatable user fields; `None` leaves the stored value untouched.
/// The id and `joined_date` are immutable and deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub external_account_ref: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}
