//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use meeple_core::entities::User;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
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

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            phone_number: model.phone_number,
            city: model.city,
            gender: model.gender,
            external_account_ref: model.external_account_ref,
            age: model.age,
            joined_date: model.joined_date,
            profile_image: model.profile_image,
        }
    }
}
