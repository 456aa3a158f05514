//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Unknown JSON keys are silently ignored; the field lists of
//! the update requests are the allow-lists of what a caller may change.
//! String limits mirror the column widths in the schema.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,

    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    /// Handle on an external board-game account, if linked
    #[validate(length(max = 100, message = "Account reference must be at most 100 characters"))]
    pub external_account_ref: Option<String>,

    pub age: Option<i32>,

    #[validate(length(max = 255, message = "Profile image must be at most 255 characters"))]
    pub profile_image: Option<String>,
}

/// Update user request (partial)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    #[validate(length(max = 100, message = "Account reference must be at most 100 characters"))]
    pub external_account_ref: Option<String>,

    pub age: Option<i32>,

    #[validate(length(max = 255, message = "Profile image must be at most 255 characters"))]
    pub profile_image: Option<String>,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Create game request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Image must be at most 255 characters"))]
    pub image: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Publisher must be at most 100 characters"))]
    pub publisher: Option<String>,

    /// Recommended minimum age, free-form (e.g. "8+")
    #[validate(length(max = 20, message = "Age recommendation must be at most 20 characters"))]
    pub age_recommendation: Option<String>,

    /// Supported player range, free-form (e.g. "2-4")
    #[validate(length(max = 20, message = "Player count must be at most 20 characters"))]
    pub player_count: Option<String>,

    pub rating: Option<f64>,

    pub likes: Option<i32>,

    pub owners: Option<i32>,

    pub comments: Option<i32>,

    pub categories: Option<Vec<String>>,
}

/// Update game request (partial)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateGameRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Image must be at most 255 characters"))]
    pub image: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Publisher must be at most 100 characters"))]
    pub publisher: Option<String>,

    #[validate(length(max = 20, message = "Age recommendation must be at most 20 characters"))]
    pub age_recommendation: Option<String>,

    #[validate(length(max = 20, message = "Player count must be at most 20 characters"))]
    pub player_count: Option<String>,

    pub rating: Option<f64>,

    pub likes: Option<i32>,

    pub owners: Option<i32>,

    pub comments: Option<i32>,

    pub categories: Option<Vec<String>>,
}

/// Query parameters for the game list endpoint
///
/// The filters are mutually exclusive; the first present one wins in the
/// order category, trending, min_rating.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GameListQuery {
    pub category: Option<String>,
    pub trending: Option<bool>,
    pub min_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_user_request_validation() {
        // Valid request
        let valid = CreateUserRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone_number: None,
            city: None,
            gender: None,
            external_account_ref: None,
            age: None,
            profile_image: None,
        };
        assert!(valid.validate().is_ok());

        // Invalid - empty name
        let empty_name = CreateUserRequest {
            name: "".to_string(),
            ..valid.clone()
        };
        assert!(empty_name.validate().is_err());

        // Invalid - bad email
        let bad_email = CreateUserRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        // Invalid - phone number too long
        let long_phone = CreateUserRequest {
            phone_number: Some("0".repeat(21)),
            ..valid
        };
        assert!(long_phone.validate().is_err());
    }

    #[test]
    fn test_update_user_request_allows_empty_body() {
        let empty = UpdateUserRequest::default();
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_create_game_request_validation() {
        let valid = CreateGameRequest {
            name: "Catan".to_string(),
            image: None,
            description: Some("Trade and build".to_string()),
            publisher: Some("Kosmos".to_string()),
            age_recommendation: Some("10+".to_string()),
            player_count: Some("3-4".to_string()),
            rating: Some(4.2),
            likes: None,
            owners: None,
            comments: None,
            categories: Some(vec!["strategy".to_string()]),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateGameRequest {
            name: "".to_string(),
            ..valid
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_game_list_query_ignores_unknown_fields() {
        let query: GameListQuery =
            serde_json::from_str(r#"{"trending": true, "sort": "asc"}"#).unwrap();
        assert_eq!(query.trending, Some(true));
        assert!(query.category.is_none());
        assert!(query.min_rating.is_none());
    }
}
