//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// An id far beyond anything the tests insert
const MISSING_ID: i64 = 999_999_999;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(created.id > 0);
    assert!(!created.message.is_empty());

    // The full record is readable straight away
    let response = server.get(&format!("/api/users/{}", created.id)).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, request.name);
    assert_eq!(user.email, request.email);
    assert_eq!(user.city, request.city);
    assert_eq!(user.phone_number, None);
    assert!(!user.joined_date.is_empty());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    // First registration
    server.post("/api/users", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/users", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_create_user_rejects_empty_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateUserRequest::unique();
    request.name = String::new();

    let response = server.post("/api/users", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_rejects_missing_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "name": "No Email" });

    let response = server.post("/api/users", &body).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/users").await.unwrap();
    let users: Vec<UserSummary> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(users.iter().any(|u| u.id == created.id));
}

#[tokio::test]
async fn test_get_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&format!("/api/users/{MISSING_ID}")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/not-a-number").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Patch only the name
    let update = UpdateUserRequest {
        name: Some("Renamed User".to_string()),
        ..Default::default()
    };
    let response = server
        .put(&format!("/api/users/{}", created.id), &update)
        .await
        .unwrap();
    let confirmation: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!confirmation.message.is_empty());

    // Unpatched fields are preserved
    let response = server.get(&format!("/api/users/{}", created.id)).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.name, "Renamed User");
    assert_eq!(user.email, request.email);
    assert_eq!(user.city, request.city);
}

#[tokio::test]
async fn test_update_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let update = UpdateUserRequest {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };

    let response = server
        .put(&format!("/api/users/{MISSING_ID}"), &update)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user_not_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Users cannot be deleted over the API
    let response = server.delete(&format!("/api/users/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::METHOD_NOT_ALLOWED)
        .await
        .unwrap();
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_create_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGameRequest::unique();

    let response = server.post("/api/games", &request).await.unwrap();
    let game: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(game.id > 0);
    assert_eq!(game.name, request.name);
    assert_eq!(game.publisher, request.publisher);
    assert_eq!(game.rating, None);
    assert_eq!(game.likes, 0);
    assert_eq!(game.owners, 0);
    assert_eq!(game.comments, 0);
    assert!(game.categories.is_empty());
}

#[tokio::test]
async fn test_get_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGameRequest::unique();

    let response = server.post("/api/games", &request).await.unwrap();
    let created: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/games/{}", created.id)).await.unwrap();
    let game: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(game.id, created.id);
    assert_eq!(game.name, request.name);
}

#[tokio::test]
async fn test_get_game_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/games/not-a-number").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_update_game_merges_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGameRequest::unique();

    let response = server.post("/api/games", &request).await.unwrap();
    let created: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Patch only the rating
    let update = UpdateGameRequest {
        rating: Some(4.2),
        ..Default::default()
    };
    let response = server
        .put(&format!("/api/games/{}", created.id), &update)
        .await
        .unwrap();
    let game: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(game.rating, Some(4.2));
    assert_eq!(game.name, request.name);
    assert_eq!(game.publisher, request.publisher);
}

#[tokio::test]
async fn test_delete_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateGameRequest::unique();

    let response = server.post("/api/games", &request).await.unwrap();
    let created: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Delete game
    let response = server.delete(&format!("/api/games/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server.get(&format!("/api/games/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_game_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete(&format!("/api/games/{MISSING_ID}")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "GAME_NOT_FOUND");
}

#[tokio::test]
async fn test_list_games_by_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = format!("category-{}", unique_suffix());
    let request = CreateGameRequest::with_category(&category);

    let response = server.post("/api/games", &request).await.unwrap();
    let created: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/games?category={category}"))
        .await
        .unwrap();
    let games: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(games.iter().any(|g| g.id == created.id));
    assert!(games.iter().all(|g| g.categories.contains(&category)));
}

#[tokio::test]
async fn test_list_games_trending() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Nothing can out-rank a game with the maximum like count
    let request = CreateGameRequest::with_likes(i32::MAX);
    let response = server.post("/api/games", &request).await.unwrap();
    let popular: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/games?trending=true").await.unwrap();
    let games: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!games.is_empty());
    assert!(games.len() <= 10);
    assert!(games.windows(2).all(|pair| pair[0].likes >= pair[1].likes));
    assert_eq!(games[0].likes, i32::MAX);

    // Clean up
    server.delete(&format!("/api/games/{}", popular.id)).await.unwrap();
}

#[tokio::test]
async fn test_list_games_min_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/games", &CreateGameRequest::with_rating(4.8))
        .await
        .unwrap();
    let highly_rated: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/games", &CreateGameRequest::with_rating(2.1))
        .await
        .unwrap();
    let poorly_rated: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/games?min_rating=4.5").await.unwrap();
    let games: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(games.iter().any(|g| g.id == highly_rated.id));
    assert!(games.iter().all(|g| g.id != poorly_rated.id));
}

#[tokio::test]
async fn test_list_games_category_overrides_trending() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let category = format!("category-{}", unique_suffix());

    // One game in the category with no likes, one wildly popular game outside it
    let response = server
        .post("/api/games", &CreateGameRequest::with_category(&category))
        .await
        .unwrap();
    let niche: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/games", &CreateGameRequest::with_likes(i32::MAX))
        .await
        .unwrap();
    let popular: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/games?category={category}&trending=true"))
        .await
        .unwrap();
    let games: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(games.iter().any(|g| g.id == niche.id));
    assert!(games.iter().all(|g| g.id != popular.id));

    // Clean up
    server.delete(&format!("/api/games/{}", niche.id)).await.unwrap();
    server.delete(&format!("/api/games/{}", popular.id)).await.unwrap();
}

#[tokio::test]
async fn test_list_games_malformed_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/games?min_rating=very-high").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_QUERY_PARAMETER");
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_list_communities() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/communities").await.unwrap();
    let _communities: Vec<CommunitySummary> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_community_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/communities/{MISSING_ID}"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "COMMUNITY_NOT_FOUND");
}

#[tokio::test]
async fn test_get_community_malformed_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/communities/not-a-number").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_list_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/events").await.unwrap();
    let _events: Vec<EventSummary> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_event_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&format!("/api/events/{MISSING_ID}")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "EVENT_NOT_FOUND");
}

// ============================================================================
// Cafe Tests
// ============================================================================

#[tokio::test]
async fn test_list_cafes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/cafes").await.unwrap();
    let _cafes: Vec<CafeSummary> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_cafe_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&format!("/api/cafes/{MISSING_ID}")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "CAFE_NOT_FOUND");
}
