//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use meeple_core::entities::{Cafe, Community, Event, Game, User};

use super::responses::{
    CafeResponse, CafeSummaryResponse, CommunityResponse, CommunitySummaryResponse, EventResponse,
    EventSummaryResponse, GameResponse, UserResponse, UserSummaryResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            city: user.city.clone(),
            age: user.age,
            profile_image: user.profile_image.clone(),
        }
    }
}

impl From<User> for UserSummaryResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            city: user.city.clone(),
            gender: user.gender.clone(),
            external_account_ref: user.external_account_ref.clone(),
            age: user.age,
            joined_date: user.joined_date,
            profile_image: user.profile_image.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Game Mappers
// ============================================================================

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            image: game.image.clone(),
            description: game.description.clone(),
            publisher: game.publisher.clone(),
            age_recommendation: game.age_recommendation.clone(),
            player_count: game.player_count.clone(),
            rating: game.rating,
            likes: game.likes,
            owners: game.owners,
            comments: game.comments,
            categories: game.categories.clone(),
        }
    }
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

// ============================================================================
// Community Mappers
// ============================================================================

impl From<&Community> for CommunitySummaryResponse {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id,
            name: community.name.clone(),
            city: community.city.clone(),
            member_count: community.member_count,
            main_area: community.main_area.clone(),
            image: community.image.clone(),
        }
    }
}

impl From<Community> for CommunitySummaryResponse {
    fn from(community: Community) -> Self {
        Self::from(&community)
    }
}

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id,
            name: community.name.clone(),
            description: community.description.clone(),
            city: community.city.clone(),
            member_count: community.member_count,
            administrator_id: community.administrator_id,
            main_area: community.main_area.clone(),
            created_at: community.created_at,
            image: community.image.clone(),
        }
    }
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        Self::from(&community)
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventSummaryResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date,
            location: event.location.clone(),
            status: event.status.clone(),
            participant_count: event.participant_count,
            max_participants: event.max_participants,
            city: event.city.clone(),
            image: event.image.clone(),
            event_type: event.event_type.clone(),
        }
    }
}

impl From<Event> for EventSummaryResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            address: event.address.clone(),
            status: event.status.clone(),
            participant_count: event.participant_count,
            max_participants: event.max_participants,
            cost: event.cost.clone(),
            organizer_id: event.organizer_id,
            kind: event.kind.clone(),
            join_type: event.join_type.clone(),
            city: event.city.clone(),
            image: event.image.clone(),
            event_type: event.event_type.clone(),
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

// ============================================================================
// Cafe Mappers
// ============================================================================

impl From<&Cafe> for CafeSummaryResponse {
    fn from(cafe: &Cafe) -> Self {
        Self {
            id: cafe.id,
            name: cafe.name.clone(),
            location: cafe.location.clone(),
            average_budget: cafe.average_budget.clone(),
            board_game_count: cafe.board_game_count,
            image: cafe.image.clone(),
        }
    }
}

impl From<Cafe> for CafeSummaryResponse {
    fn from(cafe: Cafe) -> Self {
        Self::from(&cafe)
    }
}

impl From<&Cafe> for CafeResponse {
    fn from(cafe: &Cafe) -> Self {
        Self {
            id: cafe.id,
            name: cafe.name.clone(),
            location: cafe.location.clone(),
            address: cafe.address.clone(),
            weekday_hours: cafe.weekday_hours.clone(),
            weekend_hours: cafe.weekend_hours.clone(),
            holiday_hours: cafe.holiday_hours.clone(),
            average_budget: cafe.average_budget.clone(),
            board_game_count: cafe.board_game_count,
            event_count: cafe.event_count,
            image: cafe.image.clone(),
        }
    }
}

impl From<Cafe> for CafeResponse {
    fn from(cafe: Cafe) -> Self {
        Self::from(&cafe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone_number: Some("010-1234".to_string()),
            city: Some("Seoul".to_string()),
            gender: None,
            external_account_ref: None,
            age: Some(28),
            joined_date: Utc::now(),
            profile_image: None,
        }
    }

    #[test]
    fn test_user_summary_is_subset_of_detail() {
        let user = sample_user();
        let summary = serde_json::to_value(UserSummaryResponse::from(&user)).unwrap();
        let detail = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_summary_subset(&summary, &detail);
    }

    #[test]
    fn test_event_summary_is_subset_of_detail() {
        let event = Event {
            id: 5,
            name: "Meetup".to_string(),
            description: None,
            date: Utc::now(),
            location: None,
            address: None,
            status: "recruiting".to_string(),
            participant_count: 0,
            max_participants: None,
            cost: None,
            organizer_id: None,
            kind: None,
            join_type: None,
            city: None,
            image: None,
            event_type: None,
        };

        let summary = serde_json::to_value(EventSummaryResponse::from(&event)).unwrap();
        let detail = serde_json::to_value(EventResponse::from(&event)).unwrap();

        assert_summary_subset(&summary, &detail);
    }

    #[test]
    fn test_community_summary_is_subset_of_detail() {
        let community = Community {
            id: 3,
            name: "Seoul Meeples".to_string(),
            description: None,
            city: Some("Seoul".to_string()),
            member_count: 12,
            administrator_id: None,
            main_area: None,
            created_at: Utc::now(),
            image: None,
        };

        let summary = serde_json::to_value(CommunitySummaryResponse::from(&community)).unwrap();
        let detail = serde_json::to_value(CommunityResponse::from(&community)).unwrap();

        assert_summary_subset(&summary, &detail);
    }

    #[test]
    fn test_cafe_summary_is_subset_of_detail() {
        let cafe = Cafe {
            id: 4,
            name: "Dice Corner".to_string(),
            location: Some("Hongdae".to_string()),
            address: None,
            weekday_hours: None,
            weekend_hours: None,
            holiday_hours: None,
            average_budget: None,
            board_game_count: 80,
            event_count: 2,
            image: None,
        };

        let summary = serde_json::to_value(CafeSummaryResponse::from(&cafe)).unwrap();
        let detail = serde_json::to_value(CafeResponse::from(&cafe)).unwrap();

        assert_summary_subset(&summary, &detail);
    }

    fn assert_summary_subset(summary: &serde_json::Value, detail: &serde_json::Value) {
        let summary_keys = summary.as_object().unwrap();
        let detail_keys = detail.as_object().unwrap();
        for key in summary_keys.keys() {
            assert!(detail_keys.contains_key(key), "missing key: {key}");
        }
        assert!(summary_keys.len() < detail_keys.len());
    }
}
