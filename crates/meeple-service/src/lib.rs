//! # meeple-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CafeResponse, CafeSummaryResponse, CommunityResponse, CommunitySummaryResponse,
    CreateGameRequest, CreateUserRequest, CreatedResponse, EventResponse, EventSummaryResponse,
    GameListQuery, GameResponse, HealthChecks, HealthResponse, MessageResponse, ReadinessResponse,
    UpdateGameRequest, UpdateUserRequest, UserResponse, UserSummaryResponse,
};
pub use services::{
    CafeService, CommunityService, EventService, GameService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
