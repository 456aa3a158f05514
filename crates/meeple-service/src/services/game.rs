//! Game service
//!
//! Handles the game catalogue: listing with filters, lookup, creation,
//! updates and removal.

use meeple_core::entities::{GamePatch, NewGame};
use meeple_core::error::DomainError;
use meeple_core::traits::DEFAULT_TRENDING_LIMIT;
use tracing::{info, instrument};

use crate::dto::{CreateGameRequest, GameListQuery, GameResponse, UpdateGameRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List games, applying at most one filter
    ///
    /// Precedence: category, then trending, then min_rating. A literal
    /// `trending=false` falls through to the next filter.
    #[instrument(skip(self))]
    pub async fn list_games(&self, query: GameListQuery) -> ServiceResult<Vec<GameResponse>> {
        let games = if let Some(category) = query.category {
            self.ctx.game_repo().find_by_category(&category).await?
        } else if query.trending == Some(true) {
            self.ctx
                .game_repo()
                .find_trending(DEFAULT_TRENDING_LIMIT)
                .await?
        } else if let Some(min_rating) = query.min_rating {
            self.ctx.game_repo().find_by_rating(min_rating).await?
        } else {
            self.ctx.game_repo().find_all().await?
        };

        Ok(games.iter().map(GameResponse::from).collect())
    }

    /// Get game by ID
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: i64) -> ServiceResult<GameResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or(DomainError::GameNotFound(game_id))?;

        Ok(GameResponse::from(&game))
    }

    /// Add a game to the catalogue
    #[instrument(skip(self, request))]
    pub async fn create_game(&self, request: CreateGameRequest) -> ServiceResult<GameResponse> {
        let mut draft = NewGame::new(request.name);
        draft.image = request.image;
        draft.description = request.description;
        draft.publisher = request.publisher;
        draft.age_recommendation = request.age_recommendation;
        draft.player_count = request.player_count;
        draft.rating = request.rating;
        if let Some(likes) = request.likes {
            draft.likes = likes;
        }
        if let Some(owners) = request.owners {
            draft.owners = owners;
        }
        if let Some(comments) = request.comments {
            draft.comments = comments;
        }
        if let Some(categories) = request.categories {
            draft.categories = categories;
        }

        let game = self.ctx.game_repo().create(draft).await?;
        info!(game_id = game.id, "Game created");

        Ok(GameResponse::from(&game))
    }

    /// Update a game (partial)
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        game_id: i64,
        request: UpdateGameRequest,
    ) -> ServiceResult<GameResponse> {
        let patch = GamePatch {
            name: request.name,
            image: request.image,
            description: request.description,
            publisher: request.publisher,
            age_recommendation: request.age_recommendation,
            player_count: request.player_count,
            rating: request.rating,
            likes: request.likes,
            owners: request.owners,
            comments: request.comments,
            categories: request.categories,
        };

        let game = self.ctx.game_repo().update(game_id, patch).await?;
        info!(game_id, "Game updated");

        Ok(GameResponse::from(&game))
    }

    /// Remove a game from the catalogue
    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: i64) -> ServiceResult<()> {
        let deleted = self.ctx.game_repo().delete(game_id).await?;
        if !deleted {
            return Err(DomainError::GameNotFound(game_id).into());
        }

        info!(game_id, "Game deleted");
        Ok(())
    }
}
