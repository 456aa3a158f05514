//! Game list filter extractor
//!
//! Extracts game catalogue filter parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use meeple_service::GameListQuery;

use crate::response::ApiError;

/// Game list filter parameters
///
/// Wraps the query-string deserialization so that malformed values
/// (e.g. a non-numeric `min_rating`) surface as a structured
/// `INVALID_QUERY_PARAMETER` error instead of a bare rejection.
#[derive(Debug)]
pub struct GameFilter(pub GameListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for GameFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<GameListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(GameFilter(query))
    }
}
