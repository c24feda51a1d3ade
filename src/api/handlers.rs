//! Route handlers. Parameter parsing lives in [`CardQuery`]; everything
//! else is delegated to the [`Deck`](crate::orchestrator::Deck).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{ApiError, SharedDeck};
use crate::types::requests::CardQuery;
use crate::types::responses::{
    ErrorResponse, HealthResponse, IdiomsResponse, MessageResponse, StatsResponse,
    WordsResponse,
};

pub const IDIOMS_REFRESHED: &str = "Fetched new idioms";
pub const WORDS_REFRESHED: &str = "Fetched new words";
pub const CACHE_CLEARED: &str = "Cache cleared";
pub const NOT_FOUND: &str = "Endpoint not found";

pub async fn idioms(
    State(deck): State<SharedDeck>,
    Query(query): Query<CardQuery>,
) -> Json<IdiomsResponse> {
    let cards = deck.idioms.get_idioms(query.count(), query.difficulty());
    Json(IdiomsResponse::new(cards))
}

pub async fn refresh_idioms(
    State(deck): State<SharedDeck>,
    Query(query): Query<CardQuery>,
) -> Json<IdiomsResponse> {
    let cards = deck.idioms.refresh_idioms(query.count());
    Json(IdiomsResponse::new(cards).with_message(IDIOMS_REFRESHED))
}

pub async fn words(
    State(deck): State<SharedDeck>,
    Query(query): Query<CardQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
    let batch = deck
        .words
        .get_words(query.count(), query.difficulty(), query.use_external())
        .await?;
    Ok(Json(WordsResponse::new(batch)))
}

pub async fn refresh_words(
    State(deck): State<SharedDeck>,
    Query(query): Query<CardQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
    let batch = deck
        .words
        .get_words(query.count(), query.difficulty(), query.use_external())
        .await?;
    Ok(Json(WordsResponse::new(batch).with_message(WORDS_REFRESHED)))
}

pub async fn stats(State(deck): State<SharedDeck>) -> Json<StatsResponse> {
    Json(StatsResponse::new(deck.stats().await))
}

pub async fn clear_cache(State(deck): State<SharedDeck>) -> Json<MessageResponse> {
    deck.words.clear_cache().await;
    Json(MessageResponse::new(CACHE_CLEARED))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOT_FOUND)))
}
