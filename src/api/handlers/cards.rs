//! Handlers for card endpoints (list, create, retrieve, update, delete).

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::card::{CardListParams, CardResponse, CreateCardRequest, UpdateCardRequest};
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all published cards, newest first.
///
/// # Endpoint
///
/// `GET /cards?search=<term>`
///
/// Draft cards are excluded. The optional `search` parameter filters
/// case-insensitively over front text, back text, and creator username.
pub async fn list_cards_handler(
    State(state): State<AppState>,
    Query(params): Query<CardListParams>,
) -> Result<Json<Vec<CardResponse>>, AppError> {
    let cards = state.card_service.list(params.search.as_deref()).await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

/// Creates a card owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /cards`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_card_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardResponse>), AppError> {
    payload.validate()?;

    let card = state.card_service.create(&user, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(card.into())))
}

/// Retrieves a single published card.
///
/// # Endpoint
///
/// `GET /cards/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist or is a draft.
pub async fn get_card_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CardResponse>, AppError> {
    let card = state.card_service.get(id).await?;

    Ok(Json(card.into()))
}

/// Lists the authenticated user's own cards, drafts included.
///
/// # Endpoint
///
/// `GET /cards/me`
pub async fn my_cards_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CardResponse>>, AppError> {
    let cards = state.card_service.my_cards(&user).await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

/// Partially updates a card. Creator only.
///
/// # Endpoint
///
/// `PATCH /cards/{id}`
///
/// # Request Body
///
/// All fields are optional. For nullable fields, `null` clears the value and
/// an absent key leaves it unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist.
/// Returns 403 Forbidden if the caller is not the creator; the card is
/// left unchanged.
/// Returns 400 Bad Request if validation fails.
pub async fn update_card_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateCardRequest>,
) -> Result<Json<CardResponse>, AppError> {
    payload.validate()?;

    let card = state.card_service.update(&user, id, payload.into()).await?;

    Ok(Json(card.into()))
}

/// Deletes a card and its style declarations. Creator only.
///
/// # Endpoint
///
/// `DELETE /cards/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist.
/// Returns 403 Forbidden if the caller is not the creator.
pub async fn delete_card_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    state.card_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
