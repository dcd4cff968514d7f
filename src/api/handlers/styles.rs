//! Handlers for card style declaration endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::style::{StyleItem, StylePayload};
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the style declarations of a card.
///
/// # Endpoint
///
/// `GET /cards/{card_id}/styles`
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist.
pub async fn list_styles_handler(
    Path(card_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StyleItem>>, AppError> {
    let styles = state.style_service.list(card_id).await?;

    Ok(Json(styles.into_iter().map(Into::into).collect()))
}

/// Creates style declarations for a card. Card owner only.
///
/// # Endpoint
///
/// `POST /cards/{card_id}/styles`
///
/// # Request Body
///
/// A single declaration or an array of declarations. Each item sets exactly
/// one of `value` / `boolValue`:
///
/// ```json
/// [
///   {"property": "color", "value": "red"},
///   {"property": "bold", "boolValue": true}
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist.
/// Returns 403 Forbidden if the caller is not the card's creator.
/// Returns 400 Bad Request on duplicate properties, in the request or
/// already stored for this card.
pub async fn create_styles_handler(
    Path(card_id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<StylePayload>,
) -> Result<(StatusCode, Json<Vec<StyleItem>>), AppError> {
    let items = payload.into_new_styles()?;

    let created = state.style_service.bulk_create(&user, card_id, items).await?;

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(Into::into).collect()),
    ))
}

/// Upserts style declarations for a card. Card owner only.
///
/// # Endpoint
///
/// `PATCH /cards/{card_id}/styles/edit`
///
/// Properties not yet declared are inserted; declared properties have their
/// value replaced. Replacement is whole, so a text property may become a
/// flag property.
///
/// # Errors
///
/// Returns 404 Not Found if the card doesn't exist.
/// Returns 403 Forbidden if the caller is not the card's creator.
/// Returns 400 Bad Request on duplicate properties within the request.
pub async fn update_styles_handler(
    Path(card_id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<StylePayload>,
) -> Result<Json<Vec<StyleItem>>, AppError> {
    let items = payload.into_new_styles()?;

    let upserted = state.style_service.bulk_upsert(&user, card_id, items).await?;

    Ok(Json(upserted.into_iter().map(Into::into).collect()))
}
