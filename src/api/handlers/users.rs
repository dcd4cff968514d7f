//! Handlers for the caller's relationship views.

use axum::{Extension, Json, extract::State};

use crate::api::dto::follow::FollowedUserResponse;
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the users the caller actively follows.
///
/// # Endpoint
///
/// `GET /users/followed`
pub async fn followed_users_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<FollowedUserResponse>>, AppError> {
    let users = state.follow_service.followed_users(&user).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Lists the caller's active followers. Blocked followers are excluded.
///
/// # Endpoint
///
/// `GET /users/followers`
pub async fn followers_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<FollowedUserResponse>>, AppError> {
    let users = state.follow_service.followers(&user).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Lists the followers the caller has blocked.
///
/// # Endpoint
///
/// `GET /users/followers/blocked`
pub async fn blocked_followers_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<FollowedUserResponse>>, AppError> {
    let users = state.follow_service.blocked_followers(&user).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
