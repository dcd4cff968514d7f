//! Handlers for follow/unfollow/block endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::follow::{FollowRequest, FollowResponse};
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Follows another user.
///
/// # Endpoint
///
/// `POST /follows`
///
/// # Errors
///
/// Returns 404 Not Found if the target user doesn't exist.
/// Returns 400 Bad Request if the caller already follows the target.
pub async fn create_follow_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<FollowRequest>,
) -> Result<(StatusCode, Json<FollowResponse>), AppError> {
    let relationship = state
        .follow_service
        .follow(&user, payload.followed_user)
        .await?;

    Ok((StatusCode::CREATED, Json(relationship.into())))
}

/// Unfollows a user. Unfollowing someone not followed is a no-op.
///
/// # Endpoint
///
/// `DELETE /unfollow/{followed_id}`
pub async fn unfollow_handler(
    Path(followed_id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    state.follow_service.unfollow(&user, followed_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Blocks one of the caller's followers.
///
/// The relationship stays in place with status BLOCKED; the follower
/// disappears from the caller's active follower list.
///
/// # Endpoint
///
/// `POST /followers/{follower_id}/block`
///
/// # Errors
///
/// Returns 404 Not Found if `follower_id` doesn't follow the caller.
pub async fn block_follower_handler(
    Path(follower_id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FollowResponse>, AppError> {
    let relationship = state
        .follow_service
        .block_follower(&user, follower_id)
        .await?;

    Ok(Json(relationship.into()))
}

/// Unblocks a previously blocked follower, restoring status ACTIVE.
///
/// # Endpoint
///
/// `POST /followers/{follower_id}/unblock`
///
/// # Errors
///
/// Returns 404 Not Found if `follower_id` doesn't follow the caller.
pub async fn unblock_follower_handler(
    Path(follower_id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FollowResponse>, AppError> {
    let relationship = state
        .follow_service
        .unblock_follower(&user, follower_id)
        .await?;

    Ok(Json(relationship.into()))
}
