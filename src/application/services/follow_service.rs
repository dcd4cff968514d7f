//! Follow/unfollow/block relationship management.

use std::sync::Arc;

use crate::domain::entities::{AuthUser, FollowRelationship, FollowStatus, FollowedUser};
use crate::domain::repositories::{FollowRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// Service managing the directed follow edge between users.
///
/// Status values form a two-state machine {ACTIVE, BLOCKED}. Blocking
/// requires an existing relationship; following twice surfaces the unique
/// violation as a validation error, so exactly one edge ever exists per
/// (follower, followed) pair.
pub struct FollowService {
    follows: Arc<dyn FollowRepository>,
    users: Arc<dyn UserRepository>,
}

impl FollowService {
    /// Creates a new follow service.
    pub fn new(follows: Arc<dyn FollowRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { follows, users }
    }

    /// Creates an ACTIVE follow edge from the caller to `followed_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the target user does not exist.
    /// Returns [`AppError::Validation`] if the caller already follows the target.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn follow(
        &self,
        user: &AuthUser,
        followed_id: i64,
    ) -> Result<FollowRelationship, AppError> {
        if self.users.find_by_id(followed_id).await?.is_none() {
            return Err(AppError::not_found(
                "User not found",
                json!({ "followed_user": followed_id }),
            ));
        }

        self.follows
            .insert(user.id, followed_id)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::bad_request(
                    "You already follow this user.",
                    json!({ "followed_user": followed_id }),
                ),
                other => other,
            })
    }

    /// Removes the caller's follow edge to `followed_id` if present.
    /// A second unfollow is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn unfollow(&self, user: &AuthUser, followed_id: i64) -> Result<(), AppError> {
        let removed = self.follows.delete(user.id, followed_id).await?;
        if !removed {
            tracing::debug!(
                follower = user.id,
                followed = followed_id,
                "Unfollow without existing relationship"
            );
        }
        Ok(())
    }

    /// Transitions the edge (`follower_id` → caller) from ACTIVE to BLOCKED.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such relationship exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn block_follower(
        &self,
        user: &AuthUser,
        follower_id: i64,
    ) -> Result<FollowRelationship, AppError> {
        self.set_follower_status(user, follower_id, FollowStatus::Blocked)
            .await
    }

    /// Transitions the edge (`follower_id` → caller) back to ACTIVE.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such relationship exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn unblock_follower(
        &self,
        user: &AuthUser,
        follower_id: i64,
    ) -> Result<FollowRelationship, AppError> {
        self.set_follower_status(user, follower_id, FollowStatus::Active)
            .await
    }

    /// Users the caller follows (ACTIVE edges only).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn followed_users(&self, user: &AuthUser) -> Result<Vec<FollowedUser>, AppError> {
        self.follows
            .list_followed(user.id, FollowStatus::Active)
            .await
    }

    /// Users following the caller (ACTIVE edges only).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn followers(&self, user: &AuthUser) -> Result<Vec<FollowedUser>, AppError> {
        self.follows
            .list_followers(user.id, FollowStatus::Active)
            .await
    }

    /// Followers the caller has blocked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn blocked_followers(&self, user: &AuthUser) -> Result<Vec<FollowedUser>, AppError> {
        self.follows
            .list_followers(user.id, FollowStatus::Blocked)
            .await
    }

    async fn set_follower_status(
        &self,
        user: &AuthUser,
        follower_id: i64,
        status: FollowStatus,
    ) -> Result<FollowRelationship, AppError> {
        let relationship = self
            .follows
            .find(follower_id, user.id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Follow relationship not found",
                    json!({ "follower": follower_id }),
                )
            })?;

        self.follows.set_status(relationship.id, status).await?;

        Ok(FollowRelationship {
            status,
            ..relationship
        })
    }
}
