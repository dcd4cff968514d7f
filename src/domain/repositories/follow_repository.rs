//! Repository trait for follow relationship data access.

use crate::domain::entities::{FollowRelationship, FollowStatus, FollowedUser};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the directed follow edge between users.
///
/// At most one edge exists per (follower, followed) pair; the uniqueness
/// constraint is the only structural guarantee.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Inserts an ACTIVE edge from `follower_id` to `followed_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the edge already exists (any status).
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<FollowRelationship, AppError>;

    /// Finds the edge for a (follower, followed) pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<Option<FollowRelationship>, AppError>;

    /// Deletes the edge if present. Returns `Ok(true)` when a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, follower_id: i64, followed_id: i64) -> Result<bool, AppError>;

    /// Sets the status of an existing edge.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the edge does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_status(&self, id: i64, status: FollowStatus) -> Result<(), AppError>;

    /// Users that `user_id` follows with the given edge status,
    /// newest relationship first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_followed(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError>;

    /// Users following `user_id` with the given edge status,
    /// newest relationship first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_followers(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError>;
}
