//! PostgreSQL implementation of the follow relationship repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{FollowRelationship, FollowStatus, FollowedUser};
use crate::domain::repositories::FollowRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct FollowRow {
    id: i64,
    follower_id: i64,
    followed_id: i64,
    status: i16,
    created_at: DateTime<Utc>,
}

impl TryFrom<FollowRow> for FollowRelationship {
    type Error = AppError;

    fn try_from(row: FollowRow) -> Result<Self, AppError> {
        let status = FollowStatus::from_i16(row.status).ok_or_else(|| {
            AppError::internal(
                "Unknown follow status value",
                json!({ "id": row.id, "status": row.status }),
            )
        })?;

        Ok(Self {
            id: row.id,
            follower_id: row.follower_id,
            followed_id: row.followed_id,
            status,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FollowedUserRow {
    id: i64,
    username: String,
    relationship_created: DateTime<Utc>,
}

impl From<FollowedUserRow> for FollowedUser {
    fn from(row: FollowedUserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            relationship_created: row.relationship_created,
        }
    }
}

/// PostgreSQL repository for follow edges and their derived user views.
pub struct PgFollowRepository {
    pool: Arc<PgPool>,
}

impl PgFollowRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    async fn insert(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<FollowRelationship, AppError> {
        let row = sqlx::query_as::<_, FollowRow>(
            "INSERT INTO follows (follower_id, followed_id, status)
             VALUES ($1, $2, $3)
             RETURNING id, follower_id, followed_id, status, created_at",
        )
        .bind(follower_id)
        .bind(followed_id)
        .bind(FollowStatus::Active.as_i16())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<Option<FollowRelationship>, AppError> {
        let row = sqlx::query_as::<_, FollowRow>(
            "SELECT id, follower_id, followed_id, status, created_at
             FROM follows WHERE follower_id = $1 AND followed_id = $2",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn delete(&self, follower_id: i64, followed_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower_id)
            .bind(followed_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_status(&self, id: i64, status: FollowStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE follows SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_i16())
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Follow relationship not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn list_followed(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError> {
        let rows = sqlx::query_as::<_, FollowedUserRow>(
            "SELECT u.id, u.username, f.created_at AS relationship_created
             FROM follows f
             JOIN users u ON u.id = f.followed_id
             WHERE f.follower_id = $1 AND f.status = $2
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .bind(status.as_i16())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_followers(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError> {
        let rows = sqlx::query_as::<_, FollowedUserRow>(
            "SELECT u.id, u.username, f.created_at AS relationship_created
             FROM follows f
             JOIN users u ON u.id = f.follower_id
             WHERE f.followed_id = $1 AND f.status = $2
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .bind(status.as_i16())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
