//! DTOs for follow relationship endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{FollowRelationship, FollowedUser};

/// Request body for `POST /follows`.
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    /// Id of the user to follow.
    pub followed_user: i64,
}

/// JSON representation of a follow edge.
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub id: i64,
    pub follower_id: i64,
    pub followed_id: i64,
    /// 1 = active, 0 = blocked.
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

impl From<FollowRelationship> for FollowResponse {
    fn from(relationship: FollowRelationship) -> Self {
        Self {
            id: relationship.id,
            follower_id: relationship.follower_id,
            followed_id: relationship.followed_id,
            status: relationship.status.as_i16(),
            created_at: relationship.created_at,
        }
    }
}

/// A user on the other side of a follow edge.
#[derive(Debug, Serialize)]
pub struct FollowedUserResponse {
    pub id: i64,
    pub username: String,
    /// When the follow relationship was created, not the account.
    pub relationship_created: DateTime<Utc>,
}

impl From<FollowedUser> for FollowedUserResponse {
    fn from(user: FollowedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            relationship_created: user.relationship_created,
        }
    }
}
