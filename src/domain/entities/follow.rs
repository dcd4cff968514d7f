//! Follow relationship entity: a directed, status-bearing edge between users.

use chrono::{DateTime, Utc};

/// State of a follow edge.
///
/// A `Blocked` edge records that the followed user has blocked the follower.
/// Stored as a smallint: 1 = active, 0 = blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowStatus {
    Active,
    Blocked,
}

impl FollowStatus {
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Active),
            0 => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        match self {
            Self::Active => 1,
            Self::Blocked => 0,
        }
    }
}

/// A directed follow edge from `follower_id` to `followed_id`.
///
/// At most one edge exists per (follower, followed) pair, enforced by a
/// uniqueness constraint.
#[derive(Debug, Clone)]
pub struct FollowRelationship {
    pub id: i64,
    pub follower_id: i64,
    pub followed_id: i64,
    pub status: FollowStatus,
    pub created_at: DateTime<Utc>,
}

/// A row of the derived follower/followed user views: the counterpart user
/// plus the timestamp of the relationship that links them.
#[derive(Debug, Clone)]
pub struct FollowedUser {
    pub id: i64,
    pub username: String,
    pub relationship_created: DateTime<Utc>,
}
