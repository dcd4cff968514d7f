//! User account entity and request identity.

use chrono::{DateTime, Utc};

/// A registered user account.
///
/// Credentials live in the API token table; this entity only carries identity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated identity of the current request.
///
/// Resolved from a bearer token by the auth middleware and passed explicitly
/// into every operation that needs to know who is calling. Handlers never read
/// ambient global state for this.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_equality() {
        let a = AuthUser {
            id: 1,
            username: "alice".to_string(),
        };
        let b = AuthUser {
            id: 1,
            username: "alice".to_string(),
        };
        assert_eq!(a, b);
    }
}
