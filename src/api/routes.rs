//! API route configuration.
//!
//! Routes are split into a public router and a protected router; the
//! protected router gets Bearer token authentication via
//! [`crate::api::middleware::auth`] applied in [`crate::routes`].

use crate::api::handlers::{
    block_follower_handler, blocked_followers_handler, create_card_handler,
    create_follow_handler, create_styles_handler, delete_card_handler, followed_users_handler,
    followers_handler, get_card_handler, health_handler, list_cards_handler, list_styles_handler,
    my_cards_handler, unblock_follower_handler, unfollow_handler, update_card_handler,
    update_styles_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// Routes that require no authentication.
///
/// # Endpoints
///
/// - `GET /cards`                    - List published cards (`?search=`)
/// - `GET /cards/{id}`               - Retrieve a published card
/// - `GET /cards/{card_id}/styles`   - List a card's style declarations
/// - `GET /health`                   - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards_handler))
        .route("/cards/{id}", get(get_card_handler))
        .route("/cards/{card_id}/styles", get(list_styles_handler))
        .route("/health", get(health_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /cards`                          - Create a card
/// - `GET    /cards/me`                       - Own cards, drafts included
/// - `PATCH  /cards/{id}`                     - Update a card (creator only)
/// - `DELETE /cards/{id}`                     - Delete a card (creator only)
/// - `POST   /cards/{card_id}/styles`         - Bulk create declarations
/// - `PATCH  /cards/{card_id}/styles/edit`    - Bulk upsert declarations
/// - `GET    /users/followed`                 - Users the caller follows
/// - `GET    /users/followers`                - Active followers
/// - `GET    /users/followers/blocked`        - Blocked followers
/// - `POST   /follows`                        - Follow a user
/// - `DELETE /unfollow/{followed_id}`         - Unfollow (idempotent)
/// - `POST   /followers/{follower_id}/block`  - Block a follower
/// - `POST   /followers/{follower_id}/unblock` - Unblock a follower
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", post(create_card_handler))
        .route("/cards/me", get(my_cards_handler))
        .route(
            "/cards/{id}",
            patch(update_card_handler).delete(delete_card_handler),
        )
        .route("/cards/{card_id}/styles", post(create_styles_handler))
        .route("/cards/{card_id}/styles/edit", patch(update_styles_handler))
        .route("/users/followed", get(followed_users_handler))
        .route("/users/followers", get(followers_handler))
        .route("/users/followers/blocked", get(blocked_followers_handler))
        .route("/follows", post(create_follow_handler))
        .route("/unfollow/{followed_id}", delete(unfollow_handler))
        .route("/followers/{follower_id}/block", post(block_follower_handler))
        .route(
            "/followers/{follower_id}/unblock",
            post(unblock_follower_handler),
        )
}
