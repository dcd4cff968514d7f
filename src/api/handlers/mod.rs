//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cards;
pub mod follows;
pub mod health;
pub mod styles;
pub mod users;

pub use cards::{
    create_card_handler, delete_card_handler, get_card_handler, list_cards_handler,
    my_cards_handler, update_card_handler,
};
pub use follows::{
    block_follower_handler, create_follow_handler, unblock_follower_handler, unfollow_handler,
};
pub use health::health_handler;
pub use styles::{create_styles_handler, list_styles_handler, update_styles_handler};
pub use users::{blocked_followers_handler, followed_users_handler, followers_handler};
