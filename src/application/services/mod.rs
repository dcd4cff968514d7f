//! Business logic services for the application layer.

pub mod auth_service;
pub mod card_service;
pub mod follow_service;
pub mod style_service;

pub use auth_service::AuthService;
pub use card_service::{CardService, CardWithStyles};
pub use follow_service::FollowService;
pub use style_service::StyleService;
