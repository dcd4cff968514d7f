//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod card_repository;
pub mod follow_repository;
pub mod style_repository;
pub mod token_repository;
pub mod user_repository;

pub use card_repository::CardRepository;
pub use follow_repository::FollowRepository;
pub use style_repository::{StyleRepository, group_by_card, has_duplicate_property};
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use card_repository::MockCardRepository;
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
#[cfg(test)]
pub use style_repository::MockStyleRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
