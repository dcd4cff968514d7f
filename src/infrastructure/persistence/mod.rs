//! PostgreSQL repository implementations.

pub mod pg_card_repository;
pub mod pg_follow_repository;
pub mod pg_style_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_card_repository::PgCardRepository;
pub use pg_follow_repository::PgFollowRepository;
pub use pg_style_repository::PgStyleRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
