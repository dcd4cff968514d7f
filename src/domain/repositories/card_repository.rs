//! Repository trait for card data access.

use crate::domain::entities::{Card, CardPatch, NewCard};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for flashcards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Creates a new card owned by `creator_id`. The creator is immutable
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, creator_id: i64, new_card: NewCard) -> Result<Card, AppError>;

    /// Finds a card by id, regardless of its draft flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Card>, AppError>;

    /// Lists non-draft cards, newest first.
    ///
    /// When `search` is given, matches case-insensitively against front text,
    /// back text, and the creator's username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_public<'a>(&self, search: Option<&'a str>) -> Result<Vec<Card>, AppError>;

    /// Lists all cards of one creator, drafts included, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_creator(&self, creator_id: i64) -> Result<Vec<Card>, AppError>;

    /// Partially updates a card. `None` fields in the patch are unchanged;
    /// `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no card matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: CardPatch) -> Result<Card, AppError>;

    /// Deletes a card; its style declarations cascade.
    ///
    /// Returns `Ok(true)` if the card existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
