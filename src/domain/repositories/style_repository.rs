//! Repository trait for card style declarations.

use crate::domain::entities::{NewStyle, StyleDeclaration, StyleValue};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-card style declarations.
///
/// A declaration's `property` is unique per card; the storage layer also
/// enforces that exactly one of the string/boolean value columns is set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StyleRepository: Send + Sync {
    /// Lists declarations for one card.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_card(&self, card_id: i64) -> Result<Vec<StyleDeclaration>, AppError>;

    /// Lists declarations for a batch of cards in one query.
    ///
    /// Used when embedding styles into card listings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_cards(&self, card_ids: &[i64]) -> Result<Vec<StyleDeclaration>, AppError>;

    /// Inserts a new declaration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the property already exists for the card.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError>;

    /// Inserts the declaration or, when the property already exists for the
    /// card, overwrites its stored value in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError>;
}

/// Groups a flat declaration list by card id, preserving order.
///
/// Helper for response assembly after [`StyleRepository::list_for_cards`].
pub fn group_by_card(
    styles: Vec<StyleDeclaration>,
) -> std::collections::HashMap<i64, Vec<StyleDeclaration>> {
    let mut grouped: std::collections::HashMap<i64, Vec<StyleDeclaration>> =
        std::collections::HashMap::new();
    for style in styles {
        grouped.entry(style.card_id).or_default().push(style);
    }
    grouped
}

/// Returns true when `styles` contains the same property more than once.
pub fn has_duplicate_property(styles: &[NewStyle]) -> bool {
    let mut seen = std::collections::HashSet::new();
    styles.iter().any(|s| !seen.insert(s.property.as_str()))
}
