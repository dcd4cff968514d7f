//! Style declaration rules: ownership checks, bulk create, bulk upsert.

use std::sync::Arc;

use crate::domain::entities::{AuthUser, Card, NewStyle, StyleDeclaration};
use crate::domain::repositories::{CardRepository, StyleRepository, has_duplicate_property};
use crate::error::AppError;
use serde_json::json;

/// Service for managing a card's style declarations.
///
/// Reads are open; every write requires the caller to own the card.
/// Conflicting inserts surface as validation errors rather than being
/// silently dropped.
pub struct StyleService {
    cards: Arc<dyn CardRepository>,
    styles: Arc<dyn StyleRepository>,
}

impl StyleService {
    /// Creates a new style service.
    pub fn new(cards: Arc<dyn CardRepository>, styles: Arc<dyn StyleRepository>) -> Self {
        Self { cards, styles }
    }

    /// Lists the declarations of a card.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the card does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, card_id: i64) -> Result<Vec<StyleDeclaration>, AppError> {
        self.find_card(card_id).await?;
        self.styles.list_for_card(card_id).await
    }

    /// Creates declarations for a card. Owner only.
    ///
    /// Properties are not validated to be real CSS; a property that already
    /// exists (in the request or in storage) is a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the card does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not the creator.
    /// Returns [`AppError::Validation`] on duplicate properties.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn bulk_create(
        &self,
        user: &AuthUser,
        card_id: i64,
        items: Vec<NewStyle>,
    ) -> Result<Vec<StyleDeclaration>, AppError> {
        self.find_owned_card(user, card_id).await?;
        Self::reject_request_duplicates(&items)?;

        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let property = item.property.clone();
            let declaration = self.styles.insert(card_id, item).await.map_err(|e| {
                match e {
                    AppError::Conflict { .. } => AppError::bad_request(
                        "Style property already exists for this card",
                        json!({ "property": property }),
                    ),
                    other => other,
                }
            })?;
            created.push(declaration);
        }

        Ok(created)
    }

    /// Upserts declarations for a card. Owner only.
    ///
    /// Each property not yet present is inserted; each present property has
    /// its stored value replaced by the supplied one. Replacement is whole,
    /// so a text property may become a flag property.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the card does not exist.
    /// Returns [`AppError::Forbidden`] if the caller is not the creator.
    /// Returns [`AppError::Validation`] on duplicate properties within the request.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn bulk_upsert(
        &self,
        user: &AuthUser,
        card_id: i64,
        items: Vec<NewStyle>,
    ) -> Result<Vec<StyleDeclaration>, AppError> {
        self.find_owned_card(user, card_id).await?;
        Self::reject_request_duplicates(&items)?;

        let mut upserted = Vec::with_capacity(items.len());
        for item in items {
            upserted.push(self.styles.upsert(card_id, item).await?);
        }

        Ok(upserted)
    }

    fn reject_request_duplicates(items: &[NewStyle]) -> Result<(), AppError> {
        if has_duplicate_property(items) {
            return Err(AppError::bad_request(
                "Duplicate style properties in request",
                json!({}),
            ));
        }
        Ok(())
    }

    async fn find_card(&self, card_id: i64) -> Result<Card, AppError> {
        self.cards
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found", json!({ "id": card_id })))
    }

    async fn find_owned_card(&self, user: &AuthUser, card_id: i64) -> Result<Card, AppError> {
        let card = self.find_card(card_id).await?;

        if !card.is_owned_by(user.id) {
            return Err(AppError::forbidden(
                "You must be the author of the card to save styles for it.",
                json!({ "id": card_id }),
            ));
        }

        Ok(card)
    }
}
