//! Card creation, visibility, and ownership rules.

use std::sync::Arc;

use crate::domain::entities::{AuthUser, Card, CardPatch, NewCard, StyleDeclaration};
use crate::domain::repositories::{CardRepository, StyleRepository, group_by_card};
use crate::error::AppError;
use serde_json::json;

/// A card together with its style declarations, ready for response building.
#[derive(Debug, Clone)]
pub struct CardWithStyles {
    pub card: Card,
    pub styles: Vec<StyleDeclaration>,
}

/// Service enforcing card visibility and ownership.
///
/// Listing hides drafts from everyone; mutation is restricted to the creator;
/// the "mine" view returns the caller's cards, drafts included.
pub struct CardService {
    cards: Arc<dyn CardRepository>,
    styles: Arc<dyn StyleRepository>,
}

impl CardService {
    /// Creates a new card service.
    pub fn new(cards: Arc<dyn CardRepository>, styles: Arc<dyn StyleRepository>) -> Self {
        Self { cards, styles }
    }

    /// Lists non-draft cards, newest first, with their styles embedded.
    ///
    /// `search` filters case-insensitively over front text, back text, and
    /// creator username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<CardWithStyles>, AppError> {
        let cards = self.cards.list_public(search).await?;
        self.attach_styles(cards).await
    }

    /// Lists the caller's own cards, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn my_cards(&self, user: &AuthUser) -> Result<Vec<CardWithStyles>, AppError> {
        let cards = self.cards.list_by_creator(user.id).await?;
        self.attach_styles(cards).await
    }

    /// Creates a card; the caller becomes its immutable creator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        user: &AuthUser,
        new_card: NewCard,
    ) -> Result<CardWithStyles, AppError> {
        let card = self.cards.create(user.id, new_card).await?;
        Ok(CardWithStyles {
            card,
            styles: Vec::new(),
        })
    }

    /// Retrieves a single card through the public detail view.
    ///
    /// Drafts are not retrievable here; the owner sees them via
    /// [`Self::my_cards`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the card is missing or a draft.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<CardWithStyles, AppError> {
        let card = self.cards.find_by_id(id).await?;

        let card = match card {
            Some(card) if !card.draft => card,
            _ => {
                return Err(AppError::not_found("Card not found", json!({ "id": id })));
            }
        };

        let styles = self.styles.list_for_card(card.id).await?;
        Ok(CardWithStyles { card, styles })
    }

    /// Partially updates a card. Only the creator may do this.
    ///
    /// The lookup ignores the draft flag so owners can edit drafts.
    /// An empty patch writes nothing and leaves `updated_at` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no card matches `id`.
    /// Returns [`AppError::Forbidden`] if the caller is not the creator.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i64,
        patch: CardPatch,
    ) -> Result<CardWithStyles, AppError> {
        let card = self.find_owned(user, id).await?;

        let card = if patch.is_empty() {
            card
        } else {
            self.cards.update(id, patch).await?
        };

        let styles = self.styles.list_for_card(card.id).await?;
        Ok(CardWithStyles { card, styles })
    }

    /// Deletes a card and (via cascade) its style declarations.
    /// Only the creator may do this.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no card matches `id`.
    /// Returns [`AppError::Forbidden`] if the caller is not the creator.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, user: &AuthUser, id: i64) -> Result<(), AppError> {
        self.find_owned(user, id).await?;

        self.cards.delete(id).await?;
        Ok(())
    }

    /// Fetches a card and verifies the caller owns it.
    async fn find_owned(&self, user: &AuthUser, id: i64) -> Result<Card, AppError> {
        let card = self
            .cards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found", json!({ "id": id })))?;

        if !card.is_owned_by(user.id) {
            return Err(AppError::forbidden(
                "You must be the creator of this card to modify it.",
                json!({ "id": id }),
            ));
        }

        Ok(card)
    }

    /// Embeds styles into a card list with a single batched query.
    async fn attach_styles(&self, cards: Vec<Card>) -> Result<Vec<CardWithStyles>, AppError> {
        let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
        let mut grouped = group_by_card(self.styles.list_for_cards(&ids).await?);

        Ok(cards
            .into_iter()
            .map(|card| {
                let styles = grouped.remove(&card.id).unwrap_or_default();
                CardWithStyles { card, styles }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCardRepository, MockStyleRepository};
    use chrono::Utc;

    fn auth_user(id: i64) -> AuthUser {
        AuthUser {
            id,
            username: format!("user{id}"),
        }
    }

    fn test_card(id: i64, creator_id: i64, draft: bool) -> Card {
        Card {
            id,
            creator_id,
            creator: format!("user{creator_id}"),
            front_text: "Hola".to_string(),
            back_text: None,
            image_url: None,
            background_color: None,
            font: None,
            font_size: None,
            text_align: None,
            draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_draft_is_not_found() {
        let mut cards = MockCardRepository::new();
        let styles = MockStyleRepository::new();

        cards
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_card(1, 1, true))));

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let result = service.get(1).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_published_card() {
        let mut cards = MockCardRepository::new();
        let mut styles = MockStyleRepository::new();

        cards
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_card(1, 1, false))));
        styles
            .expect_list_for_card()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let result = service.get(1).await.unwrap();
        assert_eq!(result.card.id, 1);
        assert!(result.styles.is_empty());
    }

    #[tokio::test]
    async fn test_update_by_non_creator_is_forbidden() {
        let mut cards = MockCardRepository::new();
        let styles = MockStyleRepository::new();

        cards
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_card(1, 1, false))));
        cards.expect_update().times(0);

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let result = service
            .update(&auth_user(2), 1, CardPatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_update_by_creator_succeeds() {
        let mut cards = MockCardRepository::new();
        let mut styles = MockStyleRepository::new();

        cards
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_card(1, 2, false))));
        cards
            .expect_update()
            .withf(|id, patch| *id == 1 && patch.front_text.as_deref() == Some("Bonjour"))
            .times(1)
            .returning(|_, _| Ok(test_card(1, 2, false)));
        styles
            .expect_list_for_card()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let patch = CardPatch {
            front_text: Some("Bonjour".to_string()),
            ..CardPatch::default()
        };
        let result = service.update(&auth_user(2), 1, patch).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_empty_patch_writes_nothing() {
        let mut cards = MockCardRepository::new();
        let mut styles = MockStyleRepository::new();

        cards
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_card(1, 2, false))));
        cards.expect_update().times(0);
        styles
            .expect_list_for_card()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let result = service.update(&auth_user(2), 1, CardPatch::default()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_card_is_not_found() {
        let mut cards = MockCardRepository::new();
        let styles = MockStyleRepository::new();

        cards.expect_find_by_id().times(1).returning(|_| Ok(None));
        cards.expect_delete().times(0);

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let result = service.delete(&auth_user(1), 42).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_attaches_styles_per_card() {
        let mut cards = MockCardRepository::new();
        let mut styles = MockStyleRepository::new();

        cards
            .expect_list_public()
            .times(1)
            .returning(|_| Ok(vec![test_card(1, 1, false), test_card(2, 1, false)]));
        styles.expect_list_for_cards().times(1).returning(|_| {
            Ok(vec![StyleDeclaration {
                id: 7,
                card_id: 2,
                property: "color".to_string(),
                value: crate::domain::entities::StyleValue::Text("red".to_string()),
            }])
        });

        let service = CardService::new(Arc::new(cards), Arc::new(styles));

        let listing = service.list(None).await.unwrap();
        assert_eq!(listing.len(), 2);
        assert!(listing[0].styles.is_empty());
        assert_eq!(listing[1].styles.len(), 1);
    }
}
