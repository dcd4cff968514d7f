//! Card entity: a user-owned flashcard with text and styling attributes.

use chrono::{DateTime, Utc};

/// A flashcard owned by exactly one creator.
///
/// `creator` is the creator's username, joined in by the repository for
/// response building.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: i64,
    pub creator_id: i64,
    pub creator: String,
    pub front_text: String,
    pub back_text: Option<String>,
    pub image_url: Option<String>,
    pub background_color: Option<String>,
    pub font: Option<String>,
    pub font_size: Option<String>,
    pub text_align: Option<String>,
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Returns true if `user_id` is the card's creator.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.creator_id == user_id
    }
}

/// Input data for creating a new card.
///
/// The creator is not part of the input; it is taken from the request
/// identity when the card is persisted.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub front_text: String,
    pub back_text: Option<String>,
    pub image_url: Option<String>,
    pub background_color: Option<String>,
    pub font: Option<String>,
    pub font_size: Option<String>,
    pub text_align: Option<String>,
    pub draft: bool,
}

/// Partial update for an existing card.
///
/// Outer `None` leaves a field unchanged. For nullable columns,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub front_text: Option<String>,
    pub back_text: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub background_color: Option<Option<String>>,
    pub font: Option<Option<String>>,
    pub font_size: Option<Option<String>>,
    pub text_align: Option<Option<String>>,
    pub draft: Option<bool>,
}

impl CardPatch {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.front_text.is_none()
            && self.back_text.is_none()
            && self.image_url.is_none()
            && self.background_color.is_none()
            && self.font.is_none()
            && self.font_size.is_none()
            && self.text_align.is_none()
            && self.draft.is_none()
    }
}
