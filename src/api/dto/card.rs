//! DTOs for card endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::sync::LazyLock;
use validator::Validate;

use crate::api::dto::style::StyleItem;
use crate::application::services::CardWithStyles;
use crate::domain::entities::{CardPatch, NewCard};

/// Compiled regex for `#rgb` / `#rrggbb` color values.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Request body for `POST /cards`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    /// Text shown on the front of the card.
    #[validate(length(min = 1, max = 255))]
    pub front_text: String,

    #[validate(length(max = 255))]
    pub back_text: Option<String>,

    /// Optional illustration URL.
    #[serde(rename = "imageURL")]
    #[validate(url(message = "Invalid URL format"), length(max = 200))]
    pub image_url: Option<String>,

    /// `#rgb` or `#rrggbb`.
    #[validate(regex(path = "*HEX_COLOR_REGEX", message = "Invalid hex color"))]
    pub background_color: Option<String>,

    #[validate(length(max = 255))]
    pub font: Option<String>,

    #[validate(length(max = 255))]
    pub font_size: Option<String>,

    #[validate(length(max = 255))]
    pub text_align: Option<String>,

    /// Drafts are hidden from public listing and retrieval.
    #[serde(default)]
    pub draft: bool,
}

impl From<CreateCardRequest> for NewCard {
    fn from(req: CreateCardRequest) -> Self {
        Self {
            front_text: req.front_text,
            back_text: req.back_text,
            image_url: req.image_url,
            background_color: req.background_color,
            font: req.font,
            font_size: req.font_size,
            text_align: req.text_align,
            draft: req.draft,
        }
    }
}

/// Request body for `PATCH /cards/{id}`.
///
/// All fields are optional — only provided fields are changed.
///
/// # Nullable field semantics
///
/// - **Absent** (key not in JSON) → leave existing value unchanged
/// - **`null`** → clear the value
/// - **Value** → set it
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCardRequest {
    /// Front text cannot be cleared, only replaced.
    #[validate(length(min = 1, max = 255))]
    pub front_text: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub back_text: Option<Option<String>>,

    #[serde(
        rename = "imageURL",
        default,
        with = "::serde_with::rust::double_option"
    )]
    #[validate(url(message = "Invalid URL format"), length(max = 200))]
    pub image_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(regex(path = "*HEX_COLOR_REGEX", message = "Invalid hex color"))]
    pub background_color: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub font: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub font_size: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    pub text_align: Option<Option<String>>,

    pub draft: Option<bool>,
}

impl From<UpdateCardRequest> for CardPatch {
    fn from(req: UpdateCardRequest) -> Self {
        Self {
            front_text: req.front_text,
            back_text: req.back_text,
            image_url: req.image_url,
            background_color: req.background_color,
            font: req.font,
            font_size: req.font_size,
            text_align: req.text_align,
            draft: req.draft,
        }
    }
}

/// Query parameters for `GET /cards`.
#[derive(Debug, Default, Deserialize)]
pub struct CardListParams {
    /// Case-insensitive filter over front text, back text, and creator
    /// username.
    pub search: Option<String>,
}

/// JSON representation of a card with its style declarations embedded.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub id: i64,
    pub creator_id: i64,
    pub creator: String,
    pub front_text: String,
    pub back_text: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub background_color: Option<String>,
    pub font: Option<String>,
    pub font_size: Option<String>,
    pub text_align: Option<String>,
    pub draft: bool,
    pub styles: Vec<StyleItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CardWithStyles> for CardResponse {
    fn from(item: CardWithStyles) -> Self {
        let card = item.card;
        Self {
            id: card.id,
            creator_id: card.creator_id,
            creator: card.creator,
            front_text: card.front_text,
            back_text: card.back_text,
            image_url: card.image_url,
            background_color: card.background_color,
            font: card.font,
            font_size: card.font_size,
            text_align: card.text_align,
            draft: card.draft,
            styles: item.styles.into_iter().map(Into::into).collect(),
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}
