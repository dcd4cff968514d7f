//! DTOs for card style declaration endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewStyle, StyleDeclaration, StyleValue};
use crate::error::AppError;

/// Wire representation of one style declaration.
///
/// Exactly one of `value` / `boolValue` must be set; the other is serialized
/// as `null`.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct StyleItem {
    #[validate(length(min = 1, max = 255))]
    pub property: String,

    #[validate(length(max = 255))]
    pub value: Option<String>,

    #[serde(rename = "boolValue")]
    pub bool_value: Option<bool>,
}

impl From<StyleDeclaration> for StyleItem {
    fn from(declaration: StyleDeclaration) -> Self {
        let (value, bool_value) = declaration.value.into_columns();
        Self {
            property: declaration.property,
            value,
            bool_value,
        }
    }
}

impl TryFrom<StyleItem> for NewStyle {
    type Error = AppError;

    fn try_from(item: StyleItem) -> Result<Self, AppError> {
        let value = StyleValue::from_columns(item.value, item.bool_value).ok_or_else(|| {
            AppError::bad_request(
                "Style must set exactly one of 'value' and 'boolValue'",
                json!({ "property": item.property }),
            )
        })?;

        Ok(Self {
            property: item.property,
            value,
        })
    }
}

/// Request body for style bulk endpoints: a single declaration or an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StylePayload {
    One(StyleItem),
    Many(Vec<StyleItem>),
}

impl StylePayload {
    /// Validates every item and converts the payload into domain inputs.
    pub fn into_new_styles(self) -> Result<Vec<NewStyle>, AppError> {
        let items = match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        };

        items
            .into_iter()
            .map(|item| {
                item.validate()?;
                item.try_into()
            })
            .collect()
    }
}
