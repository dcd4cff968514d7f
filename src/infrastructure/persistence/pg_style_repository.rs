//! PostgreSQL implementation of the style declaration repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStyle, StyleDeclaration, StyleValue};
use crate::domain::repositories::StyleRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct StyleRow {
    id: i64,
    card_id: i64,
    property: String,
    value: Option<String>,
    bool_value: Option<bool>,
}

impl TryFrom<StyleRow> for StyleDeclaration {
    type Error = AppError;

    fn try_from(row: StyleRow) -> Result<Self, AppError> {
        // The CHECK constraint makes invalid rows unreachable; guard anyway.
        let value = StyleValue::from_columns(row.value, row.bool_value).ok_or_else(|| {
            AppError::internal(
                "Style row violates one-value invariant",
                json!({ "id": row.id }),
            )
        })?;

        Ok(Self {
            id: row.id,
            card_id: row.card_id,
            property: row.property,
            value,
        })
    }
}

/// PostgreSQL repository for per-card style declarations.
pub struct PgStyleRepository {
    pool: Arc<PgPool>,
}

impl PgStyleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StyleRepository for PgStyleRepository {
    async fn list_for_card(&self, card_id: i64) -> Result<Vec<StyleDeclaration>, AppError> {
        let rows = sqlx::query_as::<_, StyleRow>(
            "SELECT id, card_id, property, value, bool_value
             FROM card_styles WHERE card_id = $1 ORDER BY id",
        )
        .bind(card_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn list_for_cards(&self, card_ids: &[i64]) -> Result<Vec<StyleDeclaration>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, StyleRow>(
            "SELECT id, card_id, property, value, bool_value
             FROM card_styles WHERE card_id = ANY($1) ORDER BY id",
        )
        .bind(card_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError> {
        let (value, bool_value) = style.value.into_columns();

        let row = sqlx::query_as::<_, StyleRow>(
            "INSERT INTO card_styles (card_id, property, value, bool_value)
             VALUES ($1, $2, $3, $4)
             RETURNING id, card_id, property, value, bool_value",
        )
        .bind(card_id)
        .bind(style.property)
        .bind(value)
        .bind(bool_value)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn upsert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError> {
        let (value, bool_value) = style.value.into_columns();

        let row = sqlx::query_as::<_, StyleRow>(
            "INSERT INTO card_styles (card_id, property, value, bool_value)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (card_id, property)
             DO UPDATE SET value = EXCLUDED.value, bool_value = EXCLUDED.bool_value
             RETURNING id, card_id, property, value, bool_value",
        )
        .bind(card_id)
        .bind(style.property)
        .bind(value)
        .bind(bool_value)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }
}
