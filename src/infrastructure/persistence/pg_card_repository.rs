//! PostgreSQL implementation of the card repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Card, CardPatch, NewCard};
use crate::domain::repositories::CardRepository;
use crate::error::AppError;
use serde_json::json;

const CARD_COLUMNS: &str = "c.id, c.creator_id, u.username AS creator, c.front_text, c.back_text, \
     c.image_url, c.background_color, c.font, c.font_size, c.text_align, c.draft, \
     c.created_at, c.updated_at";

#[derive(sqlx::FromRow)]
struct CardRow {
    id: i64,
    creator_id: i64,
    creator: String,
    front_text: String,
    back_text: Option<String>,
    image_url: Option<String>,
    background_color: Option<String>,
    font: Option<String>,
    font_size: Option<String>,
    text_align: Option<String>,
    draft: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Self {
            id: row.id,
            creator_id: row.creator_id,
            creator: row.creator,
            front_text: row.front_text,
            back_text: row.back_text,
            image_url: row.image_url,
            background_color: row.background_color,
            font: row.font,
            font_size: row.font_size,
            text_align: row.text_align,
            draft: row.draft,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for card storage and retrieval.
pub struct PgCardRepository {
    pool: Arc<PgPool>,
}

impl PgCardRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    async fn create(&self, creator_id: i64, new_card: NewCard) -> Result<Card, AppError> {
        let sql = format!(
            "WITH inserted AS (
                INSERT INTO cards (creator_id, front_text, back_text, image_url,
                                   background_color, font, font_size, text_align, draft)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
            )
            SELECT {} FROM inserted c JOIN users u ON u.id = c.creator_id",
            CARD_COLUMNS
        );

        let row = sqlx::query_as::<_, CardRow>(&sql)
            .bind(creator_id)
            .bind(new_card.front_text)
            .bind(new_card.back_text)
            .bind(new_card.image_url)
            .bind(new_card.background_color)
            .bind(new_card.font)
            .bind(new_card.font_size)
            .bind(new_card.text_align)
            .bind(new_card.draft)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Card>, AppError> {
        let sql = format!(
            "SELECT {} FROM cards c JOIN users u ON u.id = c.creator_id WHERE c.id = $1",
            CARD_COLUMNS
        );

        let row = sqlx::query_as::<_, CardRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_public<'a>(&self, search: Option<&'a str>) -> Result<Vec<Card>, AppError> {
        let sql = format!(
            "SELECT {} FROM cards c JOIN users u ON u.id = c.creator_id
             WHERE c.draft = FALSE
               AND ($1::text IS NULL
                    OR c.front_text ILIKE '%' || $1 || '%'
                    OR c.back_text ILIKE '%' || $1 || '%'
                    OR u.username ILIKE '%' || $1 || '%')
             ORDER BY c.created_at DESC",
            CARD_COLUMNS
        );

        let rows = sqlx::query_as::<_, CardRow>(&sql)
            .bind(search)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_creator(&self, creator_id: i64) -> Result<Vec<Card>, AppError> {
        let sql = format!(
            "SELECT {} FROM cards c JOIN users u ON u.id = c.creator_id
             WHERE c.creator_id = $1
             ORDER BY c.created_at DESC",
            CARD_COLUMNS
        );

        let rows = sqlx::query_as::<_, CardRow>(&sql)
            .bind(creator_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: CardPatch) -> Result<Card, AppError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("UPDATE cards SET updated_at = NOW()");

        if let Some(front_text) = patch.front_text {
            builder.push(", front_text = ").push_bind(front_text);
        }
        if let Some(back_text) = patch.back_text {
            builder.push(", back_text = ").push_bind(back_text);
        }
        if let Some(image_url) = patch.image_url {
            builder.push(", image_url = ").push_bind(image_url);
        }
        if let Some(background_color) = patch.background_color {
            builder
                .push(", background_color = ")
                .push_bind(background_color);
        }
        if let Some(font) = patch.font {
            builder.push(", font = ").push_bind(font);
        }
        if let Some(font_size) = patch.font_size {
            builder.push(", font_size = ").push_bind(font_size);
        }
        if let Some(text_align) = patch.text_align {
            builder.push(", text_align = ").push_bind(text_align);
        }
        if let Some(draft) = patch.draft {
            builder.push(", draft = ").push_bind(draft);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(self.pool.as_ref()).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Card not found", json!({ "id": id })));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
