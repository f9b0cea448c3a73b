//! Review repository. Reviews have no `updated_at`.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{NewReview, ReviewPatch};

/// Review record from database
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRecord {
    pub review_id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ReviewRecord>, DbError> {
        let reviews = sqlx::query_as(
            r#"
            SELECT review_id, property_id, user_id, rating, comment, created_at
            FROM reviews
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    pub async fn create(&self, review: &NewReview) -> Result<ReviewRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            INSERT INTO reviews (property_id, user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING review_id, property_id, user_id, rating, comment, created_at
            "#,
        )
        .bind(review.property_id)
        .bind(review.user_id)
        .bind(review.rating)
        .bind(&review.comment)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(&self, id: Uuid, patch: &ReviewPatch) -> Result<ReviewRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            UPDATE reviews SET
                rating = COALESCE($2, rating),
                comment = COALESCE($3, comment)
            WHERE review_id = $1
            RETURNING review_id, property_id, user_id, rating, comment, created_at
            "#,
        )
        .bind(id)
        .bind(patch.rating)
        .bind(patch.comment.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "review",
            id: id.to_string(),
        })?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
