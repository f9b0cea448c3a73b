//! User repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{NewUser, UserPatch};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, oldest first.
    pub async fn list(&self) -> Result<Vec<UserRecord>, DbError> {
        let users = sqlx::query_as(
            r#"
            SELECT user_id, email, password_hash, role, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn create(&self, user: &NewUser) -> Result<UserRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING user_id, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// Apply a merge-patch and refresh `updated_at`.
    pub async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<UserRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                role = COALESCE($4, role),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.email.as_deref())
        .bind(patch.password_hash.as_deref())
        .bind(patch.role.map(|r| r.as_str()))
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "user",
            id: id.to_string(),
        })?;

        Ok(record)
    }

    /// Delete a user (idempotent). Leases, requests and reviews cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
