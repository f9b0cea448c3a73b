//! Lease repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{LeasePatch, NewLease};

/// Lease record from database
#[derive(Debug, Clone, FromRow)]
pub struct LeaseRecord {
    pub lease_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub payment_frequency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lease repository
pub struct LeaseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<LeaseRecord>, DbError> {
        let leases = sqlx::query_as(
            r#"
            SELECT lease_id, property_id, tenant_id, start_date, end_date,
                monthly_rent, payment_frequency, created_at, updated_at
            FROM leases
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(leases)
    }

    /// Insert a lease. A property or tenant that doesn't exist violates a
    /// foreign key and comes back as `DbError::Sqlx`.
    pub async fn create(&self, lease: &NewLease) -> Result<LeaseRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            INSERT INTO leases (
                property_id, tenant_id, start_date, end_date,
                monthly_rent, payment_frequency, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING lease_id, property_id, tenant_id, start_date, end_date,
                monthly_rent, payment_frequency, created_at, updated_at
            "#,
        )
        .bind(lease.property_id)
        .bind(lease.tenant_id)
        .bind(lease.start_date)
        .bind(lease.end_date)
        .bind(lease.monthly_rent)
        .bind(&lease.payment_frequency)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(&self, id: Uuid, patch: &LeasePatch) -> Result<LeaseRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            UPDATE leases SET
                property_id = COALESCE($2, property_id),
                tenant_id = COALESCE($3, tenant_id),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                monthly_rent = COALESCE($6, monthly_rent),
                payment_frequency = COALESCE($7, payment_frequency),
                updated_at = NOW()
            WHERE lease_id = $1
            RETURNING lease_id, property_id, tenant_id, start_date, end_date,
                monthly_rent, payment_frequency, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.property_id)
        .bind(patch.tenant_id)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.monthly_rent)
        .bind(patch.payment_frequency.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "lease",
            id: id.to_string(),
        })?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("DELETE FROM leases WHERE lease_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
