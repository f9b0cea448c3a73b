//! Maintenance request repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{MaintenancePatch, NewMaintenanceRequest};

/// Maintenance request record from database
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceRequestRecord {
    pub request_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maintenance request repository
pub struct MaintenanceRequestRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MaintenanceRequestRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceRequestRecord>, DbError> {
        let requests = sqlx::query_as(
            r#"
            SELECT request_id, property_id, tenant_id, description, status,
                created_at, updated_at
            FROM maintenance_requests
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn create(
        &self,
        request: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequestRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            INSERT INTO maintenance_requests (
                property_id, tenant_id, description, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING request_id, property_id, tenant_id, description, status,
                created_at, updated_at
            "#,
        )
        .bind(request.property_id)
        .bind(request.tenant_id)
        .bind(&request.description)
        .bind(request.status.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// Only description and status are mutable; any status may follow any other.
    pub async fn update(
        &self,
        id: Uuid,
        patch: &MaintenancePatch,
    ) -> Result<MaintenanceRequestRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            UPDATE maintenance_requests SET
                description = COALESCE($2, description),
                status = COALESCE($3, status),
                updated_at = NOW()
            WHERE request_id = $1
            RETURNING request_id, property_id, tenant_id, description, status,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.description.as_deref())
        .bind(patch.status.map(|s| s.as_str()))
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "maintenance request",
            id: id.to_string(),
        })?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("DELETE FROM maintenance_requests WHERE request_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
