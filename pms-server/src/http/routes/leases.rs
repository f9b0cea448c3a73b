//! Lease endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::DeleteResponse;
use crate::db::repos::{LeaseRecord, LeaseRepo};
use crate::http::error::{ApiError, StorageContext};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreateLeaseRequest, DeleteLeaseRequest, NewLease, UpdateLeaseRequest};

/// Lease response. Dates render as `YYYY-MM-DD`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseResponse {
    pub lease_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: String,
    pub end_date: String,
    pub monthly_rent: f64,
    pub payment_frequency: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LeaseRecord> for LeaseResponse {
    fn from(l: LeaseRecord) -> Self {
        Self {
            lease_id: l.lease_id,
            property_id: l.property_id,
            tenant_id: l.tenant_id,
            start_date: l.start_date.format("%Y-%m-%d").to_string(),
            end_date: l.end_date.format("%Y-%m-%d").to_string(),
            monthly_rent: l.monthly_rent,
            payment_frequency: l.payment_frequency,
            created_at: l.created_at.to_rfc3339(),
            updated_at: l.updated_at.to_rfc3339(),
        }
    }
}

/// GET /leases
async fn list_leases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaseResponse>>, ApiError> {
    let leases = LeaseRepo::new(&state.pool)
        .list()
        .await
        .context("fetch leases")?;

    Ok(Json(leases.into_iter().map(LeaseResponse::from).collect()))
}

/// POST /leases
async fn create_lease(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateLeaseRequest>,
) -> Result<(StatusCode, Json<LeaseResponse>), ApiError> {
    let lease = NewLease::try_from(req)?;
    let record = LeaseRepo::new(&state.pool)
        .create(&lease)
        .await
        .context("create lease")?;

    Ok((StatusCode::CREATED, Json(LeaseResponse::from(record))))
}

/// PUT /leases - merge-patch keyed on `leaseId`
async fn update_lease(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateLeaseRequest>,
) -> Result<Json<LeaseResponse>, ApiError> {
    let (id, patch) = req.into_patch()?;
    let record = LeaseRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .context("update lease")?;

    Ok(Json(LeaseResponse::from(record)))
}

/// DELETE /leases
async fn delete_lease(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DeleteLeaseRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = req.into_id()?;
    LeaseRepo::new(&state.pool)
        .delete(id)
        .await
        .context("delete lease")?;

    Ok(Json(DeleteResponse::ok()))
}

/// Lease routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/leases",
        get(list_leases)
            .post(create_lease)
            .put(update_lease)
            .delete(delete_lease),
    )
}
