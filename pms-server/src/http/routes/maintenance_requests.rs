//! Maintenance request endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::DeleteResponse;
use crate::db::repos::{MaintenanceRequestRecord, MaintenanceRequestRepo};
use crate::http::error::{ApiError, StorageContext};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{
    CreateMaintenanceRequest, DeleteMaintenanceRequest, NewMaintenanceRequest,
    UpdateMaintenanceRequest,
};

/// Maintenance request response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestResponse {
    pub request_id: Uuid,
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MaintenanceRequestRecord> for MaintenanceRequestResponse {
    fn from(m: MaintenanceRequestRecord) -> Self {
        Self {
            request_id: m.request_id,
            property_id: m.property_id,
            tenant_id: m.tenant_id,
            description: m.description,
            status: m.status,
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

/// GET /maintenance-requests
async fn list_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MaintenanceRequestResponse>>, ApiError> {
    let requests = MaintenanceRequestRepo::new(&state.pool)
        .list()
        .await
        .context("fetch maintenance requests")?;

    Ok(Json(
        requests
            .into_iter()
            .map(MaintenanceRequestResponse::from)
            .collect(),
    ))
}

/// POST /maintenance-requests
async fn create_request(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceRequestResponse>), ApiError> {
    let request = NewMaintenanceRequest::try_from(req)?;
    let record = MaintenanceRequestRepo::new(&state.pool)
        .create(&request)
        .await
        .context("create maintenance request")?;

    Ok((
        StatusCode::CREATED,
        Json(MaintenanceRequestResponse::from(record)),
    ))
}

/// PUT /maintenance-requests - merge-patch keyed on `requestId`
async fn update_request(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceRequestResponse>, ApiError> {
    let (id, patch) = req.into_patch()?;
    let record = MaintenanceRequestRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .context("update maintenance request")?;

    Ok(Json(MaintenanceRequestResponse::from(record)))
}

/// DELETE /maintenance-requests
async fn delete_request(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DeleteMaintenanceRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = req.into_id()?;
    MaintenanceRequestRepo::new(&state.pool)
        .delete(id)
        .await
        .context("delete maintenance request")?;

    Ok(Json(DeleteResponse::ok()))
}

/// Maintenance request routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/maintenance-requests",
        get(list_requests)
            .post(create_request)
            .put(update_request)
            .delete(delete_request),
    )
}
