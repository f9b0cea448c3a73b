//! Property endpoints
//!
//! Responses regroup the flattened location columns into a nested object.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::DeleteResponse;
use crate::db::repos::{Property, PropertyRepo};
use crate::http::error::{ApiError, StorageContext};
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{
    CreatePropertyRequest, DeletePropertyRequest, Location, NewProperty, UpdatePropertyRequest,
};

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Location> for LocationResponse {
    fn from(l: Location) -> Self {
        Self {
            address: l.address,
            latitude: l.latitude,
            longitude: l.longitude,
        }
    }
}

/// Property response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub property_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: LocationResponse,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            property_id: p.property_id,
            title: p.title,
            description: p.description,
            location: p.location.into(),
            price: p.price,
            kind: p.kind,
            size: p.size,
            amenities: p.amenities,
            images: p.images,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// GET /properties
async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let properties = PropertyRepo::new(&state.pool)
        .list()
        .await
        .context("fetch properties")?;

    Ok(Json(
        properties.into_iter().map(PropertyResponse::from).collect(),
    ))
}

/// POST /properties
async fn create_property(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError> {
    let property = NewProperty::try_from(req)?;
    let created = PropertyRepo::new(&state.pool)
        .create(&property)
        .await
        .context("create property")?;

    Ok((StatusCode::CREATED, Json(PropertyResponse::from(created))))
}

/// PUT /properties - merge-patch keyed on `propertyId`
async fn update_property(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdatePropertyRequest>,
) -> Result<Json<PropertyResponse>, ApiError> {
    let (id, patch) = req.into_patch()?;
    let updated = PropertyRepo::new(&state.pool)
        .update(id, &patch)
        .await
        .context("update property")?;

    Ok(Json(PropertyResponse::from(updated)))
}

/// DELETE /properties
async fn delete_property(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DeletePropertyRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = req.into_id()?;
    PropertyRepo::new(&state.pool)
        .delete(id)
        .await
        .context("delete property")?;

    Ok(Json(DeleteResponse::ok()))
}

/// Property routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/properties",
        get(list_properties)
            .post(create_property)
            .put(update_property)
            .delete(delete_property),
    )
}
