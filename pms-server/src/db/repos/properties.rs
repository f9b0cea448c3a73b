//! Property repository
//!
//! `amenities` and `images` are TEXT columns holding JSON arrays. They are
//! encoded on write and decoded into lists here, so nothing above this layer
//! sees the serialized form.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::{Location, NewProperty, PropertyPatch};

/// Property record from database (flat columns, serialized lists)
#[derive(Debug, Clone, FromRow)]
pub struct PropertyRecord {
    pub property_id: Uuid,
    pub title: String,
    pub description: String,
    pub location_address: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub price: f64,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub size: f64,
    pub amenities: Option<String>,
    pub images: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Property with location regrouped and lists decoded
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub property_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub price: f64,
    pub kind: String,
    pub size: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PropertyRecord> for Property {
    type Error = DbError;

    fn try_from(r: PropertyRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            property_id: r.property_id,
            title: r.title,
            description: r.description,
            location: Location {
                address: r.location_address,
                latitude: r.location_latitude,
                longitude: r.location_longitude,
            },
            price: r.price,
            kind: r.kind,
            size: r.size,
            amenities: decode_list("amenities", r.amenities.as_deref())?,
            images: decode_list("images", r.images.as_deref())?,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

/// NULL, empty text and JSON `null` all decode to an empty list.
fn decode_list(column: &'static str, raw: Option<&str>) -> Result<Vec<String>, DbError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str::<Option<Vec<String>>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|source| DbError::ListColumn { column, source }),
    }
}

fn encode_list(column: &'static str, list: &[String]) -> Result<String, DbError> {
    serde_json::to_string(list).map_err(|source| DbError::ListColumn { column, source })
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Property>, DbError> {
        let records: Vec<PropertyRecord> = sqlx::query_as(
            r#"
            SELECT property_id, title, description,
                location_address, location_latitude, location_longitude,
                price, type, size, amenities, images, created_at, updated_at
            FROM properties
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        records.into_iter().map(Property::try_from).collect()
    }

    pub async fn create(&self, property: &NewProperty) -> Result<Property, DbError> {
        let amenities = encode_list("amenities", &property.amenities)?;
        let images = encode_list("images", &property.images)?;

        let record: PropertyRecord = sqlx::query_as(
            r#"
            INSERT INTO properties (
                title, description, location_address, location_latitude, location_longitude,
                price, type, size, amenities, images, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING property_id, title, description,
                location_address, location_latitude, location_longitude,
                price, type, size, amenities, images, created_at, updated_at
            "#,
        )
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.location.address)
        .bind(property.location.latitude)
        .bind(property.location.longitude)
        .bind(property.price)
        .bind(&property.kind)
        .bind(property.size)
        .bind(amenities)
        .bind(images)
        .fetch_one(self.pool)
        .await?;

        Property::try_from(record)
    }

    /// Apply a merge-patch; lists are replaced wholesale when supplied.
    pub async fn update(&self, id: Uuid, patch: &PropertyPatch) -> Result<Property, DbError> {
        let amenities = patch
            .amenities
            .as_deref()
            .map(|list| encode_list("amenities", list))
            .transpose()?;
        let images = patch
            .images
            .as_deref()
            .map(|list| encode_list("images", list))
            .transpose()?;

        let record: PropertyRecord = sqlx::query_as(
            r#"
            UPDATE properties SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location_address = COALESCE($4, location_address),
                location_latitude = COALESCE($5, location_latitude),
                location_longitude = COALESCE($6, location_longitude),
                price = COALESCE($7, price),
                type = COALESCE($8, type),
                size = COALESCE($9, size),
                amenities = COALESCE($10, amenities),
                images = COALESCE($11, images),
                updated_at = NOW()
            WHERE property_id = $1
            RETURNING property_id, title, description,
                location_address, location_latitude, location_longitude,
                price, type, size, amenities, images, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.address.as_deref())
        .bind(patch.latitude)
        .bind(patch.longitude)
        .bind(patch.price)
        .bind(patch.kind.as_deref())
        .bind(patch.size)
        .bind(amenities)
        .bind(images)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "property",
            id: id.to_string(),
        })?;

        Property::try_from(record)
    }

    /// Delete a property (idempotent). Dependent leases, requests and reviews cascade.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("DELETE FROM properties WHERE property_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
