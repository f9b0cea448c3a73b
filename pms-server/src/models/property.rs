//! Property input
//!
//! `location` arrives nested and is stored flattened; `amenities` and
//! `images` arrive as lists and are stored as serialized text.

use serde::Deserialize;
use uuid::Uuid;

use super::fields::{require_id, RequiredFields};
use super::ValidationError;

/// Nested location as sent by clients. Every part is optional so a PUT can
/// change just one coordinate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationInput {
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// POST /properties body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<LocationInput>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// PUT /properties body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    pub property_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<LocationInput>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// DELETE /properties body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePropertyRequest {
    pub property_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Validated property, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub price: f64,
    pub kind: String,
    pub size: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

/// Merge-patch for a property; location parts are patched independently
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price: Option<f64>,
    pub kind: Option<String>,
    pub size: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl TryFrom<CreatePropertyRequest> for NewProperty {
    type Error = ValidationError;

    fn try_from(req: CreatePropertyRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::new();
        let title = required.text("title", req.title);
        let location = req.location.unwrap_or_default();
        let address = required.text("location.address", location.address);
        let latitude = required.value("location.latitude", location.latitude);
        let longitude = required.value("location.longitude", location.longitude);
        let price = required.value("price", req.price);
        let kind = required.text("type", req.kind);
        let size = required.value("size", req.size);
        required.finish()?;

        Ok(Self {
            title,
            description: req.description.unwrap_or_default(),
            location: Location {
                address,
                latitude,
                longitude,
            },
            price,
            kind,
            size,
            amenities: req.amenities.unwrap_or_default(),
            images: req.images.unwrap_or_default(),
        })
    }
}

impl UpdatePropertyRequest {
    pub fn into_patch(self) -> Result<(Uuid, PropertyPatch), ValidationError> {
        let id = require_id("propertyId", self.property_id)?;
        let location = self.location.unwrap_or_default();

        Ok((
            id,
            PropertyPatch {
                title: self.title,
                description: self.description,
                address: location.address,
                latitude: location.latitude,
                longitude: location.longitude,
                price: self.price,
                kind: self.kind,
                size: self.size,
                amenities: self.amenities,
                images: self.images,
            },
        ))
    }
}

impl DeletePropertyRequest {
    pub fn into_id(self) -> Result<Uuid, ValidationError> {
        require_id("propertyId", self.property_id)
    }
}
