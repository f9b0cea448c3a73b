//! Maintenance request input

use serde::Deserialize;
use uuid::Uuid;

use super::fields::{require_id, RequiredFields};
use super::{MaintenanceStatus, ValidationError};

/// POST /maintenance-requests body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub property_id: Option<String>,
    pub tenant_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// PUT /maintenance-requests body; property and tenant are fixed at creation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    pub request_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// DELETE /maintenance-requests body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMaintenanceRequest {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMaintenanceRequest {
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub description: String,
    pub status: MaintenanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenancePatch {
    pub description: Option<String>,
    pub status: Option<MaintenanceStatus>,
}

impl TryFrom<CreateMaintenanceRequest> for NewMaintenanceRequest {
    type Error = ValidationError;

    fn try_from(req: CreateMaintenanceRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::new();
        let property_id = required.id("propertyId", req.property_id)?;
        let tenant_id = required.id("tenantId", req.tenant_id)?;
        let description = required.text("description", req.description);
        let status = required.text("status", req.status);
        required.finish()?;

        Ok(Self {
            property_id,
            tenant_id,
            description,
            status: MaintenanceStatus::parse(&status)?,
        })
    }
}

impl UpdateMaintenanceRequest {
    pub fn into_patch(self) -> Result<(Uuid, MaintenancePatch), ValidationError> {
        let id = require_id("requestId", self.request_id)?;
        let patch = MaintenancePatch {
            description: self.description,
            status: self
                .status
                .as_deref()
                .map(MaintenanceStatus::parse)
                .transpose()?,
        };
        Ok((id, patch))
    }
}

impl DeleteMaintenanceRequest {
    pub fn into_id(self) -> Result<Uuid, ValidationError> {
        require_id("requestId", self.request_id)
    }
}
