//! Lease input
//!
//! No overlap or ordering check between `startDate` and `endDate`.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use super::fields::{optional_date, optional_id, require_id, RequiredFields};
use super::ValidationError;

/// POST /leases body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaseRequest {
    pub property_id: Option<String>,
    pub tenant_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub monthly_rent: Option<f64>,
    pub payment_frequency: Option<String>,
}

/// PUT /leases body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaseRequest {
    pub lease_id: Option<String>,
    pub property_id: Option<String>,
    pub tenant_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub monthly_rent: Option<f64>,
    pub payment_frequency: Option<String>,
}

/// DELETE /leases body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLeaseRequest {
    pub lease_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLease {
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub payment_frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeasePatch {
    pub property_id: Option<Uuid>,
    pub tenant_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: Option<f64>,
    pub payment_frequency: Option<String>,
}

impl TryFrom<CreateLeaseRequest> for NewLease {
    type Error = ValidationError;

    fn try_from(req: CreateLeaseRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::new();
        let property_id = required.id("propertyId", req.property_id)?;
        let tenant_id = required.id("tenantId", req.tenant_id)?;
        let start_date = required.date("startDate", req.start_date)?;
        let end_date = required.date("endDate", req.end_date)?;
        let monthly_rent = required.value("monthlyRent", req.monthly_rent);
        let payment_frequency = required.text("paymentFrequency", req.payment_frequency);
        required.finish()?;

        Ok(Self {
            property_id,
            tenant_id,
            start_date,
            end_date,
            monthly_rent,
            payment_frequency,
        })
    }
}

impl UpdateLeaseRequest {
    pub fn into_patch(self) -> Result<(Uuid, LeasePatch), ValidationError> {
        let id = require_id("leaseId", self.lease_id)?;

        Ok((
            id,
            LeasePatch {
                property_id: optional_id("propertyId", self.property_id)?,
                tenant_id: optional_id("tenantId", self.tenant_id)?,
                start_date: optional_date("startDate", self.start_date)?,
                end_date: optional_date("endDate", self.end_date)?,
                monthly_rent: self.monthly_rent,
                payment_frequency: self.payment_frequency,
            },
        ))
    }
}

impl DeleteLeaseRequest {
    pub fn into_id(self) -> Result<Uuid, ValidationError> {
        require_id("leaseId", self.lease_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_parses_ids_and_dates() {
        let property = Uuid::new_v4();
        let tenant = Uuid::new_v4();
        let req: CreateLeaseRequest = serde_json::from_value(json!({
            "propertyId": property.to_string(),
            "tenantId": tenant.to_string(),
            "startDate": "2024-01-01",
            "endDate": "2024-12-31T00:00:00Z",
            "monthlyRent": 1500.5,
            "paymentFrequency": "monthly"
        }))
        .unwrap();

        let lease = NewLease::try_from(req).unwrap();
        assert_eq!(lease.property_id, property);
        assert_eq!(lease.tenant_id, tenant);
        assert_eq!(lease.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(lease.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(lease.monthly_rent, 1500.5);
    }

    #[test]
    fn reversed_dates_are_accepted() {
        let req: CreateLeaseRequest = serde_json::from_value(json!({
            "propertyId": Uuid::new_v4().to_string(),
            "tenantId": Uuid::new_v4().to_string(),
            "startDate": "2025-01-01",
            "endDate": "2024-01-01",
            "monthlyRent": 900,
            "paymentFrequency": "weekly"
        }))
        .unwrap();
        assert!(NewLease::try_from(req).is_ok());
    }

    #[test]
    fn create_lists_missing_fields() {
        let req: CreateLeaseRequest = serde_json::from_value(json!({
            "propertyId": Uuid::new_v4().to_string(),
            "startDate": "2024-01-01"
        }))
        .unwrap();

        let err = NewLease::try_from(req).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                fields: vec!["tenantId", "endDate", "monthlyRent", "paymentFrequency"]
            }
        );
    }

    #[test]
    fn patch_rejects_bad_date() {
        let req = UpdateLeaseRequest {
            lease_id: Some(Uuid::new_v4().to_string()),
            end_date: Some("31/12/2024".into()),
            ..Default::default()
        };
        assert!(matches!(
            req.into_patch().unwrap_err(),
            ValidationError::InvalidFormat { field: "endDate", .. }
        ));
    }
}
