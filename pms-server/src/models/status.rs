//! Maintenance request status
//!
//! Two states, no enforced transition: a completed request may be reopened.

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintenanceStatus {
    Pending,
    Completed,
}

impl MaintenanceStatus {
    pub const VARIANTS: &'static [&'static str] = &["pending", "completed"];

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::InvalidVariant {
                field: "status",
                value: value.to_owned(),
                expected: Self::VARIANTS,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        assert_eq!(MaintenanceStatus::parse("pending").unwrap().as_str(), "pending");
        assert_eq!(
            MaintenanceStatus::parse("completed").unwrap(),
            MaintenanceStatus::Completed
        );
    }

    #[test]
    fn rejects_other_states() {
        let err = MaintenanceStatus::parse("in_progress").unwrap_err();
        assert_eq!(
            err.details().as_deref(),
            Some("'in_progress' is not one of: pending, completed")
        );
    }
}
