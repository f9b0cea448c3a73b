//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields absent, null or blank on create
    Missing { fields: Vec<&'static str> },

    /// Identifier absent on update/delete
    MissingId { field: &'static str },

    /// Value present but unusable (bad UUID, bad date)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    /// Body is not JSON or doesn't match the expected shape
    MalformedBody { reason: String },
}

impl ValidationError {
    /// Short message used as the `error` field of the response body.
    pub fn headline(&self) -> String {
        match self {
            Self::Missing { .. } => "Missing required fields".to_string(),
            Self::MissingId { field } => format!("Missing {}", field),
            Self::InvalidFormat { field, .. } | Self::InvalidVariant { field, .. } => {
                format!("Invalid {}", field)
            }
            Self::MalformedBody { .. } => "Invalid request body".to_string(),
        }
    }

    /// Specifics used as the `details` field of the response body.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Missing { fields } => Some(fields.join(", ")),
            Self::MissingId { .. } => None,
            Self::InvalidFormat { reason, .. } => Some((*reason).to_string()),
            Self::InvalidVariant {
                value, expected, ..
            } => Some(format!(
                "'{}' is not one of: {}",
                value,
                expected.join(", ")
            )),
            Self::MalformedBody { reason } => Some(reason.clone()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details() {
            Some(details) => write!(f, "{}: {}", self.headline(), details),
            None => f.write_str(&self.headline()),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing {
            fields: vec!["title", "price"],
        };
        assert_eq!(err.to_string(), "Missing required fields: title, price");

        let err = ValidationError::MissingId { field: "leaseId" };
        assert_eq!(err.to_string(), "Missing leaseId");
        assert_eq!(err.details(), None);
    }

    #[test]
    fn variant_details_list_expected_values() {
        let err = ValidationError::InvalidVariant {
            field: "role",
            value: "owner".into(),
            expected: &["landlord", "tenant", "admin"],
        };
        assert_eq!(err.headline(), "Invalid role");
        assert_eq!(
            err.details().as_deref(),
            Some("'owner' is not one of: landlord, tenant, admin")
        );
    }
}
