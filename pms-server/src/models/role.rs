//! User roles

use super::ValidationError;

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Landlord,
    Tenant,
    Admin,
}

impl Role {
    pub const VARIANTS: &'static [&'static str] = &["landlord", "tenant", "admin"];

    /// Parse a role from request input (exact, lowercase).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "landlord" => Ok(Self::Landlord),
            "tenant" => Ok(Self::Tenant),
            "admin" => Ok(Self::Admin),
            _ => Err(ValidationError::InvalidVariant {
                field: "role",
                value: value.to_owned(),
                expected: Self::VARIANTS,
            }),
        }
    }

    /// Get string representation (the stored column value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Tenant => "tenant",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declared_variants() {
        for name in Role::VARIANTS {
            let role = Role::parse(name).unwrap();
            assert_eq!(role.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unknown_and_wrong_case() {
        assert!(matches!(
            Role::parse("owner").unwrap_err(),
            ValidationError::InvalidVariant { field: "role", .. }
        ));
        assert!(Role::parse("Tenant").is_err());
    }

    #[test]
    fn displays_stored_value() {
        assert_eq!(Role::Landlord.to_string(), "landlord");
    }
}
