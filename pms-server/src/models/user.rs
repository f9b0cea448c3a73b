//! User input: create / update / delete bodies and their validated forms

use serde::Deserialize;
use uuid::Uuid;

use super::fields::{require_id, RequiredFields};
use super::{Role, ValidationError};

/// POST /users body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
}

/// PUT /users body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
}

/// DELETE /users body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub user_id: Option<String>,
}

/// Validated user, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Fields to overwrite on update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = ValidationError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::new();
        let email = required.text("email", req.email);
        let password_hash = required.text("passwordHash", req.password_hash);
        let role = required.text("role", req.role);
        required.finish()?;

        Ok(Self {
            email,
            password_hash,
            role: Role::parse(&role)?,
        })
    }
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> Result<(Uuid, UserPatch), ValidationError> {
        let id = require_id("userId", self.user_id)?;
        let patch = UserPatch {
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.as_deref().map(Role::parse).transpose()?,
        };
        Ok((id, patch))
    }
}

impl DeleteUserRequest {
    pub fn into_id(self) -> Result<Uuid, ValidationError> {
        require_id("userId", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_fields() {
        let err = NewUser::try_from(CreateUserRequest::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                fields: vec!["email", "passwordHash", "role"]
            }
        );
    }

    #[test]
    fn create_rejects_unknown_role() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "a@example.com",
            "passwordHash": "$2b$10$abc",
            "role": "owner"
        }))
        .unwrap();
        assert!(matches!(
            NewUser::try_from(req).unwrap_err(),
            ValidationError::InvalidVariant { field: "role", .. }
        ));
    }

    #[test]
    fn create_keeps_submitted_values() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "a@example.com",
            "passwordHash": "$2b$10$abc",
            "role": "landlord"
        }))
        .unwrap();
        let user = NewUser::try_from(req).unwrap();
        assert_eq!(user.email, "a@example.com");
        assert_eq!(user.password_hash, "$2b$10$abc");
        assert_eq!(user.role, Role::Landlord);
    }

    #[test]
    fn update_only_sets_supplied_fields() {
        let id = Uuid::new_v4();
        let req: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "userId": id.to_string(),
            "role": "admin",
            "email": null
        }))
        .unwrap();
        let (parsed, patch) = req.into_patch().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(
            patch,
            UserPatch {
                email: None,
                password_hash: None,
                role: Some(Role::Admin),
            }
        );
    }

    #[test]
    fn update_and_delete_need_user_id() {
        assert_eq!(
            UpdateUserRequest::default().into_patch().unwrap_err(),
            ValidationError::MissingId { field: "userId" }
        );
        assert_eq!(
            DeleteUserRequest::default().into_id().unwrap_err(),
            ValidationError::MissingId { field: "userId" }
        );
    }
}
