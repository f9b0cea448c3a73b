//! API error types with IntoResponse
//!
//! Every error renders as `{"error": <message>, "details": <cause>}`.
//! `details` is left out when there is nothing to add (404).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Update target doesn't exist (404)
    NotFound { resource: &'static str },

    /// Any database failure (500, logged). `action` reads like "fetch users".
    Storage {
        action: &'static str,
        source: DbError,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        let (error, details) = match self {
            Self::Validation(e) => (e.headline(), e.details()),
            Self::NotFound { resource } => (format!("{} not found", capitalize(resource)), None),
            Self::Storage { action, source } => {
                (format!("Failed to {}", action), Some(source.to_string()))
            }
        };

        let mut body = json!({ "error": error });
        if let Some(details) = details {
            body["details"] = Value::String(details);
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage { action, source } = &self {
            tracing::error!(action, error = %source, "Database error");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Attach the failed action to a repository result.
///
/// `DbError::NotFound` becomes a 404; everything else is a storage failure.
pub trait StorageContext<T> {
    fn context(self, action: &'static str) -> Result<T, ApiError>;
}

impl<T> StorageContext<T> for Result<T, DbError> {
    fn context(self, action: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| match e {
            DbError::NotFound { resource, .. } => ApiError::NotFound { resource },
            source => ApiError::Storage { action, source },
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let (status, body) = render(ApiError::Validation(ValidationError::Missing {
            fields: vec!["email", "role"],
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields");
        assert_eq!(body["details"], "email, role");
    }

    #[tokio::test]
    async fn missing_id_has_no_details() {
        let (status, body) =
            render(ApiError::Validation(ValidationError::MissingId { field: "leaseId" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing leaseId" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let result: Result<(), DbError> = Err(DbError::NotFound {
            resource: "maintenance request",
            id: "x".into(),
        });
        let (status, body) = render(result.context("update maintenance request").unwrap_err()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Maintenance request not found" }));
    }

    #[tokio::test]
    async fn storage_error_is_500_with_details() {
        let result: Result<(), DbError> = Err(DbError::Sqlx(sqlx::Error::RowNotFound));
        let (status, body) = render(result.context("fetch properties").unwrap_err()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch properties");
        assert!(body["details"].as_str().unwrap().starts_with("database error"));
    }

    #[test]
    fn capitalizes_resource() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize(""), "");
    }
}
