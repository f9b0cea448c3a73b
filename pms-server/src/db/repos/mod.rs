//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per call; `FromRow` records mirror the snake_case columns
//! - Updates bind `Option`s into `COALESCE` so absent fields keep their value
//! - Deletes don't check the affected row count (idempotent)

pub mod leases;
pub mod maintenance_requests;
pub mod properties;
pub mod reviews;
pub mod users;

pub use leases::{LeaseRecord, LeaseRepo};
pub use maintenance_requests::{MaintenanceRequestRecord, MaintenanceRequestRepo};
pub use properties::{Property, PropertyRecord, PropertyRepo};
pub use reviews::{ReviewRecord, ReviewRepo};
pub use users::{UserRecord, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid list in column {column}: {source}")]
    ListColumn {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
