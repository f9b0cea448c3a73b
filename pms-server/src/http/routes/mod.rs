//! HTTP route handlers, one module per resource

pub mod health;
pub mod leases;
pub mod maintenance_requests;
pub mod properties;
pub mod reviews;
pub mod users;

use serde::Serialize;

/// Body returned by every DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
