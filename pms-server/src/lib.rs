//! pms-server: CRUD HTTP API for the property management service
//!
//! Five resources (users, properties, leases, maintenance requests,
//! reviews), each a single PostgreSQL table behind GET/POST/PUT/DELETE.
//!
//! - `models` validate request bodies into typed inserts and patches
//! - `db` owns the pool, schema bootstrap and one repository per table
//! - `http` maps repositories onto axum routes and errors onto JSON

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, schema, DbError, PoolSettings};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use sqlx::PgPool;
