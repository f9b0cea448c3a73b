//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One pool per process, shared through `AppState`
//! - One SQL statement per repository call, no transactions
//! - Merge-patch updates are `COALESCE($n, column)`

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_lazy_pool, create_pool, PoolSettings};
pub use repos::*;
