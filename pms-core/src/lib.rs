//! pms-core: configuration and error types shared by the PMS server and CLI.

pub mod config;
pub mod error;

pub use config::{DatabaseConfig, PmsConfig, ServerSettings, SslMode};
pub use error::{CoreError, Result};
