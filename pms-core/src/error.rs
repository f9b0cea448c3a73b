/// Structured error types for pms-core.
///
/// Library code returns `CoreError`; the `pms` binary wraps it in `anyhow`
/// at the edges.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration handling
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading the config file failed
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML (or has the wrong shape)
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Serializing the effective config failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A setting (file or environment) holds a value we cannot use
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// No database connection string anywhere in the layers
    #[error("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or [database].url in {path:?}")]
    MissingDatabaseUrl { path: PathBuf },
}

/// Result type alias for pms-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an invalid value error
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
