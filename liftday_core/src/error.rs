//! Error types for the liftday_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftday_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A session was started for a workout with no exercises
    #[error("workout '{0}' has no exercises")]
    EmptyWorkout(String),

    /// A workout id was not found in the catalog
    #[error("unknown workout '{0}'")]
    UnknownWorkout(String),

    /// A session operation was attempted with no active workout
    #[error("no active workout")]
    NoActiveWorkout,

    /// Generic error
    #[error("{0}")]
    Other(String),
}
