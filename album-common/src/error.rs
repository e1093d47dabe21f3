//! Common error types for the album service

use thiserror::Error;

/// Common result type for album operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the album crates
#[derive(Error, Debug)]
pub enum Error {
    /// TOML config file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP listener or server error
    #[error("HTTP server error: {0}")]
    Http(String),

    /// No album carries the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body could not be read as an album
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
