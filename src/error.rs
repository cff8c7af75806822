//! Error handling for brandsmith

use std::fmt;
use thiserror::Error;

/// Unified error type for brandsmith
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Local file errors (history store, exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success response from the hosted table store or another HTTP API
    #[error("Request failed with status {status}: {message}")]
    Api {
        status: u16,
        message: String,
    },

    /// Database errors that are not tied to a single response
    #[error("Database error: {0}")]
    Database(String),

    /// Narrative generation failed or returned something unusable
    #[error("Narrative error: {0}")]
    Narrative(String),

    /// The operation needs a signed-in user
    #[error("Please sign in to continue")]
    NotSignedIn,

    /// Rejected user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new database error
    pub fn database<T: fmt::Display>(msg: T) -> Self {
        Error::Database(msg.to_string())
    }

    /// Create a new narrative error
    pub fn narrative<T: fmt::Display>(msg: T) -> Self {
        Error::Narrative(msg.to_string())
    }

    /// Create a new invalid input error
    pub fn invalid_input<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidInput(msg.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
