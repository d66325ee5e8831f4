//! Error handling module
//!
//! This module defines the error types and result type aliases used in the crate.
//! Every variant is fatal: resolution never retries and never downgrades an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration resolution error type
#[derive(Error, Debug)]
pub enum ConfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Neither the canonical nor the deprecated mode setting is present
    #[error("Missing required setting: {0}")]
    MissingSetting(String),

    /// A setting is present but holds a value of the wrong type
    #[error("Invalid value for setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// The settings snapshot could not be built
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// The conf directory does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A resource file cannot be expressed as a resource locator
    #[error("Invalid resource location {}: {reason}", .path.display())]
    InvalidResource { path: PathBuf, reason: String },

    /// A resource file exists but could not be read
    #[error("Failed to read resource {}: {source}", .path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A resource file is not a valid site file
    #[error("Failed to parse resource {}: {message}", .path.display())]
    ResourceParse { path: PathBuf, message: String },

    /// A configuration property could not be converted to the requested type
    #[error("Invalid value '{value}' for property '{key}': {message}")]
    InvalidProperty {
        key: String,
        value: String,
        message: String,
    },
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `ConfError`.
pub type Result<T> = std::result::Result<T, ConfError>;
