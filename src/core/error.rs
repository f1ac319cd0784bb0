//! Error handling for the schemadoc library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. I/O and JSON failures carry the
//! path of the file that caused them so the CLI can report something useful.
//!
//! # Examples
//!
//! ```
//! use schemadoc::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("start and stop markers must differ"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for schemadoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schemadoc operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on a specific file or directory
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error in a specific file
    #[error("JSON parsing error in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error")]
    Serialize(#[from] serde_json::Error),

    /// Directory traversal error
    #[error("Failed to walk directory")]
    Walk(#[from] walkdir::Error),

    /// Background task failure
    #[error("Background task failed")]
    Task(#[from] tokio::task::JoinError),

    /// Template engine error
    #[error("Template engine error")]
    Tera(#[from] tera::Error),

    /// Configuration file parsing error
    #[error("Configuration parsing error in {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON parsing error with the file it came from
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
