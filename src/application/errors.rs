//! Application layer error types

use std::path::PathBuf;

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("README not found: {}", .0.display())]
    ReadmeNotFound(PathBuf),

    #[error("Generated files are out of date: {}", format_paths(.0))]
    Outdated(Vec<PathBuf>),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Project root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Project root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
