//! Data Transfer Objects for application layer

use serde::Serialize;
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::collection::Generator;
use crate::core::Config;

/// Request to regenerate one of the derived documents
#[derive(Debug, Clone)]
pub struct DocsRequest {
    pub root: PathBuf,
    pub config: Config,
    /// Compare against what is on disk instead of writing
    pub check: bool,
}

impl DocsRequest {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            check: false,
        }
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.root.exists() {
            return Err(ValidationError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ValidationError::RootNotDirectory(self.root.clone()));
        }
        self.config
            .validate()
            .map_err(|e| ValidationError::InvalidConfiguration(e.to_string()))?;
        Ok(())
    }
}

/// Outcome of a regeneration
#[derive(Debug, Clone, Serialize)]
pub struct DocsResponse {
    pub generators: Vec<Generator>,
    /// Files whose content differs from what was generated
    pub changed: Vec<PathBuf>,
    /// Whether `changed` files were written (false in check mode)
    pub written: bool,
}

impl DocsResponse {
    pub fn is_up_to_date(&self) -> bool {
        self.changed.is_empty()
    }
}
