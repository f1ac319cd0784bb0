//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::collection::{Generator, PackageManifest};
use crate::core::Config;
use crate::generation::Artifact;

/// Source of the project's package metadata and generator schemas
#[async_trait]
pub trait GeneratorScanner: Send + Sync {
    /// Load the root `package.json`
    async fn load_package(&self, root: &Path) -> Result<PackageManifest, ApplicationError>;

    /// Discover, parse and reconcile every visible generator below `root`
    async fn scan(
        &self,
        root: &Path,
        config: &Config,
        package: &PackageManifest,
    ) -> Result<Vec<Generator>, ApplicationError>;
}

/// Service for writing generated artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write all artifacts to the output destination
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError>;

    /// Current content at `path`, or `None` when nothing is there yet
    async fn read_existing(&self, path: &Path) -> Result<Option<String>, ApplicationError>;
}
