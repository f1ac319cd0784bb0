//! Use case for regenerating the collection manifest

use std::sync::Arc;
use tracing::info;

use crate::application::{
    ApplicationError, DocsRequest, DocsResponse, GeneratorScanner, OutputService, sync_artifact,
};
use crate::generation::{Artifact, build_collection, render_collection};

/// Use case for regenerating the collection manifest
pub struct UpdateCollectionUseCase {
    scanner: Arc<dyn GeneratorScanner>,
    output_service: Arc<dyn OutputService>,
}

impl UpdateCollectionUseCase {
    pub fn new(scanner: Arc<dyn GeneratorScanner>, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            scanner,
            output_service,
        }
    }

    pub async fn execute(&self, request: DocsRequest) -> Result<DocsResponse, ApplicationError> {
        request.validate()?;
        let config = &request.config;

        let package = self.scanner.load_package(&request.root).await?;
        let generators = self.scanner.scan(&request.root, config, &package).await?;

        let collection = build_collection(&generators);
        let content = render_collection(&collection)?;

        let collection_path = config.collection_path(&request.root);
        let current = self.output_service.read_existing(&collection_path).await?;
        let changed = sync_artifact(
            self.output_service.as_ref(),
            Artifact::new(&collection_path, content),
            current.as_deref(),
            request.check,
        )
        .await?;

        info!(
            schematics = collection.schematics.len(),
            path = %collection_path.display(),
            "Collection manifest generated"
        );
        Ok(DocsResponse {
            generators,
            changed: if changed { vec![collection_path] } else { Vec::new() },
            written: changed && !request.check,
        })
    }
}
