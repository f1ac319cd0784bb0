//! Use case for regenerating the README generators section

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{
    ApplicationError, DocsRequest, DocsResponse, GeneratorScanner, OutputService, sync_artifact,
};
use crate::generation::{Artifact, MarkdownRenderer, splice_readme};

/// Use case for regenerating the README generators section
pub struct UpdateReadmeUseCase {
    scanner: Arc<dyn GeneratorScanner>,
    output_service: Arc<dyn OutputService>,
}

impl UpdateReadmeUseCase {
    pub fn new(scanner: Arc<dyn GeneratorScanner>, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            scanner,
            output_service,
        }
    }

    pub async fn execute(&self, request: DocsRequest) -> Result<DocsResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;
        let config = &request.config;

        // 2. Load the README being updated
        let readme_path = config.readme_path(&request.root);
        let readme = self
            .output_service
            .read_existing(&readme_path)
            .await?
            .ok_or_else(|| ApplicationError::ReadmeNotFound(readme_path.clone()))?;
        if !readme.contains(&config.start_marker) {
            warn!(
                path = %readme_path.display(),
                marker = %config.start_marker,
                "README has no start marker, appending generators section"
            );
        }

        // 3. Collect generators
        let package = self.scanner.load_package(&request.root).await?;
        let generators = self.scanner.scan(&request.root, config, &package).await?;

        // 4. Render and splice
        let renderer = MarkdownRenderer::new(config.cli_command.clone())?;
        let section = renderer.render_section(&package, &generators)?;
        let content = splice_readme(&readme, &section, &config.start_marker, &config.stop_marker);

        // 5. Write or compare
        let changed = sync_artifact(
            self.output_service.as_ref(),
            Artifact::new(&readme_path, content),
            Some(&readme),
            request.check,
        )
        .await?;

        info!(generators = generators.len(), path = %readme_path.display(), "README section generated");
        Ok(DocsResponse {
            generators,
            changed: if changed { vec![readme_path] } else { Vec::new() },
            written: changed && !request.check,
        })
    }
}
