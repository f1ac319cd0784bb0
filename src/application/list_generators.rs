//! Use case for listing discovered generators

use std::sync::Arc;

use crate::application::{ApplicationError, DocsRequest, GeneratorScanner};
use crate::collection::Generator;

/// Use case for listing discovered generators
pub struct ListGeneratorsUseCase {
    scanner: Arc<dyn GeneratorScanner>,
}

impl ListGeneratorsUseCase {
    pub fn new(scanner: Arc<dyn GeneratorScanner>) -> Self {
        Self { scanner }
    }

    pub async fn execute(&self, request: DocsRequest) -> Result<Vec<Generator>, ApplicationError> {
        request.validate()?;
        let package = self.scanner.load_package(&request.root).await?;
        self.scanner
            .scan(&request.root, &request.config, &package)
            .await
    }
}
