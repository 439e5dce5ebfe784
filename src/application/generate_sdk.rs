//! Use case for generating SDK archives

use std::path::Path;
use std::sync::Arc;

use crate::application::{ApplicationError, CodegenRequest, GenerateSdkResponse, OutputService};
use crate::generation::{GenerationRequest, SdkGenerator};

/// Use case for generating SDK archives
pub struct GenerateSdkUseCase {
    generator: Arc<SdkGenerator>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateSdkUseCase {
    pub fn new(generator: Arc<SdkGenerator>, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            generator,
            output_service,
        }
    }

    /// The generator backing this use case
    pub fn generator(&self) -> &SdkGenerator {
        &self.generator
    }

    /// Validate a codegen request for `target` and generate its archive
    pub fn execute(
        &self,
        target: &str,
        request: &CodegenRequest,
    ) -> Result<GenerateSdkResponse, ApplicationError> {
        // 1. Validate request
        let generation = request.validate(target)?;

        // 2. Generate and archive
        self.generate(generation)
    }

    /// Generate an archive from an already-validated request
    pub fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<GenerateSdkResponse, ApplicationError> {
        let result = self.generator.generate(request)?;

        Ok(GenerateSdkResponse {
            target: result.target,
            file_name: result.target.archive_name(),
            files_count: result.artifacts.len(),
            archive: result.archive,
        })
    }

    /// Generate an archive and write it to `path`
    pub async fn export(
        &self,
        request: GenerationRequest<'_>,
        path: &Path,
    ) -> Result<GenerateSdkResponse, ApplicationError> {
        let response = self.generate(request)?;

        self.output_service
            .write_archive(path, &response.archive)
            .await?;

        tracing::info!(
            output_path = %path.display(),
            "Wrote {} SDK archive",
            response.target
        );
        Ok(response)
    }
}
