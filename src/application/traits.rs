//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

/// Service for writing generated archives to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write archive bytes to `path`, creating parent directories as needed
    async fn write_archive(
        &self,
        path: &Path,
        bytes: &[u8],
    ) -> Result<(), crate::application::ApplicationError>;
}
