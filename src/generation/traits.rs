//! Port interfaces for the generation domain

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::generation::{Artifact, GenerationError, Target, TargetOptions};

/// Emits the client source for one target profile
pub trait SdkEmitter: Send + Sync {
    /// The target this emitter produces code for
    fn target(&self) -> Target;

    /// Validate options and emit the generated source files.
    ///
    /// Options are validated before the spec document is inspected.
    fn emit(
        &self,
        spec: &JsonValue,
        options: &TargetOptions,
    ) -> Result<Vec<Artifact>, GenerationError>;
}

/// Maps target keys to the emitters registered for them
pub trait TargetResolver: Send + Sync {
    /// Resolve a target key, failing with `UnsupportedTarget` for unknown
    /// or unregistered keys
    fn resolve(&self, key: &str) -> Result<(Target, Arc<dyn SdkEmitter>), GenerationError>;

    /// Targets with a registered emitter, in a stable order
    fn supported_targets(&self) -> Vec<Target>;
}

/// Packs generated artifacts into a downloadable container
pub trait Archiver: Send + Sync {
    fn archive(&self, artifacts: &[Artifact]) -> Result<Vec<u8>, GenerationError>;
}

/// Loads spec documents from a source
#[async_trait]
pub trait SpecLoader: Send + Sync {
    /// Load a spec document from a source
    async fn load(&self, source: &str) -> Result<JsonValue, GenerationError>;
}
