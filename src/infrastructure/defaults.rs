//! Default wiring: the built-in target registry with zip archiving

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::generation::{GenerationError, GenerationRequest, SdkGenerator, TargetOptions};
use crate::infrastructure::{TargetRegistry, ZipArchiver};

impl SdkGenerator {
    /// Generator with the default targets and zip archiving
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(TargetRegistry::new()),
            Arc::new(ZipArchiver::new()),
        )
    }
}

impl Default for SdkGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Generates an SDK archive with the default targets.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let spec = json!({"paths": {"/items": {"GET": {}}}});
/// let options = json!({"baseUrl": "https://api.example.com"});
/// let archive = sdkgen::generate_sdk(&spec, "key", "nodejs-fetch", options.as_object()).unwrap();
/// assert!(!archive.is_empty());
/// ```
pub fn generate_sdk(
    spec: &JsonValue,
    api_key: &str,
    target: &str,
    options: Option<&TargetOptions>,
) -> Result<Vec<u8>, GenerationError> {
    SdkGenerator::with_defaults()
        .generate(GenerationRequest::new(spec, api_key, target, options))
        .map(|result| result.archive)
}
