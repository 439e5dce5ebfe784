//! File-based spec loader
//!
//! Reads a JSON or YAML document from disk into a JSON value. No schema
//! validation or `$ref` resolution happens here.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::fs;

use crate::generation::{GenerationError, SpecLoader};

/// Loads spec documents from local files
pub struct FileSpecLoader;

impl FileSpecLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpecLoader for FileSpecLoader {
    async fn load(&self, source: &str) -> Result<JsonValue, GenerationError> {
        let content = fs::read_to_string(source).await?;

        let spec: JsonValue = if source.ends_with(".json") {
            serde_json::from_str(&content)
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse JSON: {e}")))?
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(&content)
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))?
        } else {
            // Try JSON first, then YAML
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse spec: {e}")))?
        };

        tracing::debug!("Loaded spec from {}", source);
        Ok(spec)
    }
}

impl Default for FileSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}
