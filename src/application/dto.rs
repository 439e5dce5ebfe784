//! Data Transfer Objects for application layer

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::application::ValidationError;
use crate::generation::{GenerationRequest, Target, TargetOptions};

/// Body of a codegen request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodegenRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub spec: Option<JsonValue>,
    #[serde(default)]
    pub language_options: Option<TargetOptions>,
}

impl CodegenRequest {
    /// Parse a request body
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|_| ValidationError::MalformedBody)
    }

    /// Check the top-level fields and build a generation request for `target`
    pub fn validate<'a>(
        &'a self,
        target: &'a str,
    ) -> Result<GenerationRequest<'a>, ValidationError> {
        let spec = self
            .spec
            .as_ref()
            .filter(|spec| spec.is_object())
            .ok_or(ValidationError::MissingSpec)?;

        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ValidationError::MissingApiKey)?;

        let options = self
            .language_options
            .as_ref()
            .ok_or(ValidationError::MissingLanguageOptions)?;

        Ok(GenerationRequest::new(spec, api_key, target, Some(options)))
    }
}

/// Response from SDK generation
#[derive(Debug, Clone)]
pub struct GenerateSdkResponse {
    pub target: Target,
    pub file_name: &'static str,
    pub files_count: usize,
    pub archive: Vec<u8>,
}
