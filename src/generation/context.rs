//! Generation request - the input that flows through the dispatcher

use serde_json::{Map, Value as JsonValue};

use crate::generation::GenerationError;

/// Per-target options, interpreted by the selected profile
pub type TargetOptions = Map<String, JsonValue>;

/// Everything a single generation call needs, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub spec: &'a JsonValue,
    pub api_key: &'a str,
    pub target: &'a str,
    pub options: Option<&'a TargetOptions>,
}

impl<'a> GenerationRequest<'a> {
    /// Create a new generation request
    pub fn new(
        spec: &'a JsonValue,
        api_key: &'a str,
        target: &'a str,
        options: Option<&'a TargetOptions>,
    ) -> Self {
        Self {
            spec,
            api_key,
            target,
            options,
        }
    }
}

/// Reads a mandatory, non-empty string option
pub fn require_string<'o>(options: &'o TargetOptions, name: &str) -> Result<&'o str, GenerationError> {
    match options.get(name) {
        None | Some(JsonValue::Null) => Err(GenerationError::invalid_option(name, "is required")),
        Some(JsonValue::String(value)) if value.is_empty() => {
            Err(GenerationError::invalid_option(name, "must not be empty"))
        }
        Some(JsonValue::String(value)) => Ok(value),
        Some(_) => Err(GenerationError::invalid_option(name, "must be a string")),
    }
}
