//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Output error: {0}")]
    OutputError(String),
}

/// Validation errors for codegen requests.
///
/// The messages are returned verbatim to HTTP clients.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error unmarshalling request body")]
    MalformedBody,

    #[error("OpenAPI spec is required")]
    MissingSpec,

    #[error("API key is required")]
    MissingApiKey,

    #[error("Language options are required")]
    MissingLanguageOptions,
}
