//! Error types for the generation domain

use std::fmt;

use thiserror::Error;

use crate::generation::Target;

/// Pipeline stage an error surfaced from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Emit,
    Archive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Emit => write!(f, "emit"),
            Stage::Archive => write!(f, "archive"),
        }
    }
}

/// Errors that can occur during SDK generation.
///
/// None of these are retryable: the caller has to fix its input.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unsupported target: {0}")]
    UnsupportedTarget(String),

    #[error("Options are required for target {0}")]
    MissingOptions(Target),

    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("Malformed spec: {0}")]
    MalformedSpec(String),

    #[error("Duplicate method name '{name}' for {first} and {second}")]
    DuplicateMethodName {
        name: String,
        first: String,
        second: String,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to {stage} {target} SDK: {source}")]
    Stage {
        stage: Stage,
        target: Target,
        #[source]
        source: Box<GenerationError>,
    },

    #[error("Spec loading error: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GenerationError {
    /// Create an invalid option error
    pub fn invalid_option<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed spec error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedSpec(msg.into())
    }

    /// Wrap this error with the stage it failed in
    pub fn in_stage(self, stage: Stage, target: Target) -> Self {
        Self::Stage {
            stage,
            target,
            source: Box::new(self),
        }
    }

    /// The innermost error, with stage context peeled off
    pub fn root(&self) -> &GenerationError {
        match self {
            Self::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// The outermost stage this error was attributed to, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
