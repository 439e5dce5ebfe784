//! sdkgen - generates minimal HTTP client SDKs from API spec documents
//!
//! The core walks the `paths` of a spec, derives a method per (path, verb)
//! pair and emits a client for the selected target profile, delivered as a
//! zip archive. The HTTP shell and CLI live on top of [`application`].
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod generation;
pub mod infrastructure;

pub use generation::{GenerationError, SdkGenerator, Target};
pub use infrastructure::generate_sdk;
