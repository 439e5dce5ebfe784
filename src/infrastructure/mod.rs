//! Infrastructure layer - concrete implementations of domain ports

pub mod archive;
pub mod defaults;
pub mod emitters;
pub mod http;
pub mod openapi;
pub mod output;

pub use archive::ZipArchiver;
pub use defaults::generate_sdk;
pub use emitters::*;
pub use openapi::*;
pub use output::*;
