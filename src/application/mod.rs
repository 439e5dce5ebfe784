//! Application layer - request validation and the SDK generation use case

pub mod dto;
pub mod errors;
pub mod generate_sdk;
pub mod traits;

pub use dto::*;
pub use errors::*;
pub use generate_sdk::*;
pub use traits::*;
