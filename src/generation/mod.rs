//! Generation domain module - turns an API spec into client source
//!
//! This module holds the code generation core: identifier derivation, path
//! templating, the read-only spec view and the dispatcher that selects a
//! target profile, emits its sources and archives them.

pub mod context;
pub mod errors;
pub mod naming;
pub mod orchestrator;
pub mod spec;
pub mod templating;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use orchestrator::*;
pub use spec::*;
pub use traits::*;
pub use types::*;
