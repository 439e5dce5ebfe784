//! Target-specific emitters

pub mod nodejs_fetch;
pub mod registry;

pub use nodejs_fetch::NodejsFetchEmitter;
pub use registry::TargetRegistry;
