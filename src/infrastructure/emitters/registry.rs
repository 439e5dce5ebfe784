//! Registry of target profiles and their emitters

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::generation::{GenerationError, SdkEmitter, Target, TargetResolver};

/// Table of supported targets.
///
/// Built once at startup and shared read-only between the dispatcher and the
/// discovery endpoint.
pub struct TargetRegistry {
    emitters: BTreeMap<Target, Arc<dyn SdkEmitter>>,
}

impl TargetRegistry {
    /// Create a registry with no targets
    pub fn empty() -> Self {
        Self {
            emitters: BTreeMap::new(),
        }
    }

    /// Create a new registry with the default emitters
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(super::NodejsFetchEmitter::new()));
        registry
    }

    /// Register an emitter under its own target
    pub fn register(&mut self, emitter: Arc<dyn SdkEmitter>) {
        self.emitters.insert(emitter.target(), emitter);
    }
}

impl TargetResolver for TargetRegistry {
    fn resolve(&self, key: &str) -> Result<(Target, Arc<dyn SdkEmitter>), GenerationError> {
        let target: Target = key.parse()?;
        self.emitters
            .get(&target)
            .cloned()
            .map(|emitter| (target, emitter))
            .ok_or_else(|| GenerationError::UnsupportedTarget(key.to_string()))
    }

    fn supported_targets(&self) -> Vec<Target> {
        self.emitters.keys().copied().collect()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
