//! Generation orchestration - selects a target, emits, archives

use std::sync::Arc;

use crate::generation::{
    Archiver, GenerationError, GenerationRequest, GenerationResult, Stage, TargetResolver,
};

/// Dispatches generation requests to the registered target emitters
pub struct SdkGenerator {
    resolver: Arc<dyn TargetResolver>,
    archiver: Arc<dyn Archiver>,
}

impl SdkGenerator {
    /// Create a new generator
    pub fn new(resolver: Arc<dyn TargetResolver>, archiver: Arc<dyn Archiver>) -> Self {
        Self { resolver, archiver }
    }

    /// The targets this generator can dispatch to
    pub fn resolver(&self) -> &dyn TargetResolver {
        self.resolver.as_ref()
    }

    /// Execute the generation workflow.
    ///
    /// All-or-nothing: any failure leaves no partial output.
    pub fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<GenerationResult, GenerationError> {
        tracing::info!("Generating SDK for target: {}", request.target);

        // 1. Resolve the target before looking at anything else
        let (target, emitter) = self.resolver.resolve(request.target)?;

        // 2. The profile needs an options object
        let options = request
            .options
            .ok_or(GenerationError::MissingOptions(target))?;

        // 3. Emit source files
        let artifacts = emitter
            .emit(request.spec, options)
            .map_err(|e| e.in_stage(Stage::Emit, target))?;

        // 4. Archive
        let archive = self
            .archiver
            .archive(&artifacts)
            .map_err(|e| e.in_stage(Stage::Archive, target))?;

        tracing::info!(
            "Generated {} SDK: {} files, {} archive bytes",
            target,
            artifacts.len(),
            archive.len()
        );

        Ok(GenerationResult {
            target,
            artifacts,
            archive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{Artifact, SdkEmitter, Target, TargetOptions};
    use serde_json::{Value as JsonValue, json};
    use std::path::PathBuf;
    use tracing_test::traced_test;

    fn options() -> TargetOptions {
        json!({"baseUrl": "https://api.example.com"})
            .as_object()
            .cloned()
            .unwrap()
    }

    /// Resolves `nodejs-fetch` to a fixed emitter, or nothing at all
    struct StaticResolver(Option<Arc<dyn SdkEmitter>>);

    impl TargetResolver for StaticResolver {
        fn resolve(&self, key: &str) -> Result<(Target, Arc<dyn SdkEmitter>), GenerationError> {
            let target: Target = key.parse()?;
            self.0
                .clone()
                .map(|emitter| (target, emitter))
                .ok_or_else(|| GenerationError::UnsupportedTarget(key.to_string()))
        }

        fn supported_targets(&self) -> Vec<Target> {
            self.0.iter().map(|emitter| emitter.target()).collect()
        }
    }

    /// Emits one artifact per path key, checking only that `paths` exists
    struct PathListEmitter;

    impl SdkEmitter for PathListEmitter {
        fn target(&self) -> Target {
            Target::NodejsFetch
        }

        fn emit(
            &self,
            spec: &JsonValue,
            _options: &TargetOptions,
        ) -> Result<Vec<Artifact>, GenerationError> {
            let paths = spec
                .get("paths")
                .and_then(JsonValue::as_object)
                .ok_or_else(|| GenerationError::malformed("missing 'paths' in spec"))?;
            Ok(vec![Artifact {
                path: PathBuf::from("sdk.js"),
                content: paths.keys().cloned().collect::<Vec<_>>().join("\n"),
            }])
        }
    }

    struct PanickingEmitter;

    impl SdkEmitter for PanickingEmitter {
        fn target(&self) -> Target {
            Target::NodejsFetch
        }

        fn emit(
            &self,
            _spec: &JsonValue,
            _options: &TargetOptions,
        ) -> Result<Vec<Artifact>, GenerationError> {
            panic!("emitter must not run");
        }
    }

    struct ConcatArchiver;

    impl Archiver for ConcatArchiver {
        fn archive(&self, artifacts: &[Artifact]) -> Result<Vec<u8>, GenerationError> {
            Ok(artifacts
                .iter()
                .flat_map(|a| a.content.bytes())
                .collect())
        }
    }

    struct FailingArchiver;

    impl Archiver for FailingArchiver {
        fn archive(&self, _artifacts: &[Artifact]) -> Result<Vec<u8>, GenerationError> {
            Err(GenerationError::Archive(zip::result::ZipError::FileNotFound))
        }
    }

    fn generator(emitter: Option<Arc<dyn SdkEmitter>>, archiver: Arc<dyn Archiver>) -> SdkGenerator {
        SdkGenerator::new(Arc::new(StaticResolver(emitter)), archiver)
    }

    #[test]
    fn test_generate_success() {
        let generator = generator(Some(Arc::new(PathListEmitter)), Arc::new(ConcatArchiver));
        let spec = json!({"paths": {"/items": {"GET": {}}}});
        let opts = options();
        let result = generator
            .generate(GenerationRequest::new(&spec, "key", "nodejs-fetch", Some(&opts)))
            .unwrap();

        assert_eq!(result.target, Target::NodejsFetch);
        assert_eq!(result.artifacts.len(), 1);
        assert_eq!(result.archive, b"/items".to_vec());
    }

    #[test]
    fn test_unknown_target_fails_before_spec_inspection() {
        let generator = generator(Some(Arc::new(PanickingEmitter)), Arc::new(ConcatArchiver));

        let spec = json!({});
        let err = generator
            .generate(GenerationRequest::new(&spec, "key", "python-requests", None))
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedTarget(_)));
    }

    #[test]
    fn test_unregistered_target() {
        let generator = generator(None, Arc::new(ConcatArchiver));
        assert!(generator.resolver().supported_targets().is_empty());

        let spec = json!({"paths": {}});
        let opts = options();
        let err = generator
            .generate(GenerationRequest::new(&spec, "key", "nodejs-fetch", Some(&opts)))
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedTarget(key) if key == "nodejs-fetch"));
    }

    #[test]
    fn test_missing_options() {
        let generator = generator(Some(Arc::new(PanickingEmitter)), Arc::new(ConcatArchiver));

        let spec = json!({"paths": {}});
        let err = generator
            .generate(GenerationRequest::new(&spec, "key", "nodejs-fetch", None))
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingOptions(Target::NodejsFetch)));
    }

    #[test]
    fn test_emit_errors_carry_stage() {
        let generator = generator(Some(Arc::new(PathListEmitter)), Arc::new(ConcatArchiver));
        let spec = json!({"info": {}});
        let opts = options();
        let err = generator
            .generate(GenerationRequest::new(&spec, "key", "nodejs-fetch", Some(&opts)))
            .unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Emit));
        assert!(matches!(err.root(), GenerationError::MalformedSpec(_)));
    }

    #[test]
    fn test_archive_errors_carry_stage() {
        let generator = generator(Some(Arc::new(PathListEmitter)), Arc::new(FailingArchiver));
        let spec = json!({"paths": {}});
        let opts = options();
        let err = generator
            .generate(GenerationRequest::new(&spec, "key", "nodejs-fetch", Some(&opts)))
            .unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Archive));
        assert!(matches!(err.root(), GenerationError::Archive(_)));
    }

    #[test]
    #[traced_test]
    fn test_generation_logs_target_but_not_api_key() {
        let generator = generator(Some(Arc::new(PathListEmitter)), Arc::new(ConcatArchiver));
        let spec = json!({"paths": {"/items": {"GET": {}}}});
        let opts = options();
        generator
            .generate(GenerationRequest::new(&spec, "top-secret-key", "nodejs-fetch", Some(&opts)))
            .unwrap();

        assert!(logs_contain("Generating SDK for target: nodejs-fetch"));
        assert!(!logs_contain("top-secret-key"));
    }
}
