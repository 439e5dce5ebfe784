//! Read-only view over the `paths` of an API spec document
//!
//! Only the shape of `paths` is inspected: path template → verb → operation.
//! Operation bodies, `$ref`s and schemas are never looked at.

use serde_json::{Map, Value as JsonValue};

use crate::generation::{
    GenerationError, HttpVerb, OperationDescriptor, naming::derive_resource_name,
};

/// Fixed path-item fields that are not operations
const NON_OPERATION_FIELDS: &[&str] = &["parameters", "summary", "description", "servers", "$ref"];

/// Prefix of OpenAPI specification extensions
const EXTENSION_PREFIX: &str = "x-";

fn is_operation_key(key: &str) -> bool {
    !NON_OPERATION_FIELDS.contains(&key) && !key.starts_with(EXTENSION_PREFIX)
}

/// A spec document whose `paths` entry has been checked to be a mapping
#[derive(Debug, Clone, Copy)]
pub struct SpecDocument<'a> {
    paths: &'a Map<String, JsonValue>,
}

impl<'a> SpecDocument<'a> {
    /// Checks that `spec` is a mapping with a string-keyed `paths` mapping
    pub fn parse(spec: &'a JsonValue) -> Result<Self, GenerationError> {
        let paths = spec
            .as_object()
            .ok_or_else(|| GenerationError::malformed("spec must be a mapping"))?
            .get("paths")
            .ok_or_else(|| GenerationError::malformed("missing 'paths' in spec"))?
            .as_object()
            .ok_or_else(|| GenerationError::malformed("'paths' must be a mapping"))?;

        Ok(Self { paths })
    }

    /// Number of path templates in the document
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Every (path, verb) pair, sorted by path template then verb.
    ///
    /// The resource name is derived once per path and shared by its verbs.
    pub fn operations(&self) -> Result<Vec<OperationDescriptor>, GenerationError> {
        let mut paths: Vec<(&String, &JsonValue)> = self.paths.iter().collect();
        paths.sort_by(|a, b| a.0.cmp(b.0));

        let mut operations = Vec::new();
        for (path, item) in paths {
            let item = item.as_object().ok_or_else(|| {
                GenerationError::malformed(format!("path item for '{path}' must be a mapping"))
            })?;

            let resource = derive_resource_name(path);

            let mut keys: Vec<&String> = item.keys().filter(|key| is_operation_key(key)).collect();
            keys.sort();

            for key in keys {
                let verb: HttpVerb = key.parse().map_err(|_| {
                    GenerationError::malformed(format!("'{key}' under '{path}' is not an HTTP verb"))
                })?;
                operations.push(OperationDescriptor {
                    path: path.clone(),
                    verb,
                    resource: resource.clone(),
                });
            }
        }

        tracing::debug!(
            "Spec has {} paths and {} operations",
            self.path_count(),
            operations.len()
        );

        Ok(operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_requires_paths() {
        let spec = json!({"openapi": "3.0.0"});
        let err = SpecDocument::parse(&spec).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedSpec(_)));
    }

    #[test]
    fn test_parse_rejects_non_mapping_paths() {
        for spec in [json!({"paths": []}), json!({"paths": "x"}), json!({"paths": null})] {
            let err = SpecDocument::parse(&spec).unwrap_err();
            assert!(matches!(err, GenerationError::MalformedSpec(_)));
        }
    }

    #[test]
    fn test_parse_rejects_non_mapping_spec() {
        let err = SpecDocument::parse(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedSpec(_)));
    }

    #[test]
    fn test_operations_are_sorted() {
        let spec = json!({
            "paths": {
                "/users/{id}": {"put": {}, "get": {}, "delete": {}},
                "/items": {"post": {}, "get": {}},
            }
        });
        let doc = SpecDocument::parse(&spec).unwrap();
        let ops: Vec<String> = doc
            .operations()
            .unwrap()
            .iter()
            .map(|op| op.to_string())
            .collect();

        assert_eq!(
            ops,
            vec![
                "GET /items",
                "POST /items",
                "DELETE /users/{id}",
                "GET /users/{id}",
                "PUT /users/{id}",
            ]
        );
    }

    #[test]
    fn test_operations_share_resource_per_path() {
        let spec = json!({"paths": {"/{id}": {"GET": {}, "DELETE": {}}}});
        let doc = SpecDocument::parse(&spec).unwrap();
        let ops = doc.operations().unwrap();

        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| op.resource == "resource"));
    }

    #[test]
    fn test_operations_skip_path_item_fields() {
        let spec = json!({
            "paths": {
                "/pets": {
                    "summary": "Pets",
                    "parameters": [],
                    "get": {"operationId": "listPets"}
                }
            }
        });
        let doc = SpecDocument::parse(&spec).unwrap();
        let ops = doc.operations().unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].verb, HttpVerb::Get);
    }

    #[test]
    fn test_operations_skip_extensions() {
        let spec = json!({
            "paths": {
                "/pets": {
                    "x-internal": true,
                    "x-rate-limit": {"rps": 10},
                    "post": {}
                }
            }
        });
        let doc = SpecDocument::parse(&spec).unwrap();
        let ops = doc.operations().unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].verb, HttpVerb::Post);
    }

    #[test]
    fn test_operations_reject_unknown_keys() {
        let spec = json!({"paths": {"/pets": {"get": {}, "not-a-verb": {}}}});
        let doc = SpecDocument::parse(&spec).unwrap();
        let err = doc.operations().unwrap_err();
        assert!(
            matches!(err, GenerationError::MalformedSpec(msg) if msg.contains("not-a-verb") && msg.contains("/pets"))
        );
    }

    #[test]
    fn test_operations_reject_non_mapping_path_item() {
        let spec = json!({"paths": {"/pets": ["get"]}});
        let doc = SpecDocument::parse(&spec).unwrap();
        let err = doc.operations().unwrap_err();
        assert!(matches!(err, GenerationError::MalformedSpec(msg) if msg.contains("/pets")));
    }

    #[test]
    fn test_empty_paths_has_no_operations() {
        let spec = json!({"paths": {}});
        let doc = SpecDocument::parse(&spec).unwrap();
        assert_eq!(doc.path_count(), 0);
        assert!(doc.operations().unwrap().is_empty());
    }
}
