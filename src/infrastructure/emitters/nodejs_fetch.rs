//! `nodejs-fetch` target: a CommonJS class built on `node-fetch`

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value as JsonValue;

use crate::generation::{
    Artifact, GeneratedClient, GeneratedMethod, GenerationError, OperationDescriptor, SdkEmitter,
    SpecDocument, Target, TargetOptions,
    context::require_string,
    naming::derive_method_name,
    templating::to_template_literal,
};

/// Name of the exported client class
pub const CLASS_NAME: &str = "DeclarativeClient";

/// Header every request carries the API key in
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Option holding the base URL baked into the constructor
pub const BASE_URL_OPTION: &str = "baseUrl";

/// Validated options for the `nodejs-fetch` target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodejsFetchOptions {
    pub base_url: String,
}

impl NodejsFetchOptions {
    pub fn from_options(options: &TargetOptions) -> Result<Self, GenerationError> {
        let base_url = require_string(options, BASE_URL_OPTION)?;
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }
}

/// Emitter for the `nodejs-fetch` target
pub struct NodejsFetchEmitter;

impl NodejsFetchEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NodejsFetchEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SdkEmitter for NodejsFetchEmitter {
    fn target(&self) -> Target {
        Target::NodejsFetch
    }

    fn emit(
        &self,
        spec: &JsonValue,
        options: &TargetOptions,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let options = NodejsFetchOptions::from_options(options)?;
        let document = SpecDocument::parse(spec)?;
        let client = emit_client(&document, &options)?;

        tracing::debug!(
            "Emitted {} with {} methods",
            CLASS_NAME,
            client.methods.len()
        );

        Ok(vec![Artifact {
            path: PathBuf::from(self.target().archive_entry()),
            content: client.render(),
        }])
    }
}

/// Emits the whole client class for a spec document.
///
/// Method names depend only on the resource (first literal path segment),
/// the verb and whether the path has a parameter. Nested paths such as
/// `GET /users/{id}` and `GET /users/{id}/posts` therefore derive the same
/// `getUsersById`, and generation fails with
/// [`GenerationError::DuplicateMethodName`] rather than emitting a class
/// where one method shadows the other.
pub fn emit_client(
    document: &SpecDocument<'_>,
    options: &NodejsFetchOptions,
) -> Result<GeneratedClient, GenerationError> {
    let operations = document.operations()?;

    let mut seen: HashMap<String, &OperationDescriptor> = HashMap::new();
    let mut methods = Vec::with_capacity(operations.len());
    for operation in &operations {
        let method = emit_method(operation);
        if let Some(previous) = seen.insert(method.name.clone(), operation) {
            return Err(GenerationError::DuplicateMethodName {
                name: method.name,
                first: previous.to_string(),
                second: operation.to_string(),
            });
        }
        methods.push(method);
    }

    Ok(GeneratedClient {
        header: emit_header(&options.base_url),
        methods,
        footer: emit_footer(),
    })
}

/// Emits one `async name(data)` method for an operation
pub fn emit_method(operation: &OperationDescriptor) -> GeneratedMethod {
    let name = derive_method_name(&operation.resource, &operation.verb, &operation.path);
    let has_body = operation.verb.has_body();

    let mut source = String::new();
    source.push_str(&format!("\tasync {name}(data) {{\n"));
    source.push_str(&format!(
        "\t\tconst url = `${{this.baseUrl}}{}`;\n",
        to_template_literal(&operation.path)
    ));
    source.push_str("\t\tconst response = await fetch(url, {\n");
    source.push_str(&format!("\t\t\tmethod: '{}',\n", operation.verb));
    source.push_str("\t\t\theaders: {\n");
    source.push_str(&format!("\t\t\t\t'{API_KEY_HEADER}': `${{this.apiKey}}`,\n"));
    if has_body {
        source.push_str("\t\t\t\t'Content-Type': 'application/json',\n");
    }
    source.push_str("\t\t\t},\n");
    if has_body {
        source.push_str("\t\t\tbody: JSON.stringify(data),\n");
    }
    source.push_str("\t\t});\n");
    source.push_str("\t\treturn response.json();\n");
    source.push_str("\t}");

    GeneratedMethod { name, source }
}

fn emit_header(base_url: &str) -> String {
    let mut header = String::new();
    header.push_str("const fetch = require('node-fetch');\n\n");
    header.push_str(&format!("class {CLASS_NAME} {{\n"));
    header.push_str("\tconstructor(apiKey) {\n");
    header.push_str("\t\tthis.apiKey = apiKey;\n");
    header.push_str(&format!(
        "\t\tthis.baseUrl = '{}';\n",
        escape_single_quoted(base_url)
    ));
    header.push_str("\t}\n\n");
    header
}

fn emit_footer() -> String {
    format!("}}\n\nmodule.exports = {CLASS_NAME};\n")
}

/// Escapes a value for a single-quoted JS string literal
fn escape_single_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}
