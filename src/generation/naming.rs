//! Identifier derivation for generated client methods
//!
//! Resource names come from the first literal segment of a path template and
//! method names from the (resource, verb, path) triple:
//!
//! | verb                  | method name              |
//! |-----------------------|--------------------------|
//! | GET, path has `{`     | `get<Resource>ById`      |
//! | GET                   | `list<Resource>`         |
//! | POST                  | `create<Resource>`       |
//! | PUT                   | `update<Resource>`       |
//! | DELETE                | `delete<Resource>`       |
//! | anything else         | `handle<Verb><Resource>` |

use crate::generation::HttpVerb;

/// Resource name used when a path has no literal segment
pub const FALLBACK_RESOURCE: &str = "resource";

/// Marks the start of a path parameter in a path template
pub const PARAM_MARKER: char = '{';

/// Derives the resource name of a path template.
///
/// # Examples
/// ```
/// use sdkgen::generation::naming::derive_resource_name;
///
/// assert_eq!(derive_resource_name("/users/{userId}"), "users");
/// assert_eq!(derive_resource_name("/{id}"), "resource");
/// ```
pub fn derive_resource_name(path: &str) -> String {
    path.split('/')
        .find(|segment| !segment.is_empty() && !segment.contains(PARAM_MARKER))
        .unwrap_or(FALLBACK_RESOURCE)
        .to_string()
}

/// Derives the client method name for an operation.
///
/// # Examples
/// ```
/// use sdkgen::generation::{HttpVerb, naming::derive_method_name};
///
/// assert_eq!(derive_method_name("users", &HttpVerb::Get, "/users/{id}"), "getUsersById");
///
/// let patch: HttpVerb = "patch".parse().unwrap();
/// assert_eq!(derive_method_name("orders", &patch, "/orders"), "handlePatchOrders");
/// ```
pub fn derive_method_name(resource: &str, verb: &HttpVerb, path: &str) -> String {
    let resource = capitalize(resource);
    match verb {
        HttpVerb::Get if path.contains(PARAM_MARKER) => format!("get{resource}ById"),
        HttpVerb::Get => format!("list{resource}"),
        HttpVerb::Post => format!("create{resource}"),
        HttpVerb::Put => format!("update{resource}"),
        HttpVerb::Delete => format!("delete{resource}"),
        HttpVerb::Other(verb) => format!("handle{}{resource}", capitalize(&verb.to_lowercase())),
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
