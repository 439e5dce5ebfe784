//! Core types for the generation domain

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::GenerationError;

/// Supported target profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Target {
    #[serde(rename = "nodejs-fetch")]
    NodejsFetch,
}

impl Target {
    /// The key the target is selected by
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::NodejsFetch => "nodejs-fetch",
        }
    }

    /// Get the display name for this target
    pub fn display_name(&self) -> &'static str {
        match self {
            Target::NodejsFetch => "Node.js (fetch)",
        }
    }

    /// Name of the single source entry inside the archive
    pub fn archive_entry(&self) -> &'static str {
        match self {
            Target::NodejsFetch => "sdk.js",
        }
    }

    /// File name the archive is delivered as
    pub fn archive_name(&self) -> &'static str {
        "sdk.zip"
    }

}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nodejs-fetch" => Ok(Target::NodejsFetch),
            _ => Err(GenerationError::UnsupportedTarget(s.to_string())),
        }
    }
}

/// HTTP verb of an operation, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    /// Any other verb, held in uppercase
    Other(String),
}

impl HttpVerb {
    /// Canonical uppercase form used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Other(verb) => verb,
        }
    }

    /// Whether requests with this verb carry a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = GenerationError;

    /// Verbs must be a non-empty run of ASCII letters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GenerationError::malformed(format!(
                "'{s}' is not an HTTP verb"
            )));
        }

        let verb = s.to_ascii_uppercase();
        Ok(match verb.as_str() {
            "GET" => HttpVerb::Get,
            "POST" => HttpVerb::Post,
            "PUT" => HttpVerb::Put,
            "DELETE" => HttpVerb::Delete,
            _ => HttpVerb::Other(verb),
        })
    }
}

/// One (path, verb) pair drawn from an API spec, plus the resource it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub path: String,
    pub verb: HttpVerb,
    pub resource: String,
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

/// A single emitted client method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    pub name: String,
    pub source: String,
}

/// An emitted client: header, methods in emission order, footer
#[derive(Debug, Clone, Default)]
pub struct GeneratedClient {
    pub header: String,
    pub methods: Vec<GeneratedMethod>,
    pub footer: String,
}

impl GeneratedClient {
    /// Assemble the client into one source unit, methods separated by a blank line
    pub fn render(&self) -> String {
        let mut source = String::with_capacity(
            self.header.len()
                + self.footer.len()
                + self.methods.iter().map(|m| m.source.len() + 2).sum::<usize>(),
        );
        source.push_str(&self.header);
        for method in &self.methods {
            source.push_str(&method.source);
            source.push_str("\n\n");
        }
        source.push_str(&self.footer);
        source
    }
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Result of generation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub target: Target,
    pub artifacts: Vec<Artifact>,
    pub archive: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_str() {
        assert_eq!(Target::from_str("nodejs-fetch").unwrap(), Target::NodejsFetch);

        // Keys are matched exactly
        assert!(Target::from_str("NodeJS-Fetch").is_err());
        assert!(Target::from_str("python-requests").is_err());
        assert!(Target::from_str("").is_err());
    }

    #[test]
    fn test_target_properties() {
        assert_eq!(Target::NodejsFetch.to_string(), "nodejs-fetch");
        assert_eq!(Target::NodejsFetch.archive_entry(), "sdk.js");
        assert_eq!(Target::NodejsFetch.archive_name(), "sdk.zip");
        assert_eq!(Target::NodejsFetch.display_name(), "Node.js (fetch)");
    }

    #[test]
    fn test_target_serializes_as_key() {
        let json = serde_json::to_string(&[Target::NodejsFetch]).unwrap();
        assert_eq!(json, r#"["nodejs-fetch"]"#);
    }

    #[test]
    fn test_http_verb_from_str() {
        assert_eq!("GET".parse::<HttpVerb>().unwrap(), HttpVerb::Get);
        assert_eq!("post".parse::<HttpVerb>().unwrap(), HttpVerb::Post);
        assert_eq!("Put".parse::<HttpVerb>().unwrap(), HttpVerb::Put);
        assert_eq!("delete".parse::<HttpVerb>().unwrap(), HttpVerb::Delete);
        assert_eq!(
            "patch".parse::<HttpVerb>().unwrap(),
            HttpVerb::Other("PATCH".to_string())
        );
    }

    #[test]
    fn test_http_verb_rejects_non_tokens() {
        for key in ["", "x-internal", "get2", "$ref"] {
            let err = key.parse::<HttpVerb>().unwrap_err();
            assert!(matches!(err, GenerationError::MalformedSpec(_)), "{key}");
        }
    }

    #[test]
    fn test_http_verb_body_and_display() {
        assert!(HttpVerb::Post.has_body());
        assert!(HttpVerb::Put.has_body());
        assert!(!HttpVerb::Get.has_body());
        assert!(!HttpVerb::Other("PATCH".to_string()).has_body());
        assert_eq!("options".parse::<HttpVerb>().unwrap().to_string(), "OPTIONS");
    }

    #[test]
    fn test_operation_descriptor_display() {
        let op = OperationDescriptor {
            path: "/users".to_string(),
            verb: HttpVerb::Delete,
            resource: "users".to_string(),
        };
        assert_eq!(op.to_string(), "DELETE /users");
    }

    #[test]
    fn test_generated_client_render() {
        let client = GeneratedClient {
            header: "head\n".to_string(),
            methods: vec![
                GeneratedMethod {
                    name: "a".to_string(),
                    source: "\ta() {}".to_string(),
                },
                GeneratedMethod {
                    name: "b".to_string(),
                    source: "\tb() {}".to_string(),
                },
            ],
            footer: "foot\n".to_string(),
        };

        assert_eq!(client.render(), "head\n\ta() {}\n\n\tb() {}\n\nfoot\n");
    }
}
