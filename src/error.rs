//! Error types for shape classification and dispatch

use crate::pattern::Shape;
use serde_json::Value;
use thiserror::Error;

/// Main error type for matching operations
#[derive(Error, Debug)]
pub enum MatchError {
    /// Input kind has no matching strategy (e.g. a JSON array)
    #[error("Unsupported input kind: {kind}")]
    UnsupportedKind {
        /// Name of the rejected kind
        kind: &'static str,
    },

    /// Discriminated match found neither a tag handler nor a default
    #[error("No handler for discriminant `{key}` with tag {tag}")]
    UnmatchedDiscriminant {
        /// Name of the discriminant field
        key: String,
        /// Offending tag value (`null` when the field is absent)
        tag: Value,
    },

    /// Enum or variant match found neither a tag handler nor a default
    #[error("No handler for {shape} tag `{tag}` and no default handler")]
    NoHandler {
        /// Shape of the matcher that failed
        shape: Shape,
        /// Normalized key that was looked up
        tag: String,
    },

    /// Match on an absent value without a default handler
    #[error("No default handler supplied for {shape} value")]
    MissingDefault {
        /// Shape of the matcher that failed
        shape: Shape,
    },

    /// Plain object matched without naming a discriminant field
    #[error("Object values need a discriminant field; use match_on(key, handlers)")]
    DiscriminantRequired,

    /// Handler map does not cover every expected tag and has no default
    #[error("Handlers are not exhaustive, missing: {}", missing.join(", "))]
    NonExhaustive {
        /// Tags without a handler
        missing: Vec<String>,
    },

    /// Value could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// YAML configuration parsing failed
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Variant-tag pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = MatchError::UnmatchedDiscriminant {
            key: "kind".to_string(),
            tag: json!("c"),
        };
        assert_eq!(err.to_string(), "No handler for discriminant `kind` with tag \"c\"");

        let err = MatchError::NoHandler {
            shape: Shape::Enum,
            tag: "3".to_string(),
        };
        assert_eq!(err.to_string(), "No handler for enum tag `3` and no default handler");

        let err = MatchError::NonExhaustive {
            missing: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "Handlers are not exhaustive, missing: a, b");
    }

    #[test]
    fn test_error_from_regex() {
        let err: MatchError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, MatchError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("Invalid pattern"));
    }
}
