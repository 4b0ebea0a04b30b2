//! Classifier configuration structures

use crate::classifier::Classifier;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule deciding which single-field record names count as variant tags
///
/// Serialized adjacently tagged, e.g. `{policy: prefix, value: "$"}` or just
/// `{policy: uppercase_ascii}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum VariantTagPolicy {
    /// First character is `A`-`Z`
    #[default]
    UppercaseAscii,
    /// First character is an uppercase Unicode letter
    Uppercase,
    /// Name starts with the given non-empty prefix
    Prefix(String),
    /// Name matches the given regular expression
    Pattern(String),
}

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Variant-tag naming policy
    pub variant_tag: VariantTagPolicy,
}

impl ClassifierConfig {
    /// Create a new config builder
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::new()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            _ => Self::from_yaml_str(&contents)?,
        };
        tracing::debug!(path = %path.display(), ?config, "loaded classifier config");
        Ok(config)
    }

    /// Check the config without building a classifier
    pub fn validate(&self) -> Result<()> {
        match &self.variant_tag {
            VariantTagPolicy::Prefix(prefix) if prefix.is_empty() => Err(MatchError::Configuration(
                "variant tag prefix must not be empty".to_string(),
            )),
            VariantTagPolicy::Pattern(pattern) => {
                regex::Regex::new(pattern)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Build the classifier this config describes
    pub fn build(&self) -> Result<Classifier> {
        Classifier::from_config(self)
    }
}

/// Builder for ClassifierConfig
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl ClassifierConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant-tag policy
    pub fn variant_tag(mut self, policy: VariantTagPolicy) -> Self {
        self.config.variant_tag = policy;
        self
    }

    /// Finish, validating the result
    pub fn build(self) -> Result<ClassifierConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
