//! Value classification
//!
//! The classifier is the single entry point: it inspects a raw value and
//! builds exactly one matcher for it.
//!
//! | input                                          | matcher   |
//! |------------------------------------------------|-----------|
//! | absent                                         | `Empty`   |
//! | string, number, boolean                        | `Enum`    |
//! | one field, name accepted by the variant policy | `Variant` |
//! | any other record                               | `Object`  |
//!
//! The variant policy is a naming convention, not a validated contract: a
//! plain single-field record whose field happens to be capitalised, such as
//! `{"Name": "x"}`, classifies as a variant under the default policy. Use
//! [`ClassifierBuilder::variant_tag`] to narrow the convention.

use crate::config::{ClassifierConfig, VariantTagPolicy};
use crate::error::Result;
use crate::pattern::{EnumMatcher, Matcher, ObjectMatcher, VariantMatcher, EMPTY};
use crate::value::{RawValue, Record};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

/// Classify `value` with the default variant-tag policy
pub fn classify(value: impl Into<RawValue>) -> Matcher {
    DEFAULT_CLASSIFIER.classify(value)
}

/// Classify a JSON value; arrays are rejected
pub fn classify_json(value: Value) -> Result<Matcher> {
    DEFAULT_CLASSIFIER.classify_json(value)
}

/// Serialize `value` to JSON and classify the result
///
/// Under serde's default enum representation a data-carrying variant
/// becomes a `Variant` and a unit variant an `Enum`.
pub fn classify_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Matcher> {
    DEFAULT_CLASSIFIER.classify_serialize(value)
}

/// Predicate over field names
pub type TagPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Compiled variant-tag rule
#[derive(Clone)]
enum VariantTagRule {
    UppercaseAscii,
    Uppercase,
    Prefix(String),
    Pattern(Regex),
    Custom(TagPredicate),
}

impl VariantTagRule {
    fn compile(policy: &VariantTagPolicy) -> Result<Self> {
        Ok(match policy {
            VariantTagPolicy::UppercaseAscii => VariantTagRule::UppercaseAscii,
            VariantTagPolicy::Uppercase => VariantTagRule::Uppercase,
            VariantTagPolicy::Prefix(prefix) => VariantTagRule::Prefix(prefix.clone()),
            VariantTagPolicy::Pattern(pattern) => VariantTagRule::Pattern(Regex::new(pattern)?),
        })
    }

    fn accepts(&self, name: &str) -> bool {
        match self {
            VariantTagRule::UppercaseAscii => name.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
            VariantTagRule::Uppercase => name.chars().next().is_some_and(char::is_uppercase),
            VariantTagRule::Prefix(prefix) => name.starts_with(prefix.as_str()),
            VariantTagRule::Pattern(regex) => regex.is_match(name),
            VariantTagRule::Custom(predicate) => predicate(name),
        }
    }
}

impl fmt::Debug for VariantTagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantTagRule::UppercaseAscii => f.write_str("UppercaseAscii"),
            VariantTagRule::Uppercase => f.write_str("Uppercase"),
            VariantTagRule::Prefix(prefix) => f.debug_tuple("Prefix").field(prefix).finish(),
            VariantTagRule::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            VariantTagRule::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Classifier with a configured variant-tag rule
#[derive(Debug, Clone)]
pub struct Classifier {
    variant_tag: VariantTagRule,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            variant_tag: VariantTagRule::UppercaseAscii,
        }
    }
}

impl Classifier {
    /// Classifier with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    /// Build a classifier from configuration
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            variant_tag: VariantTagRule::compile(&config.variant_tag)?,
        })
    }

    /// Returns true if `name` counts as a variant tag
    pub fn is_variant_tag(&self, name: &str) -> bool {
        self.variant_tag.accepts(name)
    }

    /// Build the matcher for `value`
    pub fn classify(&self, value: impl Into<RawValue>) -> Matcher {
        let matcher = match value.into() {
            RawValue::Absent => Matcher::Empty(EMPTY),
            RawValue::Scalar(scalar) => Matcher::Enum(EnumMatcher::new(scalar)),
            RawValue::Record(record) => self.classify_record(record),
        };
        tracing::trace!(shape = %matcher.shape(), "classified value");
        matcher
    }

    /// Build the matcher for a JSON value; arrays are rejected
    pub fn classify_json(&self, value: Value) -> Result<Matcher> {
        Ok(self.classify(RawValue::from_json(value)?))
    }

    /// Serialize `value` to JSON and classify the result
    pub fn classify_serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Matcher> {
        self.classify_json(serde_json::to_value(value)?)
    }

    fn classify_record(&self, record: Record) -> Matcher {
        if record.len() != 1 || !record.keys().all(|name| self.is_variant_tag(name)) {
            return Matcher::Object(ObjectMatcher::new(record));
        }
        match VariantMatcher::from_record(record) {
            Ok(variant) => Matcher::Variant(variant),
            Err(record) => Matcher::Object(ObjectMatcher::new(record)),
        }
    }
}

/// Builder for Classifier
#[derive(Default)]
pub struct ClassifierBuilder {
    policy: VariantTagPolicy,
    predicate: Option<TagPredicate>,
}

impl fmt::Debug for ClassifierBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierBuilder")
            .field("policy", &self.policy)
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ClassifierBuilder {
    /// Create a new builder with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant-tag policy
    pub fn variant_tag(mut self, policy: VariantTagPolicy) -> Self {
        self.policy = policy;
        self.predicate = None;
        self
    }

    /// Use an arbitrary predicate for variant tags, overriding the policy
    pub fn variant_tag_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Build the classifier
    pub fn build(self) -> Result<Classifier> {
        if let Some(predicate) = self.predicate {
            return Ok(Classifier {
                variant_tag: VariantTagRule::Custom(predicate),
            });
        }
        Classifier::from_config(&ClassifierConfig {
            variant_tag: self.policy,
        })
    }
}
