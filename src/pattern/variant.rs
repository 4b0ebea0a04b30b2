//! Matcher for single-field tagged variants
//!
//! A tagged variant is a record with exactly one field whose name is the
//! variant tag and whose value is the payload, e.g. `{"Circle": {"r": 2}}`.
//! This is serde's default representation of a data-carrying enum variant.
//! Unlike the discriminated matcher, the default handler receives the
//! payload rather than the whole record: a tagged variant has nothing
//! besides its payload.

use crate::error::{MatchError, Result};
use crate::pattern::{Arm, Dispatch, Handlers, Shape, TagMatcher};
use crate::value::{Record, Scalar};
use serde_json::Value;

/// Matcher over a `{Tag: payload}` record
#[derive(Debug, Clone, PartialEq)]
pub struct VariantMatcher {
    tag: String,
    payload: Value,
}

impl VariantMatcher {
    /// Create a matcher for variant `tag` carrying `payload`
    pub fn new(tag: impl Into<String>, payload: Value) -> Self {
        Self {
            tag: tag.into(),
            payload,
        }
    }

    /// Split a single-field record into tag and payload
    ///
    /// Hands the record back unless it has exactly one field. The tag
    /// naming policy is the classifier's concern, not checked here.
    pub fn from_record(record: Record) -> std::result::Result<Self, Record> {
        if record.len() != 1 {
            return Err(record);
        }
        match record.into_iter().next() {
            Some((tag, payload)) => Ok(Self::new(tag, payload)),
            None => Err(Record::new()),
        }
    }

    /// Variant tag (the record's field name)
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Value held under the tag
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Dispatch on the tag; tagged and default handlers both get the payload
    pub fn match_with<T>(&self, handlers: Handlers<'_, T>) -> Result<T> {
        match handlers.select(Some(self.tag.as_str())) {
            Arm::Tagged(handler) => {
                tracing::debug!(shape = %Shape::Variant, tag = %self.tag, "dispatching to tagged handler");
                Ok(handler(self.payload.clone()))
            }
            Arm::Default(handler) => {
                tracing::debug!(shape = %Shape::Variant, tag = %self.tag, "dispatching to default handler");
                Ok(handler(self.payload.clone()))
            }
            Arm::Unmatched => {
                tracing::warn!(shape = %Shape::Variant, tag = %self.tag, "no handler for variant");
                Err(MatchError::NoHandler {
                    shape: Shape::Variant,
                    tag: self.tag.clone(),
                })
            }
        }
    }
}

impl TagMatcher for VariantMatcher {
    fn shape(&self) -> Shape {
        Shape::Variant
    }

    fn tag(&self) -> Option<Scalar> {
        Some(Scalar::String(self.tag.clone()))
    }

    /// Skips `null` and `[]` payloads
    fn into_fn(&self) -> Dispatch {
        Dispatch::non_empty(&self.payload)
    }
}
