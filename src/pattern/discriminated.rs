//! Matcher for records dispatched on a named field
//!
//! The tag is the value of the discriminant field. A tagged handler gets the
//! bare payload (the record without the discriminant); the default handler
//! gets the full record, discriminant included, so it can tell a known tag
//! without a handler apart from a missing one.

use crate::error::{MatchError, Result};
use crate::pattern::{Arm, Dispatch, Handlers, Shape, TagMatcher};
use crate::value::{Record, Scalar};
use serde_json::Value;

/// Matcher over a record and its discriminant field name
#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatedMatcher {
    record: Record,
    key: String,
}

impl DiscriminatedMatcher {
    /// View `record` through its `key` field
    pub fn new(record: Record, key: impl Into<String>) -> Self {
        Self {
            record,
            key: key.into(),
        }
    }

    /// Name of the discriminant field
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The full wrapped record
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Discriminant value; `None` when the field is missing or `null`
    pub fn tag_value(&self) -> Option<&Value> {
        self.record.get(&self.key).filter(|v| !v.is_null())
    }

    /// The record without its discriminant field
    pub fn bare_payload(&self) -> Value {
        let mut bare = self.record.clone();
        bare.remove(&self.key);
        Value::Object(bare)
    }

    /// Dispatch on the discriminant
    ///
    /// Only scalar tags select a tagged handler; an absent or non-scalar tag
    /// goes straight to the default. With neither arm available the call
    /// fails with [`MatchError::UnmatchedDiscriminant`].
    pub fn match_with<T>(&self, handlers: Handlers<'_, T>) -> Result<T> {
        let tag = self.tag();
        let lookup = tag.as_ref().map(Scalar::key);

        match handlers.select(lookup.as_deref()) {
            Arm::Tagged(handler) => {
                tracing::debug!(shape = %Shape::Discriminated, key = %self.key, tag = ?lookup, "dispatching to tagged handler");
                Ok(handler(self.bare_payload()))
            }
            Arm::Default(handler) => {
                tracing::debug!(shape = %Shape::Discriminated, key = %self.key, tag = ?lookup, "dispatching to default handler");
                Ok(handler(Value::Object(self.record.clone())))
            }
            Arm::Unmatched => {
                let tag = self.tag_value().cloned().unwrap_or(Value::Null);
                tracing::warn!(shape = %Shape::Discriminated, key = %self.key, tag = %tag, "no handler for discriminant");
                Err(MatchError::UnmatchedDiscriminant {
                    key: self.key.clone(),
                    tag,
                })
            }
        }
    }
}

impl TagMatcher for DiscriminatedMatcher {
    fn shape(&self) -> Shape {
        Shape::Discriminated
    }

    fn tag(&self) -> Option<Scalar> {
        self.tag_value().and_then(Scalar::from_value)
    }

    /// Bare payload, skipped when the discriminant is absent
    fn into_fn(&self) -> Dispatch {
        match self.tag_value() {
            Some(_) => Dispatch::with(self.bare_payload()),
            None => Dispatch::skip(),
        }
    }
}
