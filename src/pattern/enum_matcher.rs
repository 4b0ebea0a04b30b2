//! Matcher for scalar values

use crate::error::{MatchError, Result};
use crate::pattern::{Arm, Dispatch, Handlers, Shape, TagMatcher};
use crate::value::Scalar;

/// Matcher over a string, number or boolean
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMatcher {
    value: Scalar,
}

impl EnumMatcher {
    /// Create a matcher over `value`
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The held scalar
    pub fn value(&self) -> Option<&Scalar> {
        Some(&self.value)
    }

    /// The held scalar; `fallback` is never needed
    pub fn value_or(&self, _fallback: impl Into<Scalar>) -> Scalar {
        self.value.clone()
    }

    /// The held scalar; `producer` is never invoked
    pub fn value_or_else<S, F>(&self, _producer: F) -> Scalar
    where
        S: Into<Scalar>,
        F: FnOnce() -> S,
    {
        self.value.clone()
    }

    /// Dispatch on the scalar's key, falling back to the default handler
    ///
    /// Both the tagged and the default handler receive the value itself.
    pub fn match_with<T>(&self, handlers: Handlers<'_, T>) -> Result<T> {
        let key = self.value.key();
        match handlers.select(Some(key.as_ref())) {
            Arm::Tagged(handler) => {
                tracing::debug!(shape = %Shape::Enum, tag = %key, "dispatching to tagged handler");
                Ok(handler(self.value.to_value()))
            }
            Arm::Default(handler) => {
                tracing::debug!(shape = %Shape::Enum, tag = %key, "dispatching to default handler");
                Ok(handler(self.value.to_value()))
            }
            Arm::Unmatched => {
                tracing::warn!(shape = %Shape::Enum, tag = %key, "no handler for enum value");
                Err(MatchError::NoHandler {
                    shape: Shape::Enum,
                    tag: key.into_owned(),
                })
            }
        }
    }
}

impl TagMatcher for EnumMatcher {
    fn shape(&self) -> Shape {
        Shape::Enum
    }

    fn tag(&self) -> Option<Scalar> {
        Some(self.value.clone())
    }

    fn into_fn(&self) -> Dispatch {
        Dispatch::with(self.value.to_value())
    }
}
