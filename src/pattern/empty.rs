//! Matcher for absent values

use crate::error::{MatchError, Result};
use crate::pattern::{Dispatch, Handlers, Shape, TagMatcher};
use crate::value::Scalar;
use serde_json::Value;

/// Shared empty matcher; every absent value classifies to it
pub static EMPTY: EmptyMatcher = EmptyMatcher;

/// Matcher over an absent value
///
/// Nothing holds for an absent value: every query is `false`, including
/// the negated ones, and no payload is ever exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyMatcher;

impl EmptyMatcher {
    /// Always `None`
    pub fn value(&self) -> Option<&Scalar> {
        None
    }

    /// Always `fallback`
    pub fn value_or(&self, fallback: impl Into<Scalar>) -> Scalar {
        fallback.into()
    }

    /// Always the producer's result
    pub fn value_or_else<S, F>(&self, producer: F) -> Scalar
    where
        S: Into<Scalar>,
        F: FnOnce() -> S,
    {
        producer().into()
    }

    /// Invoke the default handler with `null`, ignoring tagged handlers
    pub fn match_with<T>(&self, handlers: Handlers<'_, T>) -> Result<T> {
        match handlers.into_default() {
            Some(handler) => {
                tracing::debug!(shape = %Shape::Empty, "dispatching to default handler");
                Ok(handler(Value::Null))
            }
            None => {
                tracing::warn!(shape = %Shape::Empty, "no default handler for absent value");
                Err(MatchError::MissingDefault { shape: Shape::Empty })
            }
        }
    }
}

impl TagMatcher for EmptyMatcher {
    fn shape(&self) -> Shape {
        Shape::Empty
    }

    fn tag(&self) -> Option<Scalar> {
        None
    }

    fn into_fn(&self) -> Dispatch {
        Dispatch::skip()
    }

    fn is_not(&self, _candidate: impl Into<Scalar>) -> bool {
        false
    }

    fn not_in<I, K>(&self, _candidates: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        false
    }
}
