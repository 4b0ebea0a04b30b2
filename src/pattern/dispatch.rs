//! Deferred single-handler dispatch
//!
//! [`Dispatch`] is what `into_fn` and `catch` hand back: the payload a
//! handler would receive, or nothing when the handler must be skipped.
//! Applying it returns `None` for a skip and `Some` for a handler result, so
//! "no data" never collides with a handler that itself returns null.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Returns true when a payload carries nothing worth handing to a handler
///
/// A payload is empty when it is `null` or deep-equal to an empty array.
/// Empty objects and empty strings are payloads like any other.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// One-argument dispatcher over an optional payload
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a dispatch does nothing until applied to a handler"]
pub struct Dispatch {
    payload: Option<Value>,
}

impl Dispatch {
    /// Dispatcher that invokes its handler with `payload`
    pub(crate) fn with(payload: Value) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Dispatcher that never invokes its handler
    pub(crate) fn skip() -> Self {
        Self { payload: None }
    }

    /// Dispatcher that skips empty payloads
    pub(crate) fn non_empty(payload: &Value) -> Self {
        if is_empty_payload(payload) {
            Self::skip()
        } else {
            Self::with(payload.clone())
        }
    }

    /// Invoke `handler` with the payload, or return `None` without calling it
    pub fn apply<T, F>(self, handler: F) -> Option<T>
    where
        F: FnOnce(Value) -> T,
    {
        self.payload.map(handler)
    }

    /// Deserialize the payload into `D` before invoking `handler`
    pub fn apply_as<D, T, F>(self, handler: F) -> Result<Option<T>>
    where
        D: DeserializeOwned,
        F: FnOnce(D) -> T,
    {
        match self.payload {
            Some(payload) => Ok(Some(handler(serde_json::from_value(payload)?))),
            None => Ok(None),
        }
    }

    /// Returns true if applying this dispatch would skip the handler
    pub fn is_skipped(&self) -> bool {
        self.payload.is_none()
    }

    /// Payload the handler would receive
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Consume the dispatch, returning the payload
    pub fn into_payload(self) -> Option<Value> {
        self.payload
    }
}
