//! Handler maps keyed by tag

use crate::error::{MatchError, Result};
use crate::value::Scalar;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Reserved key of the default handler
pub const DEFAULT_KEY: &str = "_";

/// A one-argument handler receiving the matched payload
pub type Handler<'a, T> = Box<dyn FnOnce(Value) -> T + 'a>;

/// Mapping from tag key to handler, with an optional default under `_`
///
/// Keys are normalized through [`Scalar::key`], so `.on(2, ..)` and
/// `.on("2", ..)` name the same arm and `.on(true, ..)` is stored under
/// `"true"`. Registering a tag twice keeps the later handler.
pub struct Handlers<'a, T> {
    arms: HashMap<String, Handler<'a, T>>,
}

/// Arm chosen for a lookup
pub(crate) enum Arm<'a, T> {
    /// Handler registered for the looked-up key
    Tagged(Handler<'a, T>),
    /// Default handler
    Default(Handler<'a, T>),
    /// Neither exists
    Unmatched,
}

impl<'a, T> Handlers<'a, T> {
    /// Create an empty handler map
    pub fn new() -> Self {
        Self {
            arms: HashMap::new(),
        }
    }

    /// Register the handler for `tag`
    pub fn on<K, F>(mut self, tag: K, handler: F) -> Self
    where
        K: Into<Scalar>,
        F: FnOnce(Value) -> T + 'a,
    {
        let key = tag.into().key().into_owned();
        self.arms.insert(key, Box::new(handler));
        self
    }

    /// Register the default handler
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(Value) -> T + 'a,
    {
        self.arms.insert(DEFAULT_KEY.to_string(), Box::new(handler));
        self
    }

    /// Returns true if a default handler is registered
    pub fn has_default(&self) -> bool {
        self.arms.contains_key(DEFAULT_KEY)
    }

    /// Returns true if `tag` has its own handler
    pub fn handles(&self, tag: impl Into<Scalar>) -> bool {
        self.arms.contains_key(tag.into().key().as_ref())
    }

    /// Registered keys in sorted order, default included
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.arms.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered arms, default included
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Returns true if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Check that every tag in `tags` has a handler, or that a default exists
    pub fn ensure_exhaustive<I, K>(&self, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        if self.has_default() {
            return Ok(());
        }

        let mut missing: Vec<String> = tags
            .into_iter()
            .map(|tag| tag.into().key().into_owned())
            .filter(|key| !self.arms.contains_key(key))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort_unstable();
            missing.dedup();
            Err(MatchError::NonExhaustive { missing })
        }
    }

    /// Take the arm for `key`, falling back to the default
    pub(crate) fn select(mut self, key: Option<&str>) -> Arm<'a, T> {
        if let Some(handler) = key.and_then(|k| self.arms.remove(k)) {
            return Arm::Tagged(handler);
        }
        match self.arms.remove(DEFAULT_KEY) {
            Some(handler) => Arm::Default(handler),
            None => Arm::Unmatched,
        }
    }

    /// Take the default handler, ignoring every tagged arm
    pub(crate) fn into_default(mut self) -> Option<Handler<'a, T>> {
        self.arms.remove(DEFAULT_KEY)
    }
}

impl<T> Default for Handlers<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Handlers<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers").field("keys", &self.keys()).finish()
    }
}
