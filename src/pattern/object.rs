//! Matcher for plain records

use crate::error::Result;
use crate::pattern::{DiscriminatedMatcher, Dispatch, Handlers, Shape};
use crate::value::Record;
use serde_json::Value;

/// Matcher over a record with no discriminant selected
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMatcher {
    record: Record,
}

impl ObjectMatcher {
    /// Create a matcher over `record`
    pub fn new(record: Record) -> Self {
        Self { record }
    }

    /// Always [`Shape::Object`]
    pub fn shape(&self) -> Shape {
        Shape::Object
    }

    /// The wrapped record
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Dispatcher over the whole record; a record is never an empty payload
    pub fn into_fn(&self) -> Dispatch {
        Dispatch::with(Value::Object(self.record.clone()))
    }

    /// Dispatcher over the sub-record holding exactly `keys`
    ///
    /// Skips the handler if any named field is missing or `null`. With no
    /// keys the handler always runs and receives `{}`.
    pub fn catch<I, K>(&self, keys: I) -> Dispatch
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut picked = Record::new();
        for key in keys {
            let key = key.as_ref();
            match self.record.get(key) {
                Some(value) if !value.is_null() => {
                    picked.insert(key.to_owned(), value.clone());
                }
                _ => return Dispatch::skip(),
            }
        }
        Dispatch::with(Value::Object(picked))
    }

    /// View the record through its `key` field
    pub fn discriminate(&self, key: impl Into<String>) -> DiscriminatedMatcher {
        DiscriminatedMatcher::new(self.record.clone(), key)
    }

    /// Shorthand for `discriminate(key).match_with(handlers)`
    pub fn match_on<T>(&self, key: impl Into<String>, handlers: Handlers<'_, T>) -> Result<T> {
        self.discriminate(key).match_with(handlers)
    }
}
