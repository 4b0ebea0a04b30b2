//! Shape matchers and their dispatch machinery

pub mod discriminated;
pub mod dispatch;
pub mod empty;
pub mod enum_matcher;
pub mod handlers;
pub mod object;
pub mod traits;
pub mod variant;

pub use discriminated::*;
pub use dispatch::*;
pub use empty::*;
pub use enum_matcher::*;
pub use handlers::{Handler, Handlers, DEFAULT_KEY};
pub use object::*;
pub use traits::*;
pub use variant::*;

pub(crate) use handlers::Arm;

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Matching strategy assigned to a value at classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Absent value
    Empty,
    /// Scalar value
    Enum,
    /// Single-field tagged variant record
    Variant,
    /// Plain record
    Object,
    /// Record viewed through a discriminant field
    Discriminated,
}

impl Shape {
    /// Lowercase name of the shape
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Empty => "empty",
            Shape::Enum => "enum",
            Shape::Variant => "variant",
            Shape::Object => "object",
            Shape::Discriminated => "discriminated",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified value: exactly one matcher per shape
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// Absent value
    Empty(EmptyMatcher),
    /// Scalar value
    Enum(EnumMatcher),
    /// Tagged variant record
    Variant(VariantMatcher),
    /// Plain record
    Object(ObjectMatcher),
    /// Record viewed through a discriminant
    Discriminated(DiscriminatedMatcher),
}

impl Matcher {
    /// Shape of the wrapped matcher
    pub fn shape(&self) -> Shape {
        match self {
            Matcher::Empty(_) => Shape::Empty,
            Matcher::Enum(_) => Shape::Enum,
            Matcher::Variant(_) => Shape::Variant,
            Matcher::Object(_) => Shape::Object,
            Matcher::Discriminated(_) => Shape::Discriminated,
        }
    }

    /// Dispatch with the wrapped matcher's rules
    ///
    /// Plain objects have no tag of their own; matching one without naming a
    /// discriminant fails with [`MatchError::DiscriminantRequired`].
    pub fn match_with<T>(&self, handlers: Handlers<'_, T>) -> Result<T> {
        match self {
            Matcher::Empty(m) => m.match_with(handlers),
            Matcher::Enum(m) => m.match_with(handlers),
            Matcher::Variant(m) => m.match_with(handlers),
            Matcher::Object(_) => Err(MatchError::DiscriminantRequired),
            Matcher::Discriminated(m) => m.match_with(handlers),
        }
    }

    /// Dispatch records on their `key` field
    ///
    /// Objects and discriminated views are matched through `key`; every
    /// other shape ignores it and dispatches as [`Matcher::match_with`].
    pub fn match_on<T>(&self, key: &str, handlers: Handlers<'_, T>) -> Result<T> {
        match self.discriminate(key) {
            Some(view) => view.match_with(handlers),
            None => self.match_with(handlers),
        }
    }

    /// Discriminated view of a record-backed matcher, `None` for other shapes
    pub fn discriminate(&self, key: &str) -> Option<DiscriminatedMatcher> {
        match self {
            Matcher::Object(m) => Some(m.discriminate(key)),
            Matcher::Discriminated(m) => Some(DiscriminatedMatcher::new(m.record().clone(), key)),
            _ => None,
        }
    }

    /// Dispatcher over the natural payload of the wrapped shape
    pub fn into_fn(&self) -> Dispatch {
        match self {
            Matcher::Empty(m) => m.into_fn(),
            Matcher::Enum(m) => m.into_fn(),
            Matcher::Variant(m) => m.into_fn(),
            Matcher::Object(m) => m.into_fn(),
            Matcher::Discriminated(m) => m.into_fn(),
        }
    }

    /// Tag of the wrapped matcher as JSON; objects have none
    pub fn tag_value(&self) -> Option<Value> {
        match self {
            Matcher::Empty(_) | Matcher::Object(_) => None,
            Matcher::Enum(m) => m.tag().map(|s| s.to_value()),
            Matcher::Variant(m) => Some(Value::String(m.tag_name().to_owned())),
            Matcher::Discriminated(m) => m.tag_value().cloned(),
        }
    }

    /// Summary of the classification, suitable for logging or output
    pub fn report(&self) -> MatchReport {
        MatchReport {
            shape: self.shape(),
            tag: self.tag_value(),
            payload: self.into_fn().into_payload(),
        }
    }

    /// The empty matcher, if this is one
    pub fn as_empty(&self) -> Option<&EmptyMatcher> {
        match self {
            Matcher::Empty(m) => Some(m),
            _ => None,
        }
    }

    /// The enum matcher, if this is one
    pub fn as_enum(&self) -> Option<&EnumMatcher> {
        match self {
            Matcher::Enum(m) => Some(m),
            _ => None,
        }
    }

    /// The variant matcher, if this is one
    pub fn as_variant(&self) -> Option<&VariantMatcher> {
        match self {
            Matcher::Variant(m) => Some(m),
            _ => None,
        }
    }

    /// The object matcher, if this is one
    pub fn as_object(&self) -> Option<&ObjectMatcher> {
        match self {
            Matcher::Object(m) => Some(m),
            _ => None,
        }
    }

    /// The discriminated matcher, if this is one
    pub fn as_discriminated(&self) -> Option<&DiscriminatedMatcher> {
        match self {
            Matcher::Discriminated(m) => Some(m),
            _ => None,
        }
    }
}

impl From<DiscriminatedMatcher> for Matcher {
    fn from(m: DiscriminatedMatcher) -> Self {
        Matcher::Discriminated(m)
    }
}

/// Classification summary: shape, tag and natural payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Shape the value was classified as
    pub shape: Shape,
    /// Tag, if the shape has one and it is present
    pub tag: Option<Value>,
    /// Payload `into_fn` would hand over, if any
    pub payload: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> crate::value::Record {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Shape::Empty.to_string(), "empty");
        assert_eq!(Shape::Discriminated.as_str(), "discriminated");
        assert_eq!(serde_json::to_value(Shape::Variant).unwrap(), json!("variant"));
    }

    #[test]
    fn test_object_match_requires_discriminant() {
        let m = Matcher::Object(ObjectMatcher::new(record(json!({"kind": "a"}))));
        let err = m.match_with(Handlers::new().otherwise(|_| 0)).unwrap_err();
        assert!(matches!(err, MatchError::DiscriminantRequired));

        let handlers = Handlers::new().on("a", |_| 1).otherwise(|_| 0);
        assert_eq!(m.match_on("kind", handlers).unwrap(), 1);
    }

    #[test]
    fn test_match_on_ignores_key_for_scalars() {
        let m = Matcher::Enum(EnumMatcher::new("a"));
        let handlers = Handlers::new().on("a", |_| 1).otherwise(|_| 0);
        assert_eq!(m.match_on("kind", handlers).unwrap(), 1);
        assert!(m.discriminate("kind").is_none());
    }

    #[test]
    fn test_rediscriminate() {
        let view = DiscriminatedMatcher::new(record(json!({"kind": "a", "mode": "fast"})), "kind");
        let m = Matcher::from(view);
        let handlers = Handlers::new().on("fast", |p| p).otherwise(|_| json!(null));
        assert_eq!(m.match_on("mode", handlers).unwrap(), json!({"kind": "a"}));
    }

    #[test]
    fn test_report() {
        let m = Matcher::Variant(VariantMatcher::new("Circle", json!({"r": 2})));
        assert_eq!(
            m.report(),
            MatchReport {
                shape: Shape::Variant,
                tag: Some(json!("Circle")),
                payload: Some(json!({"r": 2})),
            }
        );

        let m = Matcher::Empty(EmptyMatcher);
        assert_eq!(
            serde_json::to_value(m.report()).unwrap(),
            json!({"shape": "empty", "tag": null, "payload": null})
        );
    }

    #[test]
    fn test_accessors() {
        let m = Matcher::Enum(EnumMatcher::new(1));
        assert!(m.as_enum().is_some());
        assert!(m.as_empty().is_none());
        assert!(m.as_variant().is_none());
        assert!(m.as_object().is_none());
        assert!(m.as_discriminated().is_none());
    }
}
