//! Raw input values and scalar tags
//!
//! A [`RawValue`] is what the classifier accepts: something absent, a scalar,
//! or a record of named fields. Arrays have no matching strategy and are
//! rejected when converting from JSON.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::fmt;

/// Record type wrapped by record-shaped matchers
pub type Record = Map<String, Value>;

/// Scalar value: the tag of an enum match and the selector type of queries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value, keyed as `"true"` / `"false"`
    Bool(bool),
    /// Numeric value
    Number(Number),
    /// String value
    String(String),
    /// Infinite or NaN float, which has no JSON number form
    #[serde(skip_deserializing, serialize_with = "serialize_non_finite")]
    NonFinite(f64),
}

fn serialize_non_finite<S: Serializer>(f: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(f)
}

impl Scalar {
    /// Extract a scalar from a JSON value, if it is one
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) => Some(Scalar::String(s.clone())),
            _ => None,
        }
    }

    /// Handler-map key for this scalar
    ///
    /// Strings are used as-is, booleans become `"true"`/`"false"` and numbers
    /// render in their shortest decimal form, so `2.0` keys as `"2"`.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Scalar::String(s) => Cow::Borrowed(s),
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
            Scalar::Number(n) => Cow::Owned(number_key(n)),
            Scalar::NonFinite(f) => Cow::Owned(f.to_string()),
        }
    }

    /// Convert back into a JSON value
    ///
    /// Non-finite floats come out as their display text.
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::NonFinite(f) => Value::String(f.to_string()),
        }
    }

    /// Returns true if `value` is this scalar under strict equality
    pub fn matches_value(&self, value: &Value) -> bool {
        Scalar::from_value(value).is_some_and(|other| *self == other)
    }
}

fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        // -0 keys with 0, which it compares equal to
        if f == 0.0 {
            "0".to_string()
        } else {
            f.to_string()
        }
    } else {
        n.to_string()
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

// Strict equality: no cross-kind coercion, numbers compare by value
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::String(a), Scalar::String(b)) => a == b,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Number(a), Scalar::Number(b)) => numbers_equal(a, b),
            (Scalar::NonFinite(a), Scalar::NonFinite(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::String(s.clone())
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Scalar::Number(Number::from(n))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        match Number::from_f64(f) {
            Some(n) => Scalar::Number(n),
            None => Scalar::NonFinite(f),
        }
    }
}

impl From<f32> for Scalar {
    fn from(f: f32) -> Self {
        Scalar::from(f as f64)
    }
}

/// Input accepted by the classifier
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Null-equivalent value
    #[default]
    Absent,
    /// String, number or boolean
    Scalar(Scalar),
    /// Mapping of field name to value
    Record(Record),
}

impl RawValue {
    /// Convert a JSON value, rejecting kinds with no matching strategy
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(RawValue::Absent),
            Value::Bool(b) => Ok(RawValue::Scalar(Scalar::Bool(b))),
            Value::Number(n) => Ok(RawValue::Scalar(Scalar::Number(n))),
            Value::String(s) => Ok(RawValue::Scalar(Scalar::String(s))),
            Value::Object(map) => Ok(RawValue::Record(map)),
            Value::Array(_) => Err(MatchError::UnsupportedKind { kind: "array" }),
        }
    }

    /// Returns true for the null-equivalent value
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    /// Convert back into a JSON value
    pub fn to_value(&self) -> Value {
        match self {
            RawValue::Absent => Value::Null,
            RawValue::Scalar(s) => s.to_value(),
            RawValue::Record(r) => Value::Object(r.clone()),
        }
    }
}

impl TryFrom<Value> for RawValue {
    type Error = MatchError;

    fn try_from(value: Value) -> Result<Self> {
        RawValue::from_json(value)
    }
}

impl From<Scalar> for RawValue {
    fn from(s: Scalar) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<Record> for RawValue {
    fn from(r: Record) -> Self {
        RawValue::Record(r)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Absent, Into::into)
    }
}

macro_rules! raw_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(v: $t) -> Self {
                    RawValue::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

raw_from_scalar!(&str, String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
