//! Property-based tests for classification and dispatch
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use shape_match::{classify, classify_json, Handlers, Matcher, Scalar, Shape, TagMatcher};

// Strategy for generating field names of either case
fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_0-9]{0,12}".prop_map(|s| s.to_string())
}

// Strategy for generating scalar JSON values
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-zA-Z0-9 _./-]{0,20}".prop_map(|s| json!(s)),
    ]
}

// Strategy for generating field values, including null and arrays
fn field_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        scalar_strategy(),
        prop::collection::vec(scalar_strategy(), 0..4).prop_map(Value::Array),
    ]
}

// Strategy for generating records
fn record_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(field_name_strategy(), field_value_strategy(), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #[test]
    fn scalars_classify_as_enum(value in scalar_strategy()) {
        let matcher = classify_json(value.clone()).unwrap();
        prop_assert_eq!(matcher.shape(), Shape::Enum);

        let echoed = matcher.match_with(Handlers::new().otherwise(|v| v)).unwrap();
        prop_assert_eq!(echoed, value);
    }

    #[test]
    fn records_classify_by_field_set(record in record_strategy()) {
        let expected = match record.keys().next() {
            Some(name) if record.len() == 1 && name.starts_with(|c: char| c.is_ascii_uppercase()) => {
                Shape::Variant
            }
            _ => Shape::Object,
        };
        let matcher = classify_json(Value::Object(record)).unwrap();
        prop_assert_eq!(matcher.shape(), expected);
    }

    #[test]
    fn enum_dispatch_selects_own_key(value in scalar_strategy()) {
        let scalar = Scalar::from_value(&value).unwrap();
        let handlers = Handlers::new()
            .otherwise(|_| "miss")
            .on(scalar.clone(), |_| "hit");
        prop_assert_eq!(classify(scalar).match_with(handlers).unwrap(), "hit");
    }

    #[test]
    fn queries_are_idempotent(value in scalar_strategy(), other in scalar_strategy()) {
        let matcher = classify_json(value).unwrap();
        let m = matcher.as_enum().unwrap();
        let is = m.is(Scalar::from_value(&other).unwrap());
        let is_in = m.is_in([Scalar::from_value(&other).unwrap()]);
        for _ in 0..3 {
            prop_assert_eq!(m.is(Scalar::from_value(&other).unwrap()), is);
            prop_assert_eq!(m.is_in([Scalar::from_value(&other).unwrap()]), is_in);
            prop_assert_eq!(m.is_not(Scalar::from_value(&other).unwrap()), !is);
        }
    }

    #[test]
    fn discriminated_partition(record in record_strategy(), key in field_name_strategy()) {
        let matcher = classify_json(Value::Object(record.clone())).unwrap();
        let view = match &matcher {
            Matcher::Object(m) => m.discriminate(key.clone()),
            _ => return Ok(()),
        };

        let tagged = view.tag().map(|tag| tag.key().into_owned());
        let handlers = match &tagged {
            Some(tag) => Handlers::new().otherwise(|p| (false, p)).on(tag.as_str(), |p| (true, p)),
            None => Handlers::new().otherwise(|p| (false, p)),
        };
        let (specific, payload) = view.match_with(handlers).unwrap();

        if specific {
            let mut bare = record.clone();
            bare.remove(&key);
            prop_assert_eq!(payload, Value::Object(bare));
        } else {
            prop_assert_eq!(payload, Value::Object(record));
        }
    }

    #[test]
    fn object_catch_payload_has_exactly_named_keys(record in record_strategy()) {
        let keys: Vec<String> = record
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, _)| k.clone())
            .collect();
        if let Matcher::Object(m) = classify_json(Value::Object(record)).unwrap() {
            let picked = m.catch(&keys).apply(|p| p).unwrap();
            let picked = picked.as_object().unwrap();
            prop_assert_eq!(picked.len(), keys.len());
            prop_assert!(keys.iter().all(|k| picked.contains_key(k)));
        }
    }
}
