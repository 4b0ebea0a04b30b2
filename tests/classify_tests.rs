//! Classification tests

use rstest::rstest;
use serde::Serialize;
use serde_json::{json, Value};
use shape_match::{classify, classify_json, classify_serialize, Classifier, Handlers, MatchError, Shape, VariantTagPolicy};

#[rstest]
#[case::null(json!(null), Shape::Empty)]
#[case::string(json!("a"), Shape::Enum)]
#[case::empty_string(json!(""), Shape::Enum)]
#[case::integer(json!(2), Shape::Enum)]
#[case::float(json!(2.5), Shape::Enum)]
#[case::boolean(json!(false), Shape::Enum)]
#[case::uppercase_single(json!({"A": 1}), Shape::Variant)]
#[case::variant_with_null(json!({"None": null}), Shape::Variant)]
#[case::empty_name(json!({"": 1}), Shape::Object)]
#[case::numeric_name(json!({"1": 2}), Shape::Object)]
#[case::lowercase_single(json!({"circle": {"r": 2}}), Shape::Object)]
#[case::underscore_single(json!({"_A": 1}), Shape::Object)]
#[case::multi_field(json!({"A": 1, "B": 2}), Shape::Object)]
#[case::empty_record(json!({}), Shape::Object)]
fn test_classification(#[case] value: Value, #[case] expected: Shape) {
    assert_eq!(classify_json(value).unwrap().shape(), expected);
}

#[rstest]
#[case(json!([]))]
#[case(json!([1, 2, 3]))]
#[case(json!([{"A": 1}]))]
fn test_arrays_are_unsupported(#[case] value: Value) {
    let err = classify_json(value).unwrap_err();
    assert!(matches!(err, MatchError::UnsupportedKind { kind: "array" }));
}

#[test]
fn test_native_scalars_and_options() {
    assert_eq!(classify("x").shape(), Shape::Enum);
    assert_eq!(classify(String::from("x")).shape(), Shape::Enum);
    assert_eq!(classify(7u8).shape(), Shape::Enum);
    assert_eq!(classify(-1i64).shape(), Shape::Enum);
    assert_eq!(classify(0.5f32).shape(), Shape::Enum);
    assert_eq!(classify(Some(true)).shape(), Shape::Enum);
    assert_eq!(classify(None::<bool>).shape(), Shape::Empty);
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = Classifier::new();
    let value = json!({"kind": "a", "x": 1});
    let first = classifier.classify_json(value.clone()).unwrap();
    let second = classifier.classify_json(value).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_capitalised_plain_record_is_a_variant() {
    // Known ambiguity of the default naming convention
    let matcher = classify_json(json!({"Name": "Ada"})).unwrap();
    assert_eq!(matcher.shape(), Shape::Variant);

    let strict = Classifier::builder()
        .variant_tag(VariantTagPolicy::Pattern("^(Some|Ok|Err)$".to_string()))
        .build()
        .unwrap();
    assert_eq!(strict.classify_json(json!({"Name": "Ada"})).unwrap().shape(), Shape::Object);
    assert_eq!(strict.classify_json(json!({"Ok": 1})).unwrap().shape(), Shape::Variant);
}

#[derive(Serialize)]
enum Geometry {
    Circle { r: i64 },
    Rect(i64, i64),
    Point,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Event {
    Click { x: i64, y: i64 },
    Scroll { delta: i64 },
}

fn area(shape: &Geometry) -> i64 {
    classify_serialize(shape)
        .unwrap()
        .match_with(
            Handlers::new()
                .on("Circle", |p| 3 * p["r"].as_i64().unwrap().pow(2))
                .on("Rect", |p| p[0].as_i64().unwrap() * p[1].as_i64().unwrap())
                .otherwise(|_| 0),
        )
        .unwrap()
}

#[test]
fn test_externally_tagged_enums() {
    assert_eq!(classify_serialize(&Geometry::Circle { r: 1 }).unwrap().shape(), Shape::Variant);
    assert_eq!(classify_serialize(&Geometry::Point).unwrap().shape(), Shape::Enum);

    assert_eq!(area(&Geometry::Circle { r: 2 }), 12);
    assert_eq!(area(&Geometry::Rect(2, 5)), 10);
    assert_eq!(area(&Geometry::Point), 0);
}

#[test]
fn test_internally_tagged_enums() {
    let matcher = classify_serialize(&Event::Click { x: 1, y: 2 }).unwrap();
    assert_eq!(matcher.shape(), Shape::Object);

    let result = matcher
        .match_on(
            "kind",
            Handlers::new()
                .on("click", |p| p)
                .on("scroll", |_| json!(null))
                .otherwise(|_| json!(null)),
        )
        .unwrap();
    assert_eq!(result, json!({"x": 1, "y": 2}));

    let matcher = classify_serialize(&Event::Scroll { delta: -3 }).unwrap();
    let view = matcher.discriminate("kind").unwrap();
    assert_eq!(view.bare_payload(), json!({"delta": -3}));
}
