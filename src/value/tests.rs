#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_strict_equality() {
    assert_eq!(Value::from(1), Value::from(1.0), "Integers and floats are the same number.");
    assert_eq!(Value::from(0.0), Value::from(-0.0), "Zero should equal negative zero.");
    assert_ne!(
        Value::Number(f64::NAN),
        Value::Number(f64::NAN),
        "NaN should never be strictly equal to itself."
    );
    assert_ne!(Value::from(1), Value::from("1"), "Strict equality shouldn't coerce.");
    assert_ne!(Value::Null, Value::Undefined, "Null and Undefined are different kinds.");
    assert_eq!(
        Value::from([1, 2]),
        Value::from(vec![1, 2]),
        "Arrays compare by their contents."
    );
}

#[test]
fn test_same_value_zero() {
    let nan = Value::Number(f64::NAN);
    assert!(nan.same_value_zero(&nan), "NaN should match itself.");
    assert!(Value::from(0.0).same_value_zero(&Value::from(-0.0)));
    assert!(
        Value::from([f64::NAN]).same_value_zero(&Value::from([f64::NAN])),
        "NaN should match itself inside arrays too."
    );
    assert!(!Value::from(1).same_value_zero(&Value::from("1")));
}

#[test]
fn test_function_identity() {
    let func = Function::new(|_| Value::Null);
    let other = Function::new(|_| Value::Null);
    assert_eq!(func, func.clone(), "Clones share the same closure.");
    assert_ne!(func, other, "Separate closures are never equal.");
}

#[test]
fn test_truthiness() {
    for falsy in [
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(-0.0),
        Value::Number(f64::NAN),
        Value::from(""),
    ] {
        assert!(!falsy.is_truthy(), "{falsy:?} should be falsy.");
    }

    for truthy in [
        Value::from(true),
        Value::from(-1),
        Value::from("0"),
        Value::Array(vec![]),
        Value::Object(Map::new()),
        Value::from(Function::new(|_| Value::Undefined)),
    ] {
        assert!(truthy.is_truthy(), "{truthy:?} should be truthy.");
    }
}

#[test]
fn test_kind() {
    assert_eq!(Value::from([1]).kind(), Kind::Array);
    assert_eq!(Value::Null.kind(), Kind::Null);
    assert_eq!(Value::Undefined.kind().to_string(), "undefined");
    assert_eq!(Value::from(1.5).kind().as_str(), "number");
    for (value, name) in [
        (Value::from([1]), "array"),
        (Value::Null, "null"),
        (Value::from(true), "boolean"),
        (Value::from("s"), "string"),
        (Value::Object(Map::new()), "object"),
        (Value::from(Function::new(|_| Value::Null)), "function"),
    ] {
        assert_eq!(value.kind().to_string(), name, "Kind should display as its lowercase name.");
        assert_eq!(value.kind().as_str(), name);
    }
}

#[test]
fn test_get() {
    let record: Value = [("name", Value::from("moe")), ("age", Value::from(40))]
        .into_iter()
        .collect();
    assert_eq!(record.get("name"), Value::from("moe"));
    assert_eq!(record.get("missing"), Value::Undefined, "Missing keys read as Undefined.");

    let arr = Value::from(["a", "b"]);
    assert_eq!(arr.get("length"), Value::from(2));
    assert_eq!(arr.get("1"), Value::from("b"));
    assert_eq!(arr.get("01"), Value::Undefined, "Leading zeros aren't indices.");
    assert_eq!(arr.get("2"), Value::Undefined);

    let string = Value::from("héllo");
    assert_eq!(string.get("length"), Value::from(5));
    assert_eq!(string.get("1"), Value::from("é"));

    assert_eq!(Value::Null.get("name"), Value::Undefined);
    assert_eq!(Value::from(5).get("length"), Value::Undefined);
}

#[test]
fn test_call() {
    let double = Value::from(Function::new(|args| {
        Value::from(args[0].as_f64().unwrap_or(f64::NAN) * 2.0)
    }));
    assert_eq!(double.call(&[Value::from(21)]), Value::from(42));

    assert_eq!(
        Value::Null.try_call(&[]),
        Err(NotCallable { found: Kind::Null }),
        "Calling a non-function should fail."
    );
    assert_panics!({ Value::from("not a function").call(&[]) });
}

#[test]
fn test_conversions() {
    assert_eq!(f64::try_from(Value::from(3)), Ok(3.0));
    assert_eq!(String::try_from(Value::from("a")), Ok(String::from("a")));
    assert_eq!(
        bool::try_from(Value::from("true")),
        Err(KindMismatch { expected: Kind::Boolean, found: Kind::String })
    );
    assert_eq!(
        Map::try_from(Value::from([1])).unwrap_err().to_string(),
        "Expected a value of type object, found array!"
    );
    assert_eq!(Value::from(()), Value::Null);

    assert_eq!(
        Value::from(1).try_call(&[]).unwrap_err().to_string(),
        "Value of type number is not a function!"
    );
}

#[test]
fn test_key() {
    assert_eq!(Key::Index(3).to_string(), "3");
    assert_eq!(Key::Name("x").to_string(), "x");
    assert_eq!(Key::from(2_usize).index(), Some(2));
    assert_eq!(Key::from("y").name(), Some("y"));
    assert_eq!(Key::Name("z").to_value(), Value::from("z"));
    assert!(Key::Index(0).is_index());
}

#[cfg(feature = "json")]
#[test]
fn test_json() {
    let value = Value::from(serde_json::json!({ "a": [1, 2.5, null], "b": "c" }));
    assert_eq!(value.get("a"), Value::from([Value::from(1), Value::from(2.5), Value::Null]));
    assert_eq!(value.get("b"), Value::from("c"));

    let back: serde_json::Value = Value::from([
        Value::from(1),
        Value::Undefined,
        Value::Number(f64::INFINITY),
    ])
    .into();
    assert_eq!(back, serde_json::json!([1, null, null]));
}
