#![cfg(test)]

use super::*;
use crate::value::Value;

#[test]
fn test_index_of() {
    let arr = [Value::from("a"), Value::from("b"), Value::from("a")];
    assert_eq!(index_of(&arr, &Value::from("a")), 0, "The lowest index should be returned.");
    assert_eq!(index_of(&arr, &Value::from("b")), 1);
    assert_eq!(index_of(&arr, &Value::from("c")), -1);
    assert_eq!(index_of(&[], &Value::Undefined), -1);
}

#[test]
fn test_index_of_strict() {
    let arr = [Value::from(0), Value::Null, Value::from(false)];
    assert_eq!(index_of(&arr, &Value::from("0")), -1, "Strings shouldn't match numbers.");
    assert_eq!(index_of(&arr, &Value::Undefined), -1, "Undefined shouldn't match Null.");
    assert_eq!(index_of(&arr, &Value::from(false)), 2);
    assert_eq!(index_of(&arr, &Value::from(-0.0)), 0, "Negative zero should match zero.");
}

#[test]
fn test_contains() {
    let arr = [Value::from(1), Value::from("two"), Value::from([3])];
    assert!(contains(&arr, &Value::from("two")));
    assert!(contains(&arr, &Value::from([3])));
    assert!(!contains(&arr, &Value::from(2)));
    assert!(!contains(&[], &Value::Undefined));
}

#[test]
fn test_nan_divergence() {
    let nan = Value::Number(f64::NAN);
    let arr = [nan.clone()];
    assert!(contains(&arr, &nan), "contains should match NaN with itself.");
    assert_eq!(index_of(&arr, &nan), -1, "index_of should never match NaN.");
}

#[test]
fn test_unique() {
    let arr = [
        Value::from(1),
        Value::from(2),
        Value::from(1),
        Value::from("1"),
        Value::from(3),
        Value::from(2),
    ];
    assert_eq!(
        unique(&arr),
        [Value::from(1), Value::from(2), Value::from("1"), Value::from(3)],
        "Duplicates should be removed, keeping first occurrences in order."
    );
    assert!(unique(&[]).is_empty());
}

#[test]
fn test_unique_nan() {
    let nan = Value::Number(f64::NAN);
    assert_eq!(
        unique(&[nan.clone(), nan]).len(),
        2,
        "NaN is never strictly equal to itself, so it's never a duplicate."
    );
}
