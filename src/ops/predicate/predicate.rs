use crate::helpers::identity;
use crate::ops::predicate::Outcome;
use crate::ops::traverse::each;
use crate::value::{Key, Value};

fn identity_callback(value: &Value, _: Key<'_>, _: &Value) -> Value {
    identity(value.clone())
}

fn collect_outcomes<F, R>(collection: &Value, mut func: F) -> Vec<bool>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Outcome,
{
    let mut outcomes = Vec::new();
    each(collection, |value, key, collection| {
        outcomes.push(func(value, key, collection).is_true())
    });
    outcomes
}

/// Returns true if `func` returns exactly `true` for every element of `collection`.
///
/// `func` is invoked on every element before the result is decided. An empty collection always
/// returns true. See [`every_identity`] for the form without a callback.
///
/// # Examples
/// ```
/// # use lowbar::{Value, every};
/// let arr = Value::from([2, 4, 6]);
/// assert!(every(&arr, |value, _, _| value.as_f64().is_some_and(|n| n % 2.0 == 0.0)));
/// assert!(!every(&arr, |value, _, _| value.clone()), "2 is truthy, but it isn't `true`.");
/// ```
pub fn every<F, R>(collection: &Value, func: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Outcome,
{
    collect_outcomes(collection, func).into_iter().all(identity)
}

/// [`every`] with the callback omitted: [`identity`] stands in for it, so every element must
/// itself be `true`.
///
/// # Examples
/// ```
/// # use lowbar::{Value, every_identity};
/// assert!(every_identity(&Value::from([true, true])));
/// assert!(!every_identity(&Value::from([1, 1])));
/// ```
pub fn every_identity(collection: &Value) -> bool {
    every(collection, identity_callback)
}

/// Returns true if `func` returns exactly `true` for at least one element of `collection`.
///
/// `func` is invoked on every element before the result is decided. An empty collection always
/// returns false. See [`some_identity`] for the form without a callback.
///
/// # Examples
/// ```
/// # use lowbar::{Value, some};
/// let arr = Value::from(["a", "b"]);
/// assert!(some(&arr, |value, _, _| value.as_str() == Some("b")));
/// assert!(!some(&Value::Array(vec![]), |_, _, _| true));
/// ```
pub fn some<F, R>(collection: &Value, func: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Outcome,
{
    collect_outcomes(collection, func).into_iter().any(identity)
}

/// [`some`] with the callback omitted: at least one element must itself be `true`.
///
/// # Examples
/// ```
/// # use lowbar::{Value, some_identity};
/// assert!(some_identity(&Value::from([false, true])));
/// assert!(!some_identity(&Value::Array(vec![])));
/// ```
pub fn some_identity(collection: &Value) -> bool {
    some(collection, identity_callback)
}

/// Returns a new array of the elements of `array` for which `func(element, index, array)` is
/// truthy, in their original order.
///
/// # Examples
/// ```
/// # use lowbar::{Value, filter};
/// let arr = [Value::from(1), Value::from(2), Value::from(3), Value::from(4)];
/// assert_eq!(filter(&arr, |_, i, _| i % 2 == 0), [Value::from(1), Value::from(3)]);
/// ```
pub fn filter<F, R>(array: &[Value], mut func: F) -> Vec<Value>
where
    F: FnMut(&Value, usize, &[Value]) -> R,
    R: Outcome,
{
    let mut filtered = Vec::new();
    for (i, element) in array.iter().enumerate() {
        if func(element, i, array).is_truthy() {
            filtered.push(element.clone());
        }
    }
    filtered
}

/// The complement of [`filter`]: returns the elements of `array` for which `func` is falsy.
///
/// # Examples
/// ```
/// # use lowbar::{Value, reject};
/// let arr = [Value::from(0), Value::from("a"), Value::Null];
/// assert_eq!(reject(&arr, |value, _, _| value.clone()), [Value::from(0), Value::Null]);
/// ```
pub fn reject<F, R>(array: &[Value], mut func: F) -> Vec<Value>
where
    F: FnMut(&Value, usize, &[Value]) -> R,
    R: Outcome,
{
    filter(array, |element, i, array| !func(element, i, array).is_truthy())
}

/// Splits `array` into the elements for which `func` is truthy and those for which it isn't,
/// returned as `(passed, failed)`. Both keep their original relative order and every element lands
/// in exactly one of them.
///
/// # Examples
/// ```
/// # use lowbar::{Value, partition};
/// let arr = [Value::from(1), Value::from(2), Value::from(3)];
/// let (odd, even) = partition(&arr, |value, _, _| value.as_f64().is_some_and(|n| n % 2.0 == 1.0));
/// assert_eq!(odd, [Value::from(1), Value::from(3)]);
/// assert_eq!(even, [Value::from(2)]);
/// ```
pub fn partition<F, R>(array: &[Value], mut func: F) -> (Vec<Value>, Vec<Value>)
where
    F: FnMut(&Value, usize, &[Value]) -> R,
    R: Outcome,
{
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for (i, element) in array.iter().enumerate() {
        if func(element, i, array).is_truthy() {
            passed.push(element.clone());
        } else {
            failed.push(element.clone());
        }
    }
    (passed, failed)
}
