use log::trace;

use crate::value::Value;

/// Resolves a count argument against an array of length `len`. Returns [`None`] when `number`
/// isn't numeric, otherwise the number of elements to take.
fn count(number: &Value, len: usize) -> Option<usize> {
    let n = number.as_f64()?;
    Some(if n.is_nan() || n <= 0.0 {
        0
    } else if n > len as f64 {
        len
    } else {
        // Partial counts take the partial element too.
        n.ceil() as usize
    })
}

/// Returns the first `number` elements of `array` as a new array.
///
/// - If `array` isn't an array, returns an empty array.
/// - If `number` is omitted ([`Undefined`](Value::Undefined)) or not a number, returns the first
///   element itself, or `Undefined` if there is none.
/// - If `number` is greater than the length of `array`, returns the whole array.
/// - If `number` is zero, negative or `NaN`, returns an empty array.
///
/// # Examples
/// ```
/// # use lowbar::{Value, first};
/// let arr = Value::from([1, 2, 3, 4]);
/// assert_eq!(first(&arr, 2), Value::from([1, 2]));
/// assert_eq!(first(&arr, 10), arr);
/// assert_eq!(first(&arr, Value::Undefined), Value::from(1));
/// assert_eq!(first(&Value::from("not array"), 2), Value::Array(vec![]));
/// ```
pub fn first(array: &Value, number: impl Into<Value>) -> Value {
    let Value::Array(items) = array else {
        trace!("first: expected an array, found {}", array.kind());
        return Value::Array(Vec::new());
    };

    match count(&number.into(), items.len()) {
        Some(n) => Value::Array(items[..n].to_vec()),
        None => items.first().cloned().unwrap_or_default(),
    }
}

/// Returns the last `number` elements of `array` as a new array, in their original order.
///
/// Follows the same rules as [`first`], but from the other end: when `number` isn't a number, the
/// last element itself is returned.
///
/// # Examples
/// ```
/// # use lowbar::{Value, last};
/// let arr = Value::from([1, 2, 3, 4]);
/// assert_eq!(last(&arr, 2), Value::from([3, 4]));
/// assert_eq!(last(&arr, -1), Value::Array(vec![]));
/// assert_eq!(last(&arr, Value::Undefined), Value::from(4));
/// ```
pub fn last(array: &Value, number: impl Into<Value>) -> Value {
    let Value::Array(items) = array else {
        trace!("last: expected an array, found {}", array.kind());
        return Value::Array(Vec::new());
    };

    match count(&number.into(), items.len()) {
        Some(n) => Value::Array(items[items.len() - n..].to_vec()),
        None => items.last().cloned().unwrap_or_default(),
    }
}
