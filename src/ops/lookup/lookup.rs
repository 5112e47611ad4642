use crate::value::Value;

/// Returns the lowest index at which `value` is strictly equal to an element of `array`, or `-1`
/// if there is none.
///
/// # Examples
/// ```
/// # use lowbar::{Value, index_of};
/// let arr = [Value::from(1), Value::from("1"), Value::from(1)];
/// assert_eq!(index_of(&arr, &Value::from(1)), 0);
/// assert_eq!(index_of(&arr, &Value::from("1")), 1);
/// assert_eq!(index_of(&arr, &Value::from(true)), -1);
/// ```
pub fn index_of(array: &[Value], value: &Value) -> isize {
    array
        .iter()
        .position(|element| element == value)
        .map_or(-1, |i| i as isize)
}

/// Returns true if `value` occurs anywhere in `array`. Unlike [`index_of`], `NaN` matches `NaN`.
///
/// # Examples
/// ```
/// # use lowbar::{Value, contains};
/// let nan = Value::Number(f64::NAN);
/// assert!(contains(&[nan.clone()], &nan));
/// assert!(!contains(&[Value::from(0)], &Value::from("0")));
/// ```
pub fn contains(array: &[Value], value: &Value) -> bool {
    array.iter().any(|element| element.same_value_zero(value))
}

/// Returns a new array holding each distinct element of `array` once, in order of first
/// occurrence. Duplicates are detected with the same strict equality as [`index_of`], so every
/// `NaN` is kept.
///
/// # Time Complexity
/// `O(n²)` in the length of `array`.
pub fn unique(array: &[Value]) -> Vec<Value> {
    let mut distinct = Vec::new();
    for element in array {
        if index_of(&distinct, element) == -1 {
            distinct.push(element.clone());
        }
    }
    distinct
}
