use log::trace;

use crate::value::{Key, Value};

/// Invokes `func` once for every element of `collection`, passing `(element, key, collection)`.
///
/// Arrays are visited in ascending index order and objects in their key order. Strings are
/// visited character by character, each character as a one-character string. Any other value has
/// no elements, so `func` is never invoked.
///
/// # Examples
/// ```
/// # use lowbar::{Value, each};
/// let mut seen = Vec::new();
/// each(&Value::from(["a", "b"]), |value, key, _| seen.push(format!("{key}={value:?}")));
/// assert_eq!(seen, ["0=String(\"a\")", "1=String(\"b\")"]);
/// ```
pub fn each<F>(collection: &Value, mut func: F)
where
    F: FnMut(&Value, Key<'_>, &Value),
{
    match collection {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                func(item, Key::Index(i), collection);
            }
        },
        Value::Object(map) => {
            for (key, item) in map {
                func(item, Key::Name(key), collection);
            }
        },
        Value::String(s) => {
            for (i, c) in s.chars().enumerate() {
                func(&Value::from(c), Key::Index(i), collection);
            }
        },
        other => trace!("each: nothing to traverse in a value of type {}", other.kind()),
    }
}

/// Collects the result of invoking `func` on every element of `collection` into a new array, in
/// traversal order. Object keys are discarded.
///
/// # Examples
/// ```
/// # use lowbar::{Value, map};
/// let doubled = map(&Value::from([1, 2, 3]), |value, _, _| value.as_f64().unwrap_or(0.0) * 2.0);
/// assert_eq!(doubled, [Value::from(2), Value::from(4), Value::from(6)]);
/// ```
pub fn map<F, R>(collection: &Value, mut func: F) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>, &Value) -> R,
    R: Into<Value>,
{
    let mut mapped = Vec::new();
    each(collection, |value, key, collection| {
        mapped.push(func(value, key, collection).into())
    });
    mapped
}
