use log::trace;

use crate::value::{Map, Value};

/// Returns a new array holding `property` read off every element of `array`. Elements without the
/// property, or that aren't records at all, contribute [`Undefined`](Value::Undefined).
///
/// See [`Value::get`] for how the property is read.
///
/// # Examples
/// ```
/// # use lowbar::{Value, pluck};
/// let people: Vec<Value> = ["moe", "larry"]
///     .into_iter()
///     .map(|name| [("name", Value::from(name))].into_iter().collect())
///     .collect();
/// assert_eq!(pluck(&people, "name"), [Value::from("moe"), Value::from("larry")]);
/// assert_eq!(pluck(&people, "age"), [Value::Undefined, Value::Undefined]);
/// ```
pub fn pluck(array: &[Value], property: &str) -> Vec<Value> {
    array
        .iter()
        .map(|element| {
            if !matches!(element, Value::Object(_) | Value::Array(_) | Value::String(_)) {
                trace!("pluck: reading {property:?} off a value of type {}", element.kind());
            }
            element.get(property)
        })
        .collect()
}

/// Folds `array` into a single value from left to right, calling `func(accumulator, element,
/// index)` and keeping its result as the next accumulator.
///
/// If `seed` is given, it's the initial accumulator and folding starts at index 0. If `seed` is
/// omitted ([`Undefined`](Value::Undefined)), the first element is the initial accumulator and
/// folding starts at index 1, so an empty array yields `Undefined` and a single element is
/// returned untouched.
///
/// # Examples
/// ```
/// # use lowbar::{Value, reduce};
/// let sum = |acc: Value, element: &Value, _| {
///     acc.as_f64().unwrap_or(0.0) + element.as_f64().unwrap_or(0.0)
/// };
/// let arr = [Value::from(1), Value::from(2), Value::from(3)];
/// assert_eq!(reduce(&arr, sum, Value::Undefined), Value::from(6));
/// assert_eq!(reduce(&arr, sum, 10), Value::from(16));
/// assert_eq!(reduce(&[], sum, 0), Value::from(0));
/// ```
pub fn reduce<F, R>(array: &[Value], mut func: F, seed: impl Into<Value>) -> Value
where
    F: FnMut(Value, &Value, usize) -> R,
    R: Into<Value>,
{
    let (mut accumulator, start) = match seed.into() {
        Value::Undefined => match array.first() {
            Some(element) => (element.clone(), 1),
            None => {
                trace!("reduce: empty array without a seed");
                return Value::Undefined;
            },
        },
        seed => (seed, 0),
    };

    for (i, element) in array.iter().enumerate().skip(start) {
        accumulator = func(accumulator, element, i).into();
    }
    accumulator
}

/// Copies every entry of each source into `object`, from left to right, so that later sources
/// overwrite earlier ones and all sources overwrite the entries `object` already had. Returns
/// `object` itself.
///
/// # Examples
/// ```
/// # use lowbar::{Map, Value, extend};
/// let mut object = Map::from([("a".to_string(), Value::from(1))]);
/// let b = Map::from([("b".to_string(), Value::from(2))]);
/// let a = Map::from([("a".to_string(), Value::from(3))]);
/// let extended = extend(&mut object, [&b, &a]);
/// assert_eq!(extended.get("a"), Some(&Value::from(3)));
/// assert_eq!(extended.get("b"), Some(&Value::from(2)));
/// ```
pub fn extend<'a, 'b>(
    object: &'a mut Map,
    sources: impl IntoIterator<Item = &'b Map>,
) -> &'a mut Map {
    let mut merged = 0;
    for source in sources {
        for (key, value) in source {
            object.insert(key.clone(), value.clone());
        }
        merged += 1;
    }
    trace!("extend: merged {merged} sources into an object of {} keys", object.len());
    object
}
