//! Single-value helpers.

use crate::value::Value;

/// Returns its argument unchanged. Used as the callback of [`every_identity`](crate::every_identity)
/// and [`some_identity`](crate::some_identity).
///
/// # Examples
/// ```
/// # use lowbar::{Value, identity};
/// assert_eq!(identity(Value::from(3)), Value::from(3));
/// ```
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns the name of the category `value` belongs to: `"array"` for arrays, `"null"` for
/// [`Null`](Value::Null), and otherwise one of `"undefined"`, `"boolean"`, `"number"`,
/// `"string"`, `"object"` or `"function"`.
///
/// # Examples
/// ```
/// # use lowbar::{Value, type_of};
/// assert_eq!(type_of(&Value::from([1, 2])), "array");
/// assert_eq!(type_of(&Value::Null), "null");
/// assert_eq!(type_of(&Value::Undefined), "undefined");
/// assert_eq!(type_of(&Value::from("abc")), "string");
/// ```
pub const fn type_of(value: &Value) -> &'static str {
    value.kind().as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Map};

    #[test]
    fn test_type_of() {
        assert_eq!(type_of(&Value::from(1)), "number");
        assert_eq!(type_of(&Value::from(true)), "boolean");
        assert_eq!(type_of(&Value::Object(Map::new())), "object");
        assert_eq!(type_of(&Value::from(Function::new(|_| Value::Undefined))), "function");
        assert_eq!(
            type_of(&Value::Array(vec![])),
            "array",
            "Arrays shouldn't be reported as objects."
        );
    }

    #[test]
    fn test_identity() {
        let value = Value::from([1, 2, 3]);
        assert_eq!(identity(value.clone()), value);
        assert_eq!(identity("same"), "same");
    }
}
