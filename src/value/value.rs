use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::ptr;
use std::rc::Rc;

use derive_more::IsVariant;

use crate::util::result::ResultExtension;
use crate::value::{Kind, KindMismatch, NotCallable};

/// A mapping of string keys to values. Keys enumerate in ascending order, which is the key order
/// every traversal over an [`Object`](Value::Object) observes.
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value, the element type of every collection this crate operates on.
///
/// # Equality
/// [`PartialEq`] implements strict equality: values must be of the same [`Kind`] and hold the same
/// value. Numbers compare as IEEE floats, so `NaN` is never equal to itself and `0.0 == -0.0`.
/// Arrays and objects compare by their contents and functions compare by identity. See
/// [`Value::same_value_zero`] for the variant where `NaN` matches itself.
#[derive(Debug, Clone, Default, IsVariant)]
pub enum Value {
    /// The missing value marker.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Function(Function),
}

impl Value {
    /// Returns the [`Kind`] of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Function(_) => Kind::Function,
        }
    }

    /// Returns true unless the value is one of `Undefined`, `Null`, `false`, `0`, `-0`, `NaN` or
    /// the empty string. Empty arrays and objects are truthy.
    ///
    /// # Examples
    /// ```
    /// # use lowbar::Value;
    /// assert!(Value::from("a").is_truthy());
    /// assert!(Value::Array(vec![]).is_truthy());
    /// assert!(!Value::Number(f64::NAN).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Compares two values like `==` does, except that `NaN` is considered equal to `NaN`, at any
    /// depth.
    ///
    /// # Examples
    /// ```
    /// # use lowbar::Value;
    /// let nan = Value::Number(f64::NAN);
    /// assert!(nan != nan);
    /// assert!(nan.same_value_zero(&nan));
    /// ```
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.same_value_zero(b))
            },
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|((ka, va), (kb, vb))| ka == kb && va.same_value_zero(vb))
            },
            _ => self == other,
        }
    }

    /// Reads `property` off this value, returning [`Value::Undefined`] if there is nothing there.
    ///
    /// Objects look up the key. Arrays and strings answer `"length"` and decimal indices, strings
    /// yielding one-character strings. Every other read, including reads off `Null` and
    /// `Undefined`, yields `Undefined`.
    pub fn get(&self, property: &str) -> Value {
        match self {
            Value::Object(map) => map.get(property).cloned().unwrap_or_default(),
            Value::Array(items) if property == "length" => Value::from(items.len()),
            Value::Array(items) => parse_index(property)
                .and_then(|i| items.get(i))
                .cloned()
                .unwrap_or_default(),
            Value::String(s) if property == "length" => Value::from(s.chars().count()),
            Value::String(s) => parse_index(property)
                .and_then(|i| s.chars().nth(i))
                .map(Value::from)
                .unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// Invokes this value as a function.
    ///
    /// # Errors
    /// Returns [`NotCallable`] if the value isn't a [`Function`](Value::Function).
    pub fn try_call(&self, args: &[Value]) -> Result<Value, NotCallable> {
        match self {
            Value::Function(func) => Ok(func.call(args)),
            other => Err(NotCallable { found: other.kind() }),
        }
    }

    /// Invokes this value as a function.
    ///
    /// # Panics
    /// Panics if the value isn't a [`Function`](Value::Function).
    pub fn call(&self, args: &[Value]) -> Value {
        self.try_call(args).throw()
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub const fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

fn parse_index(property: &str) -> Option<usize> {
    // "01" and "+1" aren't indices.
    if property == "0" || (!property.starts_with(['0', '+']) && !property.is_empty()) {
        property.parse().ok()
    } else {
        None
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

/// A callable value. Clones share the underlying closure, and two Functions are only equal if
/// one is a clone of the other.
#[derive(Clone)]
pub struct Function(Rc<dyn Fn(&[Value]) -> Value>);

impl Function {
    pub fn new(func: impl Fn(&[Value]) -> Value + 'static) -> Function {
        Function(Rc::new(func))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Function) -> bool {
        ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[Function]")
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Value {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<char> for Value {
    fn from(value: char) -> Value {
        Value::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Value {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Value {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Value {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Value {
        Value::Function(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Value {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Value {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

macro_rules! impl_try_from_value {
    ($t:ty, $kind:ident, $pattern:pat => $out:expr) => {
        impl TryFrom<Value> for $t {
            type Error = KindMismatch;

            fn try_from(value: Value) -> Result<$t, KindMismatch> {
                match value {
                    $pattern => Ok($out),
                    other => Err(KindMismatch {
                        expected: Kind::$kind,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_try_from_value!(bool, Boolean, Value::Bool(b) => b);
impl_try_from_value!(f64, Number, Value::Number(n) => n);
impl_try_from_value!(String, String, Value::String(s) => s);
impl_try_from_value!(Vec<Value>, Array, Value::Array(items) => items);
impl_try_from_value!(Map, Object, Value::Object(map) => map);
