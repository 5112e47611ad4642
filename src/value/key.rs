use derive_more::{Display, From, IsVariant};

use crate::value::Value;

/// The position of an element within the collection being traversed, passed as the second
/// argument of every traversal callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, IsVariant)]
pub enum Key<'a> {
    /// An index into an array, or a character offset into a string.
    #[display("{_0}")]
    Index(usize),
    /// A key of an object.
    #[display("{_0}")]
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub const fn index(self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(i),
            Key::Name(_) => None,
        }
    }

    pub const fn name(self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Converts the key into a [`Value`], a number for indices and a string for names.
    pub fn to_value(self) -> Value {
        match self {
            Key::Index(i) => Value::from(i),
            Key::Name(name) => Value::from(name),
        }
    }
}
