use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

/// The category of a [`Value`](crate::Value), displayed as the lowercase name reported by
/// [`type_of`](crate::type_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Kind {
    Array,
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Object,
    Function,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Object => "object",
            Kind::Function => "function",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
