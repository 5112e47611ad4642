use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::value::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMismatch {
    pub expected: Kind,
    pub found: Kind,
}

impl Display for KindMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Expected a value of type {}, found {}!", self.expected, self.found)
    }
}

impl Error for KindMismatch {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotCallable {
    pub found: Kind,
}

impl Display for NotCallable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value of type {} is not a function!", self.found)
    }
}

impl Error for NotCallable {}
