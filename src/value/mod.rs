//! A module containing [`Value`], the dynamically typed element that every operation in this crate
//! traverses, and its associated types.
//!
//! [`Value`] models the handful of things the operations need to know about their input: whether
//! it's a sequence ([`Value::Array`]) or a mapping ([`Value::Object`]), whether two values are
//! strictly equal, whether a value is truthy and what to return when there's nothing there
//! ([`Value::Undefined`]).

mod error;
#[cfg(feature = "json")]
mod json;
mod key;
mod kind;
mod tests;
mod value;

pub use error::*;
pub use key::*;
pub use kind::*;
pub use value::*;
