//! Taking elements off either end of an array: [`first`] and [`last`].

mod slice;

pub use slice::*;
