//! Deriving new values from collections: [`pluck`], [`reduce`] and [`extend`].

mod transform;

pub use transform::*;
