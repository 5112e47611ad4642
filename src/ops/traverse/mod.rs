//! Traversal over arrays, objects and strings: [`each`] and [`map`].

mod traverse;

pub use traverse::*;
