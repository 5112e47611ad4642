//! Operations that classify elements with a callback: [`every`], [`some`], [`filter`], [`reject`]
//! and [`partition`].
//!
//! Callbacks may return anything implementing [`Outcome`]. [`every`] and [`some`] only count an
//! outcome that is exactly `true`, while [`filter`], [`reject`] and [`partition`] go by
//! truthiness, so `Value::from(1)` passes a filter but doesn't satisfy [`every`].

mod outcome;
mod predicate;

pub use outcome::*;
pub use predicate::*;
