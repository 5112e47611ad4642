//! Searching and deduplication: [`index_of`], [`contains`] and [`unique`].
//!
//! [`index_of`] and [`unique`] use strict equality (`==` on [`Value`](crate::Value)), under which
//! `NaN` never matches. [`contains`] uses [`same_value_zero`](crate::Value::same_value_zero), so
//! `contains(&[NaN], &NaN)` is true while `index_of(&[NaN], &NaN)` is `-1`.

mod lookup;
mod tests;

pub use lookup::*;
