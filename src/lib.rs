//! A small belt of collection utilities that work uniformly over arrays and objects.
//!
//! # Purpose
//! Each operation here is a standalone function that takes a collection and, usually, a callback,
//! and hands back a new value: iterating, searching, filtering, slicing, transforming and folding.
//! Nothing is lazy and nothing is shared between calls. The only operation that mutates its input
//! is [`extend`].
//!
//! # Values
//! The operations work on [`Value`], a dynamically typed value that is either a sequence
//! ([`Value::Array`]), a mapping ([`Value::Object`]) or a scalar. Operations that accept both
//! arrays and objects check which one they were given and traverse it accordingly: arrays in index
//! order, objects in key order. Callbacks always receive `(value, key, collection)`.
//!
//! # Error Handling
//! None of the operations fail. Inputs of the wrong shape and out-of-range arguments degrade to a
//! documented fallback, usually an empty array or [`Value::Undefined`], which stands in for "no
//! value here". The only panic is calling a [`Value`] that isn't a [`Function`] through
//! [`Value::call`], and [`Value::try_call`] reports that as an error instead.
//!
//! These fallbacks are silent, although they're recorded as `trace` level [`log`] records for
//! anyone who installs a logger.
//!
//! # Features
//! Each group of operations can be turned off individually: `traverse`, `predicate`, `lookup`,
//! `slice` and `transform`, all enabled by `ops-all`. The `json` feature adds conversions to and
//! from [`serde_json::Value`](https://docs.rs/serde_json). Everything is enabled by default.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod helpers;
#[cfg(feature = "ops")]
pub mod ops;
pub mod value;

pub(crate) mod util;

pub use helpers::{identity, type_of};
pub use value::{Function, Key, Kind, Map, Value};

#[cfg(feature = "lookup")]
pub use ops::lookup::{contains, index_of, unique};
#[cfg(feature = "predicate")]
pub use ops::predicate::{
    Outcome, every, every_identity, filter, partition, reject, some, some_identity,
};
#[cfg(feature = "slice")]
pub use ops::slice::{first, last};
#[cfg(feature = "transform")]
pub use ops::transform::{extend, pluck, reduce};
#[cfg(feature = "traverse")]
pub use ops::traverse::{each, map};
