//! The collection operations, grouped by role. Every operation is also re-exported at the crate
//! root.
//!
//! # Method
//! Operations that accept either an array or an object check the [`Value`](crate::Value) variant
//! up front and branch into one of two iteration strategies. Both feed the same callback contract
//! of `(value, key, collection)`, so a callback written for one works for the other.

#[cfg(feature = "lookup")]
pub mod lookup;
#[cfg(feature = "predicate")]
pub mod predicate;
#[cfg(feature = "slice")]
pub mod slice;
#[cfg(feature = "transform")]
pub mod transform;
#[cfg(feature = "traverse")]
pub mod traverse;
