//! Keyed lookup, grouping, sorting, and distinctness helpers.
//!
//! This crate provides:
//! - [`KeyedLookup`] - First-match search by an extracted key
//! - [`lists`] - Stateless mapping, filtering, sorting, and grouping helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod keyed;
pub mod lists;

pub use keyed::{KeyedLookup, Unkeyed, UnkeyedLookup};
pub use lists::{distinct_by, distinct_by_key, group_by, group_by_ordered, sort_by_key};
