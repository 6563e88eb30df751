//! String capitalization and pattern helpers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;

pub use case::{capitalize, capitalize_all, empty_if_none, format_to_like};
