//! Error types and semantic limits for the commonplace helpers.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with an [`ErrorKind`] and optional context
//! - [`SemanticLimit`] - Guards that stop runaway materializations
//! - [`Result`] - Result alias used across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
