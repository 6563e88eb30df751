//! Commonplace - small, stateless helpers for everyday types
//!
//! This crate re-exports every layer of the workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: commonplace_temporal    — Calendar points, granularity, intervals, date helpers
//!          commonplace_collections — Keyed lookup, grouping, sorting, distinctness
//!          commonplace_text        — Capitalization and LIKE patterns
//!          commonplace_number      — Decimal truncation and percentages
//! Layer 0: commonplace_foundation  — Error, ErrorKind, Result, semantic limits
//! ```

pub use commonplace_collections as collections;
pub use commonplace_foundation as foundation;
pub use commonplace_number as number;
pub use commonplace_temporal as temporal;
pub use commonplace_text as text;
