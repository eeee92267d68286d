//! # fstop-core
//!
//! Core types, errors, and defaults for the fstop query interpreter.
//!
//! This crate provides the foundational data structures that the other
//! fstop crates depend on: the structured query record, the external
//! filter payload, entity spans, and the shared error type.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod query;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use query::{EntitySpan, FilterPayload, StructuredQuery};
