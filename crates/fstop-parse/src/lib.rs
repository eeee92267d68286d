//! # fstop-parse
//!
//! Natural-language query interpretation pipeline for fstop.
//!
//! Raw text enters once; the flag detector, range extractor, location
//! resolver, and device inferencer each run independently over the same
//! text (and, for location, over recognizer-produced entity spans) and
//! write into disjoint fields of a shared [`fstop_core::StructuredQuery`].
//! The assembler then projects the record into the external payload.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fstop_ner::MockRecognizer;
//! use fstop_parse::QueryParser;
//!
//! # async fn example() {
//! let recognizer = Arc::new(
//!     MockRecognizer::new().with_place("photos from Paris, France", "Paris, France", 12),
//! );
//! let parser = QueryParser::new(recognizer);
//!
//! let parsed = parser.parse("photos from Paris, France").await.unwrap();
//! assert_eq!(parsed.structured.city.as_deref(), Some("Paris"));
//! # }
//! ```

pub mod assemble;
pub mod dates;
pub mod device;
pub mod flags;
pub mod gazetteer;
pub mod location;
pub mod parser;
pub mod range;

// Re-export commonly used types at crate root
pub use assemble::AssembledFilter;
pub use dates::Rounding;
pub use parser::{ParsedQuery, QueryParser};
