//! Blackstone Extractor
//!
//! Converts an uploaded contract into the artifacts the rest of the pipeline
//! consumes: extracted text, overlapping chunks, a bag of pattern-matched
//! entities, and keyword-classified clause paragraphs.
//!
//! # Overview
//!
//! ```text
//! bytes ─► extract ─► text ─┬─► Chunker  ─► chunks
//!                           ├─► entities ─► EntityBag
//!                           └─► clauses  ─► ClauseSet
//! ```
//!
//! # Key Features
//!
//! - **Text extraction**: PDF (via `pdf-extract`) and UTF-8 plain text;
//!   malformed input degrades to empty text rather than failing the upload
//! - **Fixed-stride chunking**: overlapping windows sized for embedding,
//!   with an exact de-overlap reconstruction guarantee
//! - **Entity heuristics**: declarative regex tables for parties, dates,
//!   monetary values, and US-state locations
//! - **Clause classification**: keyword-stem tables over blank-line
//!   delimited paragraphs
//!
//! # Example Usage
//!
//! ```
//! use blackstone_extractor::{clauses, entities, Chunker, FileKind};
//!
//! let text = blackstone_extractor::extract_text(
//!     b"Acme Corp agrees to payment of $50,000 on 1/15/2024",
//!     FileKind::Text,
//! );
//!
//! let bag = entities::extract_entities(&text);
//! assert!(bag.monetary_values.contains(&"$50,000".to_string()));
//!
//! let chunks = Chunker::default().chunk(&text);
//! assert_eq!(chunks.len(), 1);
//!
//! let clause_set = clauses::classify(&text);
//! assert_eq!(clause_set.total(), 1); // "payment" hits payment_terms
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod extract;

pub mod clauses;
pub mod entities;

pub use chunking::Chunker;
pub use config::ProcessorConfig;
pub use error::ExtractorError;
pub use extract::{extract_text, FileKind};
