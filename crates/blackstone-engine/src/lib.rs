//! Blackstone Engine
//!
//! The boundary surface of the analysis pipeline. Callers hand in raw
//! bytes and get back processed documents, indexed chunks, ranked search
//! hits, and risk assessments; everything underneath (extraction, pattern
//! tables, embedding, the vector scan) is wiring owned by this crate.
//!
//! # Architecture
//!
//! ```text
//! bytes ─► process_document ─► registry entry {text, entities, clauses}
//!                 │
//!          chunk_and_index ─► vector store records
//!                 │
//!              search ─► ranked hits        assess_risks ─► risk list
//! ```
//!
//! The engine is explicitly constructed and passed by handle; there is no
//! ambient global state. Every call is synchronous end-to-end and the
//! underlying stores use a single-writer/concurrent-reader lock
//! discipline, so an engine shared across threads stays consistent.
//!
//! # Example Usage
//!
//! ```
//! use blackstone_engine::Engine;
//! use blackstone_extractor::ProcessorConfig;
//!
//! let engine = Engine::new(ProcessorConfig::default()).unwrap();
//!
//! let processed = engine
//!     .process_document(b"Payment of $5,000 is due to Acme Corp.", "deal.txt")
//!     .unwrap();
//!
//! engine.chunk_and_index(processed.document_id).unwrap();
//! let hits = engine.search("payment", 5).unwrap();
//! assert!(!hits.is_empty());
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod types;

pub use engine::Engine;
pub use error::EngineError;
pub use types::{ClauseSummary, DocumentDetail, DocumentSummary, ProcessedDocument};

// Callers assembling comparison inputs need the registry entry shape
pub use blackstone_store::DocumentEntry;
