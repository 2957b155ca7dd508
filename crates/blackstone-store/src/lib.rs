//! Blackstone Storage Layer
//!
//! In-memory stores for the analysis pipeline: a document registry keyed by
//! id, and an append-only vector store answering top-k cosine-similarity
//! queries with a linear scan.
//!
//! # Architecture
//!
//! - Process-lifetime, no persistence: records live exactly as long as the
//!   hosting process
//! - Explicitly constructed store objects passed by handle to callers -
//!   no ambient globals
//! - `RwLock` discipline: one writer, concurrent readers; a document's
//!   records are appended under a single write guard so concurrent uploads
//!   never interleave partial writes
//!
//! # Examples
//!
//! ```
//! use blackstone_store::{SyntheticEmbedding, VectorStore};
//! use blackstone_domain::{Chunk, DocumentId};
//!
//! let store = VectorStore::new(SyntheticEmbedding::default());
//! let id = DocumentId::new();
//! let chunk = Chunk {
//!     document_id: id,
//!     index: 0,
//!     content: "Payment is due in thirty days.".to_string(),
//!     clause_type: None,
//! };
//!
//! store.add(id, "lease.txt", &[chunk]).unwrap();
//! let hits = store.search("payment", 5).unwrap();
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod embedding;
pub mod registry;
pub mod vector_store;

use thiserror::Error;

pub use embedding::{cosine_similarity, FallbackEmbedding, SyntheticEmbedding};
pub use registry::{DocumentEntry, DocumentRegistry};
pub use vector_store::{VectorRecord, VectorStore};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Embedding the content failed
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Document not found in the registry
    #[error("Document not found: {0}")]
    NotFound(String),
}
