//! Search module - ranked similarity-search results

use crate::{ClauseType, DocumentId};

/// A ranked hit returned by similarity search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Chunk content
    pub content: String,

    /// Owning document
    pub document_id: DocumentId,

    /// Document title (the uploaded filename)
    pub title: String,

    /// Chunk index within the document
    pub chunk_index: usize,

    /// Clause category assigned to the chunk, if any
    pub clause_type: Option<ClauseType>,

    /// Cosine similarity against the query, in [-1, 1] (0.0 for degenerate
    /// vectors)
    pub score: f32,
}
