//! Append-only vector store with linear-scan cosine search
//!
//! Every chunk added becomes one vector record; a query is embedded with
//! the same provider and scored against every record. The store is small
//! enough (a demo corpus, not a production index) that an exact linear scan
//! beats maintaining an approximate index, and it gives exact, stable
//! ranking semantics: descending score with ties broken by insertion order.

use crate::StoreError;
use blackstone_domain::traits::EmbeddingProvider;
use blackstone_domain::{Chunk, ClauseType, DocumentId, SearchHit};
use std::sync::RwLock;

use crate::embedding::cosine_similarity;

/// A stored (vector, metadata) pair
#[derive(Debug, Clone)]
pub struct VectorRecord {
    /// Embedding of the chunk content
    pub embedding: Vec<f32>,

    /// Owning document
    pub document_id: DocumentId,

    /// Chunk index within the document
    pub chunk_index: usize,

    /// Document title (the uploaded filename)
    pub title: String,

    /// Chunk content
    pub content: String,

    /// Clause category assigned to the chunk, if any
    pub clause_type: Option<ClauseType>,
}

/// Append-only vector store over an embedding provider
///
/// Records live for the lifetime of the store; there is no delete or
/// update. `add` takes the write lock once per document so concurrent
/// readers never observe a document's records partially written.
pub struct VectorStore<E> {
    embedder: E,
    records: RwLock<Vec<VectorRecord>>,
}

impl<E> VectorStore<E>
where
    E: EmbeddingProvider,
    E::Error: std::fmt::Display,
{
    /// Create an empty store over the given embedding provider
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Add a document's chunks to the store
    ///
    /// Appends one record per chunk. Embeddings are computed before the
    /// write lock is taken; the append itself happens under a single guard.
    pub fn add(
        &self,
        document_id: DocumentId,
        title: &str,
        chunks: &[Chunk],
    ) -> Result<(), StoreError> {
        let mut new_records = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let embedding = self
                .embedder
                .embed(&chunk.content)
                .map_err(|e| StoreError::Embedding(e.to_string()))?;

            new_records.push(VectorRecord {
                embedding,
                document_id,
                chunk_index: chunk.index,
                title: title.to_string(),
                content: chunk.content.clone(),
                clause_type: chunk.clause_type,
            });
        }

        let mut records = self.records.write().expect("vector store lock poisoned");
        records.extend(new_records);
        Ok(())
    }

    /// Search for the chunks most similar to the query
    ///
    /// Scores every stored record by cosine similarity against the embedded
    /// query and returns at most `limit` hits, descending by score, ties in
    /// insertion order. Records whose similarity is undefined (zero
    /// vectors) score 0.0 rather than propagating NaN. An empty store
    /// returns an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, StoreError> {
        let query_embedding = self
            .embedder
            .embed(query)
            .map_err(|e| StoreError::Embedding(e.to_string()))?;

        let records = self.records.read().expect("vector store lock poisoned");

        let mut scored: Vec<SearchHit> = records
            .iter()
            .map(|record| SearchHit {
                content: record.content.clone(),
                document_id: record.document_id,
                title: record.title.clone(),
                chunk_index: record.chunk_index,
                clause_type: record.clause_type,
                score: cosine_similarity(&query_embedding, &record.embedding),
            })
            .collect();

        // Stable sort keeps insertion order for equal scores
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        Ok(scored)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.read().expect("vector store lock poisoned").len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::SyntheticEmbedding;

    fn chunk(document_id: DocumentId, index: usize, content: &str) -> Chunk {
        Chunk {
            document_id,
            index,
            content: content.to_string(),
            clause_type: None,
        }
    }

    fn store() -> VectorStore<SyntheticEmbedding> {
        VectorStore::new(SyntheticEmbedding::default())
    }

    #[test]
    fn test_empty_store_returns_no_hits() {
        let store = store();
        assert!(store.is_empty());
        assert!(store.search("anything", 5).unwrap().is_empty());
    }

    #[test]
    fn test_add_then_search_returns_each_chunk_once() {
        let store = store();
        let id = DocumentId::new();
        let chunks = vec![
            chunk(id, 0, "Payment is due in thirty days."),
            chunk(id, 1, "Either party may terminate on notice."),
            chunk(id, 2, "This Agreement is governed by Delaware law."),
        ];

        store.add(id, "contract.txt", &chunks).unwrap();
        assert_eq!(store.len(), 3);

        let hits = store.search("termination", 10).unwrap();
        assert_eq!(hits.len(), 3);

        let mut indices: Vec<usize> = hits.iter().map(|h| h.chunk_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_identical_query_ranks_its_chunk_first() {
        let store = store();
        let id = DocumentId::new();
        let target = "The indemnifying party shall defend all claims.";
        let chunks = vec![
            chunk(id, 0, "Payment is due in thirty days."),
            chunk(id, 1, target),
            chunk(id, 2, "This Agreement is governed by Delaware law."),
        ];

        store.add(id, "contract.txt", &chunks).unwrap();

        let hits = store.search(target, 3).unwrap();
        assert_eq!(hits[0].chunk_index, 1);
        assert!((hits[0].score - 1.0).abs() < 1e-5);
        assert!(hits[0].score >= hits[1].score);
        assert!(hits[1].score >= hits[2].score);
    }

    #[test]
    fn test_limit_truncates_results() {
        let store = store();
        let id = DocumentId::new();
        let chunks: Vec<Chunk> = (0..8)
            .map(|i| chunk(id, i, &format!("clause number {}", i)))
            .collect();

        store.add(id, "contract.txt", &chunks).unwrap();

        assert_eq!(store.search("clause", 3).unwrap().len(), 3);
        assert_eq!(store.search("clause", 100).unwrap().len(), 8);
    }

    #[test]
    fn test_tied_scores_keep_insertion_order() {
        let store = store();
        let first = DocumentId::new();
        let second = DocumentId::new();

        // Identical content in both documents: identical embeddings,
        // identical scores
        store
            .add(first, "a.txt", &[chunk(first, 0, "identical text")])
            .unwrap();
        store
            .add(second, "b.txt", &[chunk(second, 0, "identical text")])
            .unwrap();

        let hits = store.search("identical text", 2).unwrap();
        assert_eq!(hits[0].document_id, first);
        assert_eq!(hits[1].document_id, second);
    }

    #[test]
    fn test_empty_content_record_scores_zero() {
        let store = store();
        let id = DocumentId::new();

        store.add(id, "a.txt", &[chunk(id, 0, "")]).unwrap();

        let hits = store.search("some query", 5).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn test_clause_labels_travel_with_hits() {
        let store = store();
        let id = DocumentId::new();
        let labeled = Chunk {
            document_id: id,
            index: 0,
            content: "Either party may terminate on notice.".to_string(),
            clause_type: Some(ClauseType::Termination),
        };

        store.add(id, "contract.txt", &[labeled]).unwrap();

        let hits = store.search("terminate", 1).unwrap();
        assert_eq!(hits[0].clause_type, Some(ClauseType::Termination));
        assert_eq!(hits[0].title, "contract.txt");
    }
}
