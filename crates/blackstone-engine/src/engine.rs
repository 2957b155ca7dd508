//! Core Engine implementation

use crate::error::EngineError;
use crate::types::{ClauseSummary, DocumentDetail, DocumentSummary, ProcessedDocument};
use blackstone_domain::traits::EmbeddingProvider;
use blackstone_domain::{risk, Chunk, ClauseSet, Document, DocumentId, Risk, SearchHit};
use blackstone_extractor::{clauses, entities, extract_text, Chunker, FileKind, ProcessorConfig};
use blackstone_store::{DocumentEntry, DocumentRegistry, SyntheticEmbedding, VectorStore};
use tracing::{debug, info};

/// Entity matches shown per category in summary output
const ENTITY_DISPLAY_LIMIT: usize = 10;

/// Characters of text shown in content previews
const CONTENT_PREVIEW_LEN: usize = 200;

/// The pipeline boundary: processes uploads, indexes chunks, answers
/// searches, assesses risks
///
/// Owns the document registry and the vector store; both are in-memory and
/// live as long as the engine.
pub struct Engine<E = SyntheticEmbedding> {
    chunker: Chunker,
    registry: DocumentRegistry,
    vectors: VectorStore<E>,
}

impl Engine<SyntheticEmbedding> {
    /// Create an engine over the deterministic synthetic embedding
    pub fn new(config: ProcessorConfig) -> Result<Self, EngineError> {
        Self::with_embedder(config, SyntheticEmbedding::default())
    }
}

impl<E> Engine<E>
where
    E: EmbeddingProvider,
    E::Error: std::fmt::Display,
{
    /// Create an engine over a specific embedding provider
    pub fn with_embedder(config: ProcessorConfig, embedder: E) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            chunker: config.chunker()?,
            registry: DocumentRegistry::new(),
            vectors: VectorStore::new(embedder),
        })
    }

    /// Process an uploaded document: validate the kind, extract text,
    /// extract entities, classify clauses, register the result
    ///
    /// Unsupported extensions fail here with a client error; extraction
    /// failures degrade to empty text and the pipeline continues.
    pub fn process_document(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<ProcessedDocument, EngineError> {
        let kind = FileKind::from_filename(filename)?;

        let text = extract_text(bytes, kind);
        info!(
            "Processing '{}': {} bytes uploaded, {} chars extracted",
            filename,
            bytes.len(),
            text.chars().count()
        );

        let entities = entities::extract_entities(&text);
        let clause_set = clauses::classify(&text);

        let document_id = DocumentId::new();
        let entry = DocumentEntry {
            document: Document::new(document_id, filename, text.clone()),
            entities: entities.clone(),
            clauses: clause_set.clone(),
        };
        self.registry.insert(entry);

        Ok(ProcessedDocument {
            document_id,
            filename: filename.to_string(),
            content_preview: preview(&text),
            entities: entities.truncated(ENTITY_DISPLAY_LIMIT).into(),
            clauses: clause_summaries(&clause_set),
        })
    }

    /// Chunk a registered document and add its chunks to the vector store
    ///
    /// Each chunk is labeled with the first clause category (taxonomy
    /// order) whose matched paragraph the chunk contains. Returns the
    /// number of chunks indexed; an empty document indexes zero chunks.
    pub fn chunk_and_index(&self, document_id: DocumentId) -> Result<usize, EngineError> {
        let entry = self
            .registry
            .get(document_id)
            .ok_or_else(|| EngineError::DocumentNotFound(document_id.to_string()))?;

        let chunks: Vec<Chunk> = self
            .chunker
            .chunk(&entry.document.text)
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let clause_type = label_chunk(&content, &entry.clauses);
                Chunk {
                    document_id,
                    index,
                    content,
                    clause_type,
                }
            })
            .collect();

        self.vectors
            .add(document_id, &entry.document.filename, &chunks)?;

        info!(
            "Indexed {} chunks for '{}'",
            chunks.len(),
            entry.document.filename
        );
        Ok(chunks.len())
    }

    /// Search indexed chunks by cosine similarity
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, EngineError> {
        debug!("Searching for {:?} (limit {})", query, limit);
        Ok(self.vectors.search(query, limit)?)
    }

    /// Assess risks for a registered document
    pub fn assess_risks(&self, document_id: DocumentId) -> Result<Vec<Risk>, EngineError> {
        let entry = self
            .registry
            .get(document_id)
            .ok_or_else(|| EngineError::DocumentNotFound(document_id.to_string()))?;

        Ok(risk::assess_risks(&entry.clauses))
    }

    /// Full detail for a registered document
    pub fn document(&self, document_id: DocumentId) -> Result<DocumentDetail, EngineError> {
        let entry = self
            .registry
            .get(document_id)
            .ok_or_else(|| EngineError::DocumentNotFound(document_id.to_string()))?;

        Ok(DocumentDetail {
            id: entry.document.id,
            filename: entry.document.filename.clone(),
            text: entry.document.text.clone(),
            entities: entry.entities.into(),
            clauses: clause_summaries(&entry.clauses),
        })
    }

    /// List all registered documents in upload order
    pub fn documents(&self) -> Vec<DocumentSummary> {
        self.registry
            .list()
            .into_iter()
            .map(|entry| DocumentSummary {
                id: entry.document.id,
                filename: entry.document.filename,
                preview: preview(&entry.document.text),
            })
            .collect()
    }

    /// The registry entry for a document, for callers assembling
    /// comparison inputs
    pub fn entry(&self, document_id: DocumentId) -> Result<DocumentEntry, EngineError> {
        self.registry
            .get(document_id)
            .ok_or_else(|| EngineError::DocumentNotFound(document_id.to_string()))
    }

    /// Number of records in the vector store
    pub fn indexed_chunks(&self) -> usize {
        self.vectors.len()
    }
}

/// First clause category (taxonomy order) whose matched paragraph is
/// contained in the chunk
fn label_chunk(chunk: &str, clause_set: &ClauseSet) -> Option<blackstone_domain::ClauseType> {
    for (clause_type, matches) in clause_set.iter() {
        if matches.iter().any(|m| chunk.contains(&m.text)) {
            return Some(clause_type);
        }
    }
    None
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(CONTENT_PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn clause_summaries(clause_set: &ClauseSet) -> Vec<ClauseSummary> {
    clause_set
        .iter()
        .filter(|(_, matches)| !matches.is_empty())
        .map(|(clause_type, matches)| ClauseSummary {
            clause_type: clause_type.as_str().to_string(),
            previews: matches.iter().map(|m| m.preview.clone()).collect(),
        })
        .collect()
}
