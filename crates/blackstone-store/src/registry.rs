//! In-memory document registry
//!
//! Keyed by `DocumentId`; since ids are UUIDv7, iteration over the keys is
//! chronological upload order. Documents are immutable once registered and
//! there is no delete operation.

use blackstone_domain::{ClauseSet, Document, DocumentId, EntityBag};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// A registered document together with its derived analysis artifacts
#[derive(Debug, Clone)]
pub struct DocumentEntry {
    /// The document itself
    pub document: Document,

    /// Entities extracted at upload time
    pub entities: EntityBag,

    /// Clause classification computed at upload time
    pub clauses: ClauseSet,
}

/// Process-wide registry of uploaded documents
///
/// Explicitly constructed and passed by handle; there is no ambient global.
/// Reads take the shared lock, registration takes the exclusive lock.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    entries: RwLock<BTreeMap<DocumentId, DocumentEntry>>,
}

impl DocumentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document with its derived artifacts
    pub fn insert(&self, entry: DocumentEntry) {
        let mut entries = self.entries.write().expect("registry lock poisoned");
        entries.insert(entry.document.id, entry);
    }

    /// Look up a document by id
    ///
    /// Returns `None` on a miss; callers surface this as a not-found
    /// condition rather than substituting a default.
    pub fn get(&self, id: DocumentId) -> Option<DocumentEntry> {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries.get(&id).cloned()
    }

    /// All registered documents in upload order
    pub fn list(&self) -> Vec<DocumentEntry> {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries.values().cloned().collect()
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.entries.read().expect("registry lock poisoned").len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
