//! Document module - the unit of upload and analysis

use std::fmt;

/// Unique identifier for an uploaded document, based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (upload order is recoverable from the id)
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u128);

impl DocumentId {
    /// Generate a new UUIDv7-based DocumentId
    ///
    /// # Examples
    ///
    /// ```
    /// use blackstone_domain::DocumentId;
    ///
    /// let id = DocumentId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a DocumentId from a raw u128 value
    ///
    /// This is primarily for tests and deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a DocumentId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use blackstone_domain::DocumentId;
    ///
    /// let id = DocumentId::new();
    /// let parsed = DocumentId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid document id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// An uploaded document
///
/// Created once at upload time and immutable afterwards. The extracted text
/// may be empty when extraction failed softly; downstream stages accept
/// empty text and degrade gracefully.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Original filename as uploaded
    pub filename: String,

    /// Full extracted text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(id: DocumentId, filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// A bounded substring of a document, the unit of indexing and embedding
///
/// Chunks are derived deterministically from the document text and never
/// mutated after creation. Consecutive chunks of a document share a fixed
/// overlap of characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Back-reference to the owning document (no ownership implied)
    pub document_id: DocumentId,

    /// Sequence index within the document (0-based)
    pub index: usize,

    /// Chunk content, at most `chunk_size` characters
    pub content: String,

    /// Clause category assigned to this chunk, if any
    pub clause_type: Option<crate::ClauseType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_ordering() {
        let id1 = DocumentId::from_value(1000);
        let id2 = DocumentId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_document_id_chronological() {
        // UUIDv7s generated in sequence should be chronologically ordered
        let id1 = DocumentId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = DocumentId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
    }

    #[test]
    fn test_document_id_display_and_parse() {
        let id = DocumentId::new();
        let id_str = id.to_string();

        // UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = DocumentId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_document_id_invalid_string() {
        assert!(DocumentId::from_string("not-a-valid-uuid").is_err());
        assert!(DocumentId::from_string("").is_err());
    }

    #[test]
    fn test_document_construction() {
        let doc = Document::new(DocumentId::new(), "lease.txt", "This Agreement...");
        assert_eq!(doc.filename, "lease.txt");
        assert_eq!(doc.text, "This Agreement...");
    }
}
