//! Response payloads returned at the pipeline boundary

use blackstone_domain::{DocumentId, EntityBag};
use serde::{Serialize, Serializer};

fn id_as_string<S>(id: &DocumentId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&id.to_string())
}

/// Result of processing an uploaded document
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDocument {
    /// Assigned document id
    #[serde(serialize_with = "id_as_string")]
    pub document_id: DocumentId,

    /// Uploaded filename
    pub filename: String,

    /// First 200 characters of the extracted text
    pub content_preview: String,

    /// Extracted entities, capped at 10 per category for display
    pub entities: EntitySummary,

    /// Clause previews per category, in taxonomy order; categories with
    /// no matches are omitted
    pub clauses: Vec<ClauseSummary>,
}

/// Display form of an entity bag
#[derive(Debug, Clone, Serialize)]
pub struct EntitySummary {
    /// Party names
    pub parties: Vec<String>,

    /// Dates
    pub dates: Vec<String>,

    /// Monetary values
    pub monetary_values: Vec<String>,

    /// Locations (US states)
    pub locations: Vec<String>,
}

impl From<EntityBag> for EntitySummary {
    fn from(bag: EntityBag) -> Self {
        Self {
            parties: bag.parties,
            dates: bag.dates,
            monetary_values: bag.monetary_values,
            locations: bag.locations,
        }
    }
}

/// Clause previews for one category
#[derive(Debug, Clone, Serialize)]
pub struct ClauseSummary {
    /// Category name (snake_case wire form)
    pub clause_type: String,

    /// One preview per matched paragraph
    pub previews: Vec<String>,
}

/// A registered document in listing form
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// Document id
    #[serde(serialize_with = "id_as_string")]
    pub id: DocumentId,

    /// Uploaded filename
    pub filename: String,

    /// First 200 characters of the text
    pub preview: String,
}

/// Full detail of a registered document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentDetail {
    /// Document id
    #[serde(serialize_with = "id_as_string")]
    pub id: DocumentId,

    /// Uploaded filename
    pub filename: String,

    /// Full extracted text
    pub text: String,

    /// Extracted entities (untruncated)
    pub entities: EntitySummary,

    /// Clause previews per category
    pub clauses: Vec<ClauseSummary>,
}
