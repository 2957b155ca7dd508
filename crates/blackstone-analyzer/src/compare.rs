//! Structural document comparison
//!
//! A pure, LLM-free comparison of two analyzed documents: word counts,
//! per-category clause presence, entity totals, and risk counts. Each
//! side's risk figures are computed from that side's own clause analysis.

use blackstone_domain::{risk, ClauseSet, ClauseType, EntityBag, Severity};

/// One side of a comparison: a document's analysis artifacts
#[derive(Debug, Clone)]
pub struct DocumentProfile {
    /// Document filename
    pub filename: String,

    /// Full document text
    pub text: String,

    /// Extracted entities
    pub entities: EntityBag,

    /// Clause classification
    pub clauses: ClauseSet,
}

/// Per-category clause presence in both documents
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseComparison {
    /// The category compared
    pub clause_type: ClauseType,

    /// Matches in the first document
    pub doc1_count: usize,

    /// Matches in the second document
    pub doc2_count: usize,
}

impl ClauseComparison {
    /// Whether the first document has this clause
    pub fn doc1_has(&self) -> bool {
        self.doc1_count > 0
    }

    /// Whether the second document has this clause
    pub fn doc2_has(&self) -> bool {
        self.doc2_count > 0
    }
}

/// Structural comparison of two analyzed documents
#[derive(Debug, Clone)]
pub struct DocumentComparison {
    /// First document filename
    pub doc1_name: String,

    /// Second document filename
    pub doc2_name: String,

    /// Whitespace-delimited word count of the first document
    pub doc1_word_count: usize,

    /// Whitespace-delimited word count of the second document
    pub doc2_word_count: usize,

    /// Per-category clause presence, in taxonomy order
    pub clauses: Vec<ClauseComparison>,

    /// Heuristic risk count for the first document
    pub doc1_risks: usize,

    /// Heuristic risk count for the second document
    pub doc2_risks: usize,

    /// High-severity risk count for the first document
    pub doc1_high_risks: usize,

    /// High-severity risk count for the second document
    pub doc2_high_risks: usize,

    /// Total entity count for the first document
    pub doc1_entities: usize,

    /// Total entity count for the second document
    pub doc2_entities: usize,
}

impl DocumentComparison {
    /// Compare two analyzed documents structurally
    pub fn between(doc1: &DocumentProfile, doc2: &DocumentProfile) -> Self {
        let doc1_risk_list = risk::assess_risks(&doc1.clauses);
        let doc2_risk_list = risk::assess_risks(&doc2.clauses);

        let clauses = ClauseType::ALL
            .iter()
            .map(|&ct| ClauseComparison {
                clause_type: ct,
                doc1_count: doc1.clauses.count(ct),
                doc2_count: doc2.clauses.count(ct),
            })
            .collect();

        Self {
            doc1_name: doc1.filename.clone(),
            doc2_name: doc2.filename.clone(),
            doc1_word_count: doc1.text.split_whitespace().count(),
            doc2_word_count: doc2.text.split_whitespace().count(),
            clauses,
            doc1_risks: doc1_risk_list.len(),
            doc2_risks: doc2_risk_list.len(),
            doc1_high_risks: count_high(&doc1_risk_list),
            doc2_high_risks: count_high(&doc2_risk_list),
            doc1_entities: doc1.entities.total(),
            doc2_entities: doc2.entities.total(),
        }
    }
}

fn count_high(risks: &[blackstone_domain::Risk]) -> usize {
    risks.iter().filter(|r| r.severity == Severity::High).count()
}
