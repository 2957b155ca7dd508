//! Clause classification via keyword-stem tables
//!
//! Paragraphs are delimited by blank lines; a paragraph is tagged with a
//! category when it contains at least one of the category's keyword stems
//! as a case-insensitive substring. Presence is binary per category per
//! paragraph: there is no exclusivity and no ranking, and one paragraph may
//! be tagged with several categories.

use blackstone_domain::{ClauseMatch, ClauseSet, ClauseType};
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum preview length in characters
const PREVIEW_LEN: usize = 50;

/// Keyword stems per clause category, in taxonomy order
///
/// Stems are matched as lowercase substrings, so "terminat" covers
/// "terminate", "termination", "terminated".
pub const CLAUSE_KEYWORDS: &[(ClauseType, &[&str])] = &[
    (ClauseType::GoverningLaw, &["govern", "law", "jurisdiction"]),
    (ClauseType::Termination, &["terminat", "cancel", "end"]),
    (
        ClauseType::Indemnification,
        &["indemnif", "hold harmless", "defend"],
    ),
    (
        ClauseType::Confidentiality,
        &["confidential", "proprietary", "non-disclosure"],
    ),
    (ClauseType::Assignment, &["assign", "transfer", "delegation"]),
    (ClauseType::PaymentTerms, &["payment", "fee", "compensation"]),
    (
        ClauseType::LimitationLiability,
        &["limit", "liability", "responsible"],
    ),
    (
        ClauseType::ForceMajeure,
        &["force majeure", "act of god", "unforeseen"],
    ),
    (
        ClauseType::NonCompete,
        &["non-compete", "competition", "restraint of trade"],
    ),
    (ClauseType::Warranties, &["warrant", "represent", "guarantee"]),
];

lazy_static! {
    /// A paragraph break is one or more blank lines
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").expect("paragraph pattern is valid");
}

/// Classify the paragraphs of a document into clause categories
pub fn classify(text: &str) -> ClauseSet {
    let paragraphs: Vec<&str> = PARAGRAPH_BREAK.split(text).collect();
    let mut set = ClauseSet::new();

    for (clause_type, keywords) in CLAUSE_KEYWORDS {
        for paragraph in &paragraphs {
            let lower = paragraph.to_lowercase();
            if keywords.iter().any(|k| lower.contains(k)) {
                set.push(
                    *clause_type,
                    ClauseMatch {
                        preview: preview(paragraph),
                        text: paragraph.to_string(),
                    },
                );
            }
        }
    }

    set
}

/// First 50 characters of a paragraph, "..."-terminated when truncated
fn preview(paragraph: &str) -> String {
    let mut chars = paragraph.chars();
    let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
