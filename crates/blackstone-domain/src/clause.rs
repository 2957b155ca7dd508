//! Clause module - the fixed taxonomy of legal clause categories

use std::fmt;

/// The fixed taxonomy of clause categories
///
/// Declaration order is significant: it is the iteration order of
/// [`ClauseSet`] and the order in which chunk labels are resolved when a
/// paragraph matches several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseType {
    /// Governing law / jurisdiction
    GoverningLaw,

    /// Termination and cancellation
    Termination,

    /// Indemnification / hold harmless
    Indemnification,

    /// Confidentiality and non-disclosure
    Confidentiality,

    /// Assignment and transfer
    Assignment,

    /// Payment terms, fees, compensation
    PaymentTerms,

    /// Limitation of liability
    LimitationLiability,

    /// Force majeure
    ForceMajeure,

    /// Non-compete / restraint of trade
    NonCompete,

    /// Warranties and representations
    Warranties,
}

impl ClauseType {
    /// All categories, in declaration order
    pub const ALL: [ClauseType; 10] = [
        ClauseType::GoverningLaw,
        ClauseType::Termination,
        ClauseType::Indemnification,
        ClauseType::Confidentiality,
        ClauseType::Assignment,
        ClauseType::PaymentTerms,
        ClauseType::LimitationLiability,
        ClauseType::ForceMajeure,
        ClauseType::NonCompete,
        ClauseType::Warranties,
    ];

    /// Get the category name as a string (snake_case wire form)
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::GoverningLaw => "governing_law",
            ClauseType::Termination => "termination",
            ClauseType::Indemnification => "indemnification",
            ClauseType::Confidentiality => "confidentiality",
            ClauseType::Assignment => "assignment",
            ClauseType::PaymentTerms => "payment_terms",
            ClauseType::LimitationLiability => "limitation_liability",
            ClauseType::ForceMajeure => "force_majeure",
            ClauseType::NonCompete => "non_compete",
            ClauseType::Warranties => "warranties",
        }
    }

    /// Parse a category from its snake_case name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "governing_law" => Some(ClauseType::GoverningLaw),
            "termination" => Some(ClauseType::Termination),
            "indemnification" => Some(ClauseType::Indemnification),
            "confidentiality" => Some(ClauseType::Confidentiality),
            "assignment" => Some(ClauseType::Assignment),
            "payment_terms" => Some(ClauseType::PaymentTerms),
            "limitation_liability" => Some(ClauseType::LimitationLiability),
            "force_majeure" => Some(ClauseType::ForceMajeure),
            "non_compete" => Some(ClauseType::NonCompete),
            "warranties" => Some(ClauseType::Warranties),
            _ => None,
        }
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ClauseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid clause type: {}", s))
    }
}

/// A paragraph matched under a clause category
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseMatch {
    /// First 50 characters of the paragraph, "..."-terminated when truncated
    pub preview: String,

    /// Full paragraph text
    pub text: String,
}

/// Paragraphs of a document grouped by clause category
///
/// Every category is always present (possibly with no matches), and a single
/// paragraph may appear under several categories. Iteration follows the
/// taxonomy declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClauseSet {
    matches: [Vec<ClauseMatch>; 10],
}

impl ClauseSet {
    /// Create an empty clause set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match under the given category
    pub fn push(&mut self, clause_type: ClauseType, m: ClauseMatch) {
        self.matches[clause_type as usize].push(m);
    }

    /// Matches recorded under the given category
    pub fn matches(&self, clause_type: ClauseType) -> &[ClauseMatch] {
        &self.matches[clause_type as usize]
    }

    /// Whether the given category has at least one match
    pub fn has(&self, clause_type: ClauseType) -> bool {
        !self.matches[clause_type as usize].is_empty()
    }

    /// Number of matches under the given category
    pub fn count(&self, clause_type: ClauseType) -> usize {
        self.matches[clause_type as usize].len()
    }

    /// Total number of matches across all categories
    pub fn total(&self) -> usize {
        self.matches.iter().map(Vec::len).sum()
    }

    /// Iterate categories in taxonomy order with their matches
    pub fn iter(&self) -> impl Iterator<Item = (ClauseType, &[ClauseMatch])> {
        ClauseType::ALL
            .into_iter()
            .map(move |ct| (ct, self.matches(ct)))
    }
}
