//! Entity module - pattern-matched entities of a document

/// Entities pulled out of a document by pattern heuristics
///
/// Each list is deduplicated while preserving first-match discovery order,
/// which matters when the bag is truncated for display. These are regex
/// heuristics, not named-entity recognition: the party list in particular
/// will include any two-capitalized-word phrase, not only legal entities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityBag {
    /// Party names (heuristic: capitalized pairs or all-caps acronyms)
    pub parties: Vec<String>,

    /// Dates in numeric or month-name form
    pub dates: Vec<String>,

    /// Monetary values ($-prefixed or "N dollars")
    pub monetary_values: Vec<String>,

    /// US state names matched as whole words
    pub locations: Vec<String>,
}

impl EntityBag {
    /// Create an empty entity bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entities across all categories
    pub fn total(&self) -> usize {
        self.parties.len() + self.dates.len() + self.monetary_values.len() + self.locations.len()
    }

    /// Cap every category at its first `limit` entries, in discovery order
    ///
    /// Applied when constructing summary output only, never before search.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.parties.truncate(limit);
        self.dates.truncate(limit);
        self.monetary_values.truncate(limit);
        self.locations.truncate(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_counts_all_categories() {
        let bag = EntityBag {
            parties: vec!["Acme Corp".to_string()],
            dates: vec!["1/15/2024".to_string(), "2/1/2024".to_string()],
            monetary_values: vec!["$50,000".to_string()],
            locations: vec![],
        };
        assert_eq!(bag.total(), 4);
    }

    #[test]
    fn test_truncated_keeps_discovery_order() {
        let bag = EntityBag {
            parties: (0..15).map(|i| format!("Party {}", i)).collect(),
            ..Default::default()
        };
        let truncated = bag.truncated(10);
        assert_eq!(truncated.parties.len(), 10);
        assert_eq!(truncated.parties[0], "Party 0");
        assert_eq!(truncated.parties[9], "Party 9");
    }
}
