//! Entity extraction via declarative regex patterns
//!
//! Four independent pattern families are applied to the whole text. These
//! are heuristics, not NER: the party pattern matches any
//! capitalized-capitalized word pair (or all-caps acronym), so incidental
//! phrases like "New Agreement" surface alongside real party names. No
//! disambiguation is attempted.

use blackstone_domain::EntityBag;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Proper-noun pairs or all-caps acronyms, optionally preceded by "the"
    static ref PARTY_PATTERN: Regex =
        Regex::new(r"(?:the )?([A-Z][a-z]+ [A-Z][a-z]+)|(?:the )?([A-Z][A-Z]+)")
            .expect("party pattern is valid");

    /// Numeric D/D/D or D-D-D dates, or month-name day, year
    static ref DATE_PATTERN: Regex = Regex::new(
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}\b",
    )
    .expect("date pattern is valid");

    /// $-prefixed amounts with optional thousands separators and cents,
    /// or digits followed by the word "dollars"
    static ref MONEY_PATTERN: Regex =
        Regex::new(r"\$\s*\d+(?:,\d{3})*(?:\.\d{2})?|\d+(?:,\d{3})*(?:\.\d{2})?\s*dollars")
            .expect("money pattern is valid");

    /// US state names matched as whole words
    static ref LOCATION_PATTERN: Regex = Regex::new(
        r"\b(?:Alabama|Alaska|Arizona|Arkansas|California|Colorado|Connecticut|Delaware|Florida|Georgia|Hawaii|Idaho|Illinois|Indiana|Iowa|Kansas|Kentucky|Louisiana|Maine|Maryland|Massachusetts|Michigan|Minnesota|Mississippi|Missouri|Montana|Nebraska|Nevada|New Hampshire|New Jersey|New Mexico|New York|North Carolina|North Dakota|Ohio|Oklahoma|Oregon|Pennsylvania|Rhode Island|South Carolina|South Dakota|Tennessee|Texas|Utah|Vermont|Virginia|Washington|West Virginia|Wisconsin|Wyoming)\b",
    )
    .expect("location pattern is valid");
}

/// Extract entities from the whole document text
///
/// Each category is deduplicated while preserving first-match discovery
/// order. No truncation happens here; callers constructing summary output
/// apply [`EntityBag::truncated`].
pub fn extract_entities(text: &str) -> EntityBag {
    let parties = dedup(PARTY_PATTERN.captures_iter(text).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }));

    let dates = dedup(DATE_PATTERN.find_iter(text).map(|m| m.as_str().to_string()));
    let monetary_values = dedup(MONEY_PATTERN.find_iter(text).map(|m| m.as_str().to_string()));
    let locations = dedup(LOCATION_PATTERN.find_iter(text).map(|m| m.as_str().to_string()));

    EntityBag {
        parties,
        dates,
        monetary_values,
        locations,
    }
}

/// Deduplicate while keeping first-occurrence order
fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
