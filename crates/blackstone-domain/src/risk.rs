//! Risk module - the rule-based risk heuristic
//!
//! A pure function of the clause classifier's output: no state, no external
//! calls, recomputed on every invocation. Four fixed rules evaluated
//! independently in declaration order; rules never suppress or combine with
//! each other. Three rules trigger on the presence of a category, the
//! force-majeure rule is the single absence-triggered one.

use crate::{ClauseSet, ClauseType};
use std::fmt;

/// Risk severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Likely enforceability or dispute problem
    High,

    /// Worth review
    Medium,

    /// Informational
    Low,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A risk finding derived from clause presence or absence
#[derive(Debug, Clone, PartialEq)]
pub struct Risk {
    /// Severity of the finding
    pub severity: Severity,

    /// Short description
    pub description: String,

    /// Explanatory detail
    pub details: String,

    /// Clause category the finding refers to
    pub clause_type: ClauseType,
}

/// Assess risks from the clause categories found in a document
///
/// Output order follows rule declaration order, not severity order.
///
/// # Examples
///
/// ```
/// use blackstone_domain::{risk, ClauseMatch, ClauseSet, ClauseType, Severity};
///
/// let mut clauses = ClauseSet::new();
/// clauses.push(ClauseType::NonCompete, ClauseMatch {
///     preview: "Employee shall not compete...".to_string(),
///     text: "Employee shall not compete for two years.".to_string(),
/// });
///
/// let risks = risk::assess_risks(&clauses);
/// assert_eq!(risks[0].severity, Severity::High);
/// ```
pub fn assess_risks(clauses: &ClauseSet) -> Vec<Risk> {
    let mut risks = Vec::new();

    if clauses.has(ClauseType::NonCompete) {
        risks.push(Risk {
            severity: Severity::High,
            description: "Non-compete clause may have enforceability issues".to_string(),
            details: "The non-compete clause may not be enforceable in certain \
                      jurisdictions. Some states limit non-compete agreements or \
                      require additional consideration."
                .to_string(),
            clause_type: ClauseType::NonCompete,
        });
    }

    if clauses.has(ClauseType::LimitationLiability) {
        risks.push(Risk {
            severity: Severity::Medium,
            description: "Limitation of Liability clause may be too broad".to_string(),
            details: "The limitation of liability clause appears to be very broad \
                      and may not be enforceable if challenged, particularly \
                      regarding gross negligence or willful misconduct."
                .to_string(),
            clause_type: ClauseType::LimitationLiability,
        });
    }

    if clauses.has(ClauseType::Termination) {
        risks.push(Risk {
            severity: Severity::Medium,
            description: "Termination clause lacks specific details".to_string(),
            details: "The termination clause may lack clarity on the process and \
                      obligations following termination, which could lead to \
                      disputes."
                .to_string(),
            clause_type: ClauseType::Termination,
        });
    }

    if !clauses.has(ClauseType::ForceMajeure) {
        risks.push(Risk {
            severity: Severity::Low,
            description: "Missing Force Majeure clause".to_string(),
            details: "The agreement does not contain a force majeure clause, which \
                      could create issues in case of unforeseen events that prevent \
                      performance."
                .to_string(),
            clause_type: ClauseType::ForceMajeure,
        });
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClauseMatch;

    fn clause_match() -> ClauseMatch {
        ClauseMatch {
            preview: "preview".to_string(),
            text: "full paragraph".to_string(),
        }
    }

    #[test]
    fn test_non_compete_only_yields_high_and_low() {
        let mut clauses = ClauseSet::new();
        clauses.push(ClauseType::NonCompete, clause_match());

        let risks = assess_risks(&clauses);

        // High for the non-compete plus Low for the missing force majeure
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].severity, Severity::High);
        assert_eq!(risks[0].clause_type, ClauseType::NonCompete);
        assert_eq!(risks[1].severity, Severity::Low);
        assert_eq!(risks[1].clause_type, ClauseType::ForceMajeure);
        assert!(!risks.iter().any(|r| r.severity == Severity::Medium));
    }

    #[test]
    fn test_empty_clause_set_yields_only_missing_force_majeure() {
        let risks = assess_risks(&ClauseSet::new());

        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].severity, Severity::Low);
        assert_eq!(risks[0].clause_type, ClauseType::ForceMajeure);
    }

    #[test]
    fn test_force_majeure_present_suppresses_low_risk() {
        let mut clauses = ClauseSet::new();
        clauses.push(ClauseType::ForceMajeure, clause_match());

        let risks = assess_risks(&clauses);
        assert!(risks.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_declaration_order() {
        let mut clauses = ClauseSet::new();
        clauses.push(ClauseType::NonCompete, clause_match());
        clauses.push(ClauseType::LimitationLiability, clause_match());
        clauses.push(ClauseType::Termination, clause_match());
        // force majeure absent

        let risks = assess_risks(&clauses);
        let order: Vec<ClauseType> = risks.iter().map(|r| r.clause_type).collect();
        assert_eq!(
            order,
            vec![
                ClauseType::NonCompete,
                ClauseType::LimitationLiability,
                ClauseType::Termination,
                ClauseType::ForceMajeure,
            ]
        );
    }

    #[test]
    fn test_assessment_is_stateless() {
        let mut clauses = ClauseSet::new();
        clauses.push(ClauseType::Termination, clause_match());

        let first = assess_risks(&clauses);
        let second = assess_risks(&clauses);
        assert_eq!(first, second);
    }
}
