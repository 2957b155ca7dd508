//! Prompt construction for the analysis calls
//!
//! Inputs are truncated to a character budget before being interpolated;
//! the caller decides the budget via configuration.

/// System role for summarization
pub const SUMMARY_SYSTEM: &str = "You are a legal expert specializing in contract analysis.";

/// System role for risk identification
pub const RISKS_SYSTEM: &str = "You are a legal expert specializing in risk assessment.";

/// System role for document comparison
pub const COMPARISON_SYSTEM: &str = "You are a legal expert specializing in contract comparison.";

/// Truncate text to a character budget
fn capped(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}

/// Build the user prompt for a plain-language summary
pub fn summary_prompt(text: &str, budget: usize) -> String {
    format!(
        "Please provide a concise summary of the following legal text in plain language. \
         Focus on the key obligations, rights, and important clauses.\n\n\
         Text: {}\n\n\
         Summary:",
        capped(text, budget)
    )
}

/// Build the user prompt for risk identification
///
/// Asks for a JSON array of objects with "description", "severity", and
/// "clause" fields; the response is then parsed strictly.
pub fn risks_prompt(text: &str, budget: usize) -> String {
    format!(
        "Please analyze the following legal text and identify the top 5 potential risks or issues. \
         For each risk, provide:\n\
         1. A short description of the risk\n\
         2. The severity (High, Medium, Low)\n\
         3. The specific clause or text that indicates this risk\n\n\
         Respond with only a JSON array of objects containing \"description\", \"severity\", and \"clause\".\n\n\
         Text: {}",
        capped(text, budget)
    )
}

/// Build the user prompt for document comparison
pub fn comparison_prompt(doc1: &str, doc2: &str, budget: usize) -> String {
    format!(
        "Please compare these two legal texts and identify key differences in terms of:\n\
         1. Obligations and rights\n\
         2. Important clauses like governing law, termination, etc.\n\
         3. Risk allocation\n\n\
         Respond with only a JSON object with these categories.\n\n\
         Text 1: {}\n\n\
         Text 2: {}",
        capped(doc1, budget),
        capped(doc2, budget)
    )
}
