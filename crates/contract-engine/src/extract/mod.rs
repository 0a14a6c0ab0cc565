//! Field extraction from the plain text of a prior contract
//!
//! Extraction is a pure function over already-decoded text. A rule that does
//! not match leaves its fields empty; that is the expected "not found"
//! outcome, not an error.

pub mod rules;

pub use rules::{rule, rules, ExtractionRule};

use shared_types::ExtractedFields;

/// Apply every extraction rule to `text` and collect what matched
pub fn extract(text: &str) -> ExtractedFields {
    let mut extracted = ExtractedFields::default();

    for rule in rules() {
        let matches = rule.apply(text);
        if matches.is_empty() {
            tracing::debug!(rule = rule.name, "Extraction rule found no match");
            continue;
        }

        tracing::debug!(rule = rule.name, "Extraction rule matched");
        for (field, value) in matches {
            extracted.set(field, value);
        }
    }

    extracted
}
