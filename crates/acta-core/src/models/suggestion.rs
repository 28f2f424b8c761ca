//! Suggestion types produced by the verification pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a form value against a value extracted from the act
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchState {
    /// Normalized values are exactly equal.
    Identical,
    /// A value was extracted and resembles the form value (score >= 50) but
    /// is not identical.
    Different,
    /// Nothing was extracted, or the extraction is too dissimilar to count.
    NotFound,
}

/// One suggestion for one form field.
///
/// `value` is the trimmed extracted text (never the normalized form), so the
/// UI can offer it for fill-in. A low-confidence extraction keeps its value
/// but reports NOT_FOUND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    pub value: String,
    pub state: MatchState,
    /// Confidence, 0-100. 100 iff the normalized values are equal.
    pub score: u8,
}

impl FieldSuggestion {
    /// The suggestion emitted when no pattern matched.
    pub fn not_found() -> Self {
        Self {
            value: String::new(),
            state: MatchState::NotFound,
            score: 0,
        }
    }
}

/// Suggestions keyed by dot-delimited form field path ("titulaire.nom").
///
/// Regenerated wholesale whenever the act body or the form values change.
pub type SuggestionMap = HashMap<String, FieldSuggestion>;

/// Aggregate counts over a [`SuggestionMap`], for the verification banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSummary {
    pub identical: usize,
    pub different: usize,
    pub not_found: usize,
    pub total: usize,
}

impl SuggestionSummary {
    /// Count each state in a single pass. `total` is the map size, so the
    /// three counts always sum to it.
    pub fn of(suggestions: &SuggestionMap) -> Self {
        let mut summary = Self {
            total: suggestions.len(),
            ..Self::default()
        };
        for suggestion in suggestions.values() {
            match suggestion.state {
                MatchState::Identical => summary.identical += 1,
                MatchState::Different => summary.different += 1,
                MatchState::NotFound => summary.not_found += 1,
            }
        }
        summary
    }
}
