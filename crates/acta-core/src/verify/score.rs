//! Similarity scoring between form values and extracted values.

use crate::models::suggestion::{FieldSuggestion, MatchState};
use crate::text::normalize;

/// Score for exactly equal normalized strings.
pub const EXACT_SCORE: u8 = 100;
/// Score when one normalized string contains the other.
///
/// The 80/70/50 values below are carried over from the original tuning and
/// have no validated rationale; treat them as tunable constants.
pub const CONTAINMENT_SCORE: u8 = 80;
/// Cap for the word-overlap score.
pub const OVERLAP_SCORE_CAP: u8 = 70;
/// Minimum score for a non-identical pair to classify as DIFFERENT rather
/// than NOT_FOUND.
pub const DIFFERENT_THRESHOLD: u8 = 50;

/// Words shorter than this are ignored by the overlap count (articles,
/// particles).
const MIN_WORD_LEN: usize = 3;

/// Similarity between two strings after normalization, 0-100.
///
/// Exact match, then substring containment, then plain word-overlap count
/// relative to the longer word list (not Jaccard). Note that containment is
/// satisfied trivially when one side normalizes to empty, so an empty form
/// value against any extraction scores 80.
fn similarity_score(a: &str, b: &str) -> u8 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a == norm_b {
        return EXACT_SCORE;
    }
    if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
        return CONTAINMENT_SCORE;
    }

    let words_a: Vec<&str> = norm_a.split(' ').filter(|w| w.len() >= MIN_WORD_LEN).collect();
    let words_b: Vec<&str> = norm_b.split(' ').filter(|w| w.len() >= MIN_WORD_LEN).collect();
    let common = words_a.iter().filter(|w| words_b.contains(w)).count();
    if common == 0 {
        return 0;
    }

    let longest = words_a.len().max(words_b.len());
    let ratio = common as f64 / longest as f64 * 100.0;
    ratio.min(OVERLAP_SCORE_CAP as f64).round() as u8
}

/// Compare a form value against an extracted value and classify the pair.
///
/// No extraction at all yields NOT_FOUND with an empty value. A present but
/// low-confidence extraction (score < 50) also classifies NOT_FOUND but keeps
/// its value so the UI can still surface it.
pub fn compare_values(form_value: &str, extracted: Option<&str>) -> FieldSuggestion {
    let Some(extracted) = extracted else {
        return FieldSuggestion::not_found();
    };

    let score = similarity_score(form_value, extracted);
    let state = if normalize(form_value) == normalize(extracted) {
        MatchState::Identical
    } else if score >= DIFFERENT_THRESHOLD {
        MatchState::Different
    } else {
        MatchState::NotFound
    };

    FieldSuggestion {
        value: extracted.trim().to_string(),
        state,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_values_are_identical_with_score_100() {
        let s = compare_values("Dupont", Some("Dupont"));
        assert_eq!(s.state, MatchState::Identical);
        assert_eq!(s.score, 100);
        assert_eq!(s.value, "Dupont");
    }

    #[test]
    fn equality_ignores_case_and_accents() {
        let s = compare_values("DUPONT", Some("dupont"));
        assert_eq!(s.state, MatchState::Identical);
        assert_eq!(s.score, 100);

        let s = compare_values("Hélène", Some("helene"));
        assert_eq!(s.state, MatchState::Identical);
    }

    #[test]
    fn containment_scores_80_and_classifies_different() {
        let s = compare_values("Jean Paul Dupont", Some("Dupont"));
        assert_eq!(s.score, 80);
        assert_eq!(s.state, MatchState::Different);
    }

    #[test]
    fn missing_extraction_is_not_found() {
        let s = compare_values("Dupont", None);
        assert_eq!(s.state, MatchState::NotFound);
        assert_eq!(s.score, 0);
        assert_eq!(s.value, "");
    }

    #[test]
    fn single_word_near_miss_is_not_found() {
        // "dupont" vs "dupond": not equal, no containment, and no common
        // word, so the overlap path scores 0.
        let s = compare_values("Dupont", Some("Dupond"));
        assert_eq!(s.score, 0);
        assert_eq!(s.state, MatchState::NotFound);
        // The extracted value is still surfaced.
        assert_eq!(s.value, "Dupond");
    }

    #[test]
    fn multi_word_overlap_is_capped_at_70() {
        // All significant words in common but not equal as strings would be
        // containment; force the overlap path with reordered words.
        let s = compare_values("Martin Bernard", Some("Bernard Martin"));
        assert_eq!(s.score, 70);
        assert_eq!(s.state, MatchState::Different);
    }

    #[test]
    fn partial_overlap_below_threshold_is_not_found() {
        // 1 common word out of 3: round(33) = 33 < 50.
        let s = compare_values("Jean Marie Dupont", Some("Pierre Louis Dupont"));
        assert_eq!(s.score, 33);
        assert_eq!(s.state, MatchState::NotFound);
        assert_eq!(s.value, "Pierre Louis Dupont");
    }

    #[test]
    fn empty_form_value_against_extraction_is_different() {
        // "" is contained in everything, so extraction against an empty form
        // value takes the containment path.
        let s = compare_values("", Some("Dupont"));
        assert_eq!(s.score, 80);
        assert_eq!(s.state, MatchState::Different);
    }

    #[test]
    fn short_words_are_ignored_by_overlap() {
        // "de" and "la" are below the word-length floor on both sides.
        let s = compare_values("Jean de la Fontaine", Some("Pierre de la Fontaine"));
        assert_eq!(s.score, 50);
        assert_eq!(s.state, MatchState::Different);
    }
}
