//! Verification of form values against the act body text.
//!
//! The generator runs the pattern extractor for every datum relevant to the
//! act's nature, scores each extraction against the corresponding form value
//! and returns a map of suggestions keyed by form field path. The whole map
//! is recomputed on every call; callers memoize on (body, nature, form) if
//! they care.

mod dates;
mod extract;
pub mod patterns;
mod score;

pub use dates::parse_extracted_date;
pub use extract::extract_value;
pub use score::{
    compare_values, CONTAINMENT_SCORE, DIFFERENT_THRESHOLD, EXACT_SCORE, OVERLAP_SCORE_CAP,
};

use regex::Regex;
use tracing::debug;

use crate::models::form::{DateFields, DocumentNature, FormValues, PersonFields};
use crate::models::suggestion::SuggestionMap;

/// Generate verification suggestions for a form against its act body.
///
/// An empty or absent body yields an empty map: no suggestions without
/// source text. Optional form sections (second parent, spouses' parents,
/// last spouse) only produce suggestions when present, mirroring the
/// conditionally rendered form sections. Date fields only produce a
/// suggestion when the form date is fully populated.
pub fn generate_suggestions(
    body: Option<&str>,
    nature: DocumentNature,
    form: &FormValues,
) -> SuggestionMap {
    let mut suggestions = SuggestionMap::new();

    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return suggestions,
    };

    match nature {
        DocumentNature::Birth => {
            let titulaire = form.titulaire.as_ref();
            process_field(
                &mut suggestions,
                body,
                "titulaire.nom",
                &patterns::BIRTH_HOLDER_SURNAME,
                person_surname(titulaire),
            );
            process_field(
                &mut suggestions,
                body,
                "titulaire.prenoms",
                &patterns::BIRTH_HOLDER_GIVEN_NAMES,
                person_given_names(titulaire),
            );
            process_field(
                &mut suggestions,
                body,
                "titulaire.lieuNaissance.lieuReprise",
                &patterns::BIRTH_PLACE,
                titulaire
                    .and_then(|t| t.lieu_naissance.as_ref())
                    .map(|l| l.lieu_reprise.as_str())
                    .unwrap_or(""),
            );
            if let Some(date) = titulaire.and_then(|t| t.date_naissance.as_ref()) {
                process_date_field(
                    &mut suggestions,
                    body,
                    "titulaire.dateNaissance",
                    &patterns::BIRTH_DATE,
                    date,
                );
            }
            if let Some(parent1) = form.parent1.as_ref() {
                process_field(
                    &mut suggestions,
                    body,
                    "parent1.nom",
                    &patterns::BIRTH_PARENT1_SURNAME,
                    &parent1.nom,
                );
            }
            if let Some(parent2) = form.parent2.as_ref() {
                process_field(
                    &mut suggestions,
                    body,
                    "parent2.nom",
                    &patterns::BIRTH_PARENT2_SURNAME,
                    &parent2.nom,
                );
            }
        }

        DocumentNature::Marriage => {
            let epoux1 = form.epoux1.as_ref();
            let epoux2 = form.epoux2.as_ref();
            process_field(
                &mut suggestions,
                body,
                "epoux1.nom",
                &patterns::MARRIAGE_SPOUSE1_SURNAME,
                person_surname(epoux1),
            );
            process_field(
                &mut suggestions,
                body,
                "epoux1.prenoms",
                &patterns::MARRIAGE_SPOUSE1_GIVEN_NAMES,
                person_given_names(epoux1),
            );
            process_field(
                &mut suggestions,
                body,
                "epoux2.nom",
                &patterns::MARRIAGE_SPOUSE2_SURNAME,
                person_surname(epoux2),
            );
            process_field(
                &mut suggestions,
                body,
                "epoux2.prenoms",
                &patterns::MARRIAGE_SPOUSE2_GIVEN_NAMES,
                person_given_names(epoux2),
            );
            process_field(
                &mut suggestions,
                body,
                "evenement.lieu.lieuReprise",
                &patterns::MARRIAGE_PLACE,
                event_place(form),
            );
            if let Some(date) = form.evenement.as_ref().and_then(|e| e.date.as_ref()) {
                process_date_field(
                    &mut suggestions,
                    body,
                    "evenement.date",
                    &patterns::MARRIAGE_DATE,
                    date,
                );
            }
            if let Some(pere) = epoux1.and_then(|e| e.pere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "epoux1.pere.nom",
                    &patterns::MARRIAGE_SPOUSE1_FATHER_SURNAME,
                    &pere.nom,
                );
            }
            if let Some(mere) = epoux1.and_then(|e| e.mere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "epoux1.mere.nom",
                    &patterns::MARRIAGE_SPOUSE1_MOTHER_SURNAME,
                    &mere.nom,
                );
            }
            if let Some(pere) = epoux2.and_then(|e| e.pere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "epoux2.pere.nom",
                    &patterns::MARRIAGE_SPOUSE2_FATHER_SURNAME,
                    &pere.nom,
                );
            }
            if let Some(mere) = epoux2.and_then(|e| e.mere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "epoux2.mere.nom",
                    &patterns::MARRIAGE_SPOUSE2_MOTHER_SURNAME,
                    &mere.nom,
                );
            }
        }

        DocumentNature::Death => {
            let defunt = form.defunt.as_ref();
            process_field(
                &mut suggestions,
                body,
                "defunt.nom",
                &patterns::DEATH_DECEDENT_SURNAME,
                person_surname(defunt),
            );
            process_field(
                &mut suggestions,
                body,
                "defunt.prenoms",
                &patterns::DEATH_DECEDENT_GIVEN_NAMES,
                person_given_names(defunt),
            );
            process_field(
                &mut suggestions,
                body,
                "evenement.lieu.lieuReprise",
                &patterns::DEATH_PLACE,
                event_place(form),
            );
            if let Some(date) = form.evenement.as_ref().and_then(|e| e.date.as_ref()) {
                process_date_field(
                    &mut suggestions,
                    body,
                    "evenement.date",
                    &patterns::DEATH_DATE,
                    date,
                );
            }
            if let Some(pere) = defunt.and_then(|d| d.pere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "defunt.pere.nom",
                    &patterns::DEATH_FATHER_SURNAME,
                    &pere.nom,
                );
            }
            if let Some(mere) = defunt.and_then(|d| d.mere.as_ref()) {
                process_field(
                    &mut suggestions,
                    body,
                    "defunt.mere.nom",
                    &patterns::DEATH_MOTHER_SURNAME,
                    &mere.nom,
                );
            }
            if let Some(conjoint) = form.dernier_conjoint.as_ref() {
                process_field(
                    &mut suggestions,
                    body,
                    "dernierConjoint.nom",
                    &patterns::DEATH_LAST_SPOUSE_SURNAME,
                    &conjoint.nom,
                );
            }
        }
    }

    debug!(
        "generated {} suggestions for a {} act",
        suggestions.len(),
        nature
    );
    suggestions
}

fn person_surname(person: Option<&PersonFields>) -> &str {
    person.map(|p| p.nom.as_str()).unwrap_or("")
}

fn person_given_names(person: Option<&PersonFields>) -> &str {
    person.map(|p| p.prenoms.as_str()).unwrap_or("")
}

fn event_place(form: &FormValues) -> &str {
    form.evenement
        .as_ref()
        .and_then(|e| e.lieu.as_ref())
        .map(|l| l.lieu_reprise.as_str())
        .unwrap_or("")
}

/// Extract one datum and store its comparison under the field path.
fn process_field(
    suggestions: &mut SuggestionMap,
    body: &str,
    field_path: &str,
    patterns: &[Regex],
    form_value: &str,
) {
    let extracted = extract_value(body, patterns);
    suggestions.insert(
        field_path.to_string(),
        compare_values(form_value, extracted.as_deref()),
    );
}

/// Date fields compare as assembled "DD/MM/YYYY" strings.
///
/// No suggestion is emitted when extraction fails, when the extracted string
/// has no recognizable date, or when the form date is only partially filled.
/// A partial form date is a normal in-progress state, not an error.
fn process_date_field(
    suggestions: &mut SuggestionMap,
    body: &str,
    field_path: &str,
    patterns: &[Regex],
    form_date: &DateFields,
) {
    let Some(extracted) = extract_value(body, patterns) else {
        return;
    };
    let Some(extracted_date) = parse_extracted_date(&extracted) else {
        return;
    };
    if !form_date.is_complete() {
        return;
    }
    suggestions.insert(
        field_path.to_string(),
        compare_values(&form_date.formatted(), Some(&extracted_date.formatted())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::{EventFields, ParentFields, PersonFields, PlaceFields};
    use crate::models::suggestion::MatchState;
    use pretty_assertions::assert_eq;

    fn death_form() -> FormValues {
        FormValues {
            defunt: Some(PersonFields {
                nom: "DUPONT".into(),
                ..Default::default()
            }),
            evenement: Some(EventFields {
                date: Some(DateFields {
                    jour: "24".into(),
                    mois: "10".into(),
                    annee: "1985".into(),
                }),
                lieu: Some(PlaceFields {
                    lieu_reprise: "Paris".into(),
                }),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn empty_body_yields_no_suggestions() {
        assert!(generate_suggestions(None, DocumentNature::Death, &death_form()).is_empty());
        assert!(generate_suggestions(Some("   "), DocumentNature::Death, &death_form()).is_empty());
    }

    #[test]
    fn death_date_assembles_and_matches_exactly() {
        let body = "décédé le 24/10/1985 à Paris";
        let suggestions = generate_suggestions(Some(body), DocumentNature::Death, &death_form());

        let date = &suggestions["evenement.date"];
        assert_eq!(date.state, MatchState::Identical);
        assert_eq!(date.score, 100);
        assert_eq!(date.value, "24/10/1985");

        let place = &suggestions["evenement.lieu.lieuReprise"];
        assert_eq!(place.state, MatchState::Identical);
        assert_eq!(place.score, 100);
    }

    #[test]
    fn partial_form_date_emits_no_date_suggestion() {
        let mut form = death_form();
        form.evenement.as_mut().unwrap().date.as_mut().unwrap().mois = String::new();
        let suggestions = generate_suggestions(
            Some("décédé le 24/10/1985 à Paris"),
            DocumentNature::Death,
            &form,
        );
        assert!(!suggestions.contains_key("evenement.date"));
    }

    #[test]
    fn absent_form_date_object_emits_no_date_suggestion() {
        let mut form = death_form();
        form.evenement.as_mut().unwrap().date = None;
        let suggestions = generate_suggestions(
            Some("décédé le 24/10/1985 à Paris"),
            DocumentNature::Death,
            &form,
        );
        assert!(!suggestions.contains_key("evenement.date"));
    }

    #[test]
    fn unmatched_fields_report_not_found() {
        let suggestions = generate_suggestions(
            Some("décédé le 24/10/1985 à Paris"),
            DocumentNature::Death,
            &death_form(),
        );
        // Nothing in the body announces the decedent's surname.
        assert_eq!(suggestions["defunt.nom"].state, MatchState::NotFound);
        assert_eq!(suggestions["defunt.nom"].value, "");
    }

    #[test]
    fn optional_sections_are_skipped_when_absent() {
        let suggestions = generate_suggestions(
            Some("décédé le 24/10/1985 à Paris"),
            DocumentNature::Death,
            &death_form(),
        );
        assert!(!suggestions.contains_key("defunt.pere.nom"));
        assert!(!suggestions.contains_key("defunt.mere.nom"));
        assert!(!suggestions.contains_key("dernierConjoint.nom"));
    }

    #[test]
    fn present_parent_sections_produce_suggestions() {
        let mut form = death_form();
        form.defunt.as_mut().unwrap().pere = Some(ParentFields {
            nom: "DUPONT".into(),
            ..Default::default()
        });
        let body = "Défunt: DUPONT Jean, père: DUPONT Prénom: Marcel";
        let suggestions = generate_suggestions(Some(body), DocumentNature::Death, &form);
        let pere = &suggestions["defunt.pere.nom"];
        assert_eq!(pere.state, MatchState::Identical);
    }

    #[test]
    fn birth_form_fields_match_their_patterns() {
        let form = FormValues {
            titulaire: Some(PersonFields {
                nom: "DUPONT".into(),
                prenoms: "Jean Paul".into(),
                ..Default::default()
            }),
            parent1: Some(PersonFields {
                nom: "DUPONT".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let body = "Nom: DUPONT Prénoms: Jean Paul père: DUPONT";
        let suggestions = generate_suggestions(Some(body), DocumentNature::Birth, &form);

        assert_eq!(suggestions["titulaire.nom"].state, MatchState::Identical);
        assert_eq!(suggestions["parent1.nom"].state, MatchState::Identical);
        assert!(!suggestions.contains_key("parent2.nom"));

        // Without a boundary keyword after the given names, the pattern
        // over-captures to the end of the text. The scorer still recognizes
        // the form value inside the capture: containment, score 80.
        let prenoms = &suggestions["titulaire.prenoms"];
        assert_eq!(prenoms.state, MatchState::Different);
        assert_eq!(prenoms.score, 80);
    }

    #[test]
    fn marriage_spouse_surnames_compare_independently() {
        let form = FormValues {
            epoux1: Some(PersonFields {
                nom: "MARTIN".into(),
                ..Default::default()
            }),
            epoux2: Some(PersonFields {
                nom: "DURAND".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let body = "Époux: MARTIN Prénom: Pierre, Épouse: DUBOIS Prénom: Marie";
        let suggestions = generate_suggestions(Some(body), DocumentNature::Marriage, &form);

        assert_eq!(suggestions["epoux1.nom"].state, MatchState::Identical);
        // Form says DURAND, act says DUBOIS: a conflict, not a match.
        let epoux2 = &suggestions["epoux2.nom"];
        assert_eq!(epoux2.value, "dubois");
        assert_eq!(epoux2.state, MatchState::NotFound);
    }

    #[test]
    fn absent_form_value_still_gets_a_suggestion_when_text_extracts() {
        // No defunt section at all, but the act names one.
        let form = FormValues {
            evenement: Some(EventFields::default()),
            ..Default::default()
        };
        let body = "Défunt: DUPONT prénom Jean";
        let suggestions = generate_suggestions(Some(body), DocumentNature::Death, &form);
        let nom = &suggestions["defunt.nom"];
        // Empty form value against an extraction: containment path, score 80.
        assert_eq!(nom.state, MatchState::Different);
        assert_eq!(nom.score, 80);
        assert_eq!(nom.value, "dupont");
    }
}
