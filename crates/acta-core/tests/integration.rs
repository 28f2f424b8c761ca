//! End-to-end scenarios over the public API: an operator verifying a form
//! against an act body, and filling fields by selecting text in it.

use std::cell::RefCell;
use std::rc::Rc;

use acta_core::{
    generate_suggestions, DocumentNature, ExtractionSession, FeedbackKind, FieldSuggestion,
    FormValues, MatchState, SuggestionSummary,
};

#[test]
fn death_act_verification_end_to_end() {
    let body = "Acte de décès. Défunt: DUPONT prénom Jean, décédé le 24/10/1985 à Paris";
    let form = FormValues::from_json(
        r#"{
            "defunt": { "nom": "DUPONT", "prenoms": "Jean" },
            "evenement": {
                "date": { "jour": "24", "mois": "10", "annee": "1985" },
                "lieu": { "lieuReprise": "Paris" }
            }
        }"#,
    )
    .unwrap();

    let suggestions = generate_suggestions(Some(body), DocumentNature::Death, &form);

    let date = &suggestions["evenement.date"];
    assert_eq!(date.state, MatchState::Identical);
    assert_eq!(date.score, 100);
    assert_eq!(date.value, "24/10/1985");

    let summary = SuggestionSummary::of(&suggestions);
    assert_eq!(summary.total, suggestions.len());
    assert_eq!(
        summary.identical + summary.different + summary.not_found,
        summary.total
    );
    assert!(summary.identical >= 1);
}

#[test]
fn selection_flow_fills_the_focused_field() {
    let delivered: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));

    let mut session = ExtractionSession::new();
    let log = Rc::clone(&delivered);
    session.register_handler(
        "defunt.nom",
        Box::new(move |text, field| {
            log.borrow_mut().push((text.to_string(), field.to_string()));
        }),
    );

    // (1) focus the surname field
    session.set_active_field("defunt.nom");
    assert_eq!(session.active_field(), Some("defunt.nom"));

    // (2) select raw text in the act: cleaned and delivered verbatim
    session.on_text_selected("  DUPONT  \n  ");
    assert_eq!(
        delivered.borrow().as_slice(),
        &[("DUPONT".to_string(), "defunt.nom".to_string())]
    );
    let feedback = session.feedback().expect("success feedback");
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert!(feedback.message.starts_with("Copié"));

    // the field consumes the delivery
    session.clear_extracted_text();
    assert!(session.extracted_text().is_none());

    // (3) select again with no field focused: error feedback, no delivery
    session.clear_active_field();
    session.on_text_selected("MARTIN");
    assert_eq!(delivered.borrow().len(), 1);
    assert_eq!(session.feedback().unwrap().kind, FeedbackKind::Error);
}

#[test]
fn spelled_out_date_reaches_the_form_through_conversion() {
    use acta_core::{classify_field, convert_french_text, FieldType};

    // The operator selects each spelled-out component of
    // "vingt-quatre octobre mil neuf cent quatre-vingt-cinq".
    assert_eq!(classify_field("evenement.date.jour"), FieldType::Day);
    assert_eq!(convert_french_text("vingt-quatre", FieldType::Day), "24");
    assert_eq!(convert_french_text("octobre", FieldType::Month), "10");
    assert_eq!(
        convert_french_text("mil neuf cent quatre-vingt-cinq", FieldType::Year),
        "1985"
    );
}

#[test]
fn conflicting_surname_is_flagged_not_silently_accepted() {
    let body = "Défunt: DURAND prénom Jean, décédé le 24/10/1985 à Paris";
    let form = FormValues::from_json(r#"{ "defunt": { "nom": "DUPONT" } }"#).unwrap();

    let suggestions = generate_suggestions(Some(body), DocumentNature::Death, &form);
    let nom: &FieldSuggestion = &suggestions["defunt.nom"];

    assert_ne!(nom.state, MatchState::Identical);
    assert!(!nom.value.is_empty(), "extracted value is still surfaced");
}
